use osmlink_cli::cli::DecodeCli;
use osmlink_core::logging;

fn main() {
    // Initialize logging as early as possible.
    if let Err(file_err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::debug!("file logging unavailable, using stderr: {:#}", file_err),
            Err(err) => eprintln!("decode_osm: logging disabled: {:#}", err),
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = DecodeCli::run_from_args() {
        eprintln!("decode_osm error: {:#}", err);
        std::process::exit(1);
    }
}
