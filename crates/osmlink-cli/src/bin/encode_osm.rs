use osmlink_cli::cli::EncodeCli;
use osmlink_core::logging;

fn main() {
    if let Err(file_err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::debug!("file logging unavailable, using stderr: {:#}", file_err),
            Err(err) => eprintln!("encode_osm: logging disabled: {:#}", err),
        }
    }

    if let Err(err) = EncodeCli::run_from_args() {
        eprintln!("encode_osm error: {:#}", err);
        std::process::exit(1);
    }
}
