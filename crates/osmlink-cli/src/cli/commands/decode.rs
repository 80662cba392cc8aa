//! `decode_osm <code>` – decode a short link and print the coordinate.

use anyhow::{Context, Result};
use osmlink_core::format::{self, OutputFormat};
use osmlink_core::link;
use std::io::Write;

pub fn run_decode(
    input: &str,
    format: OutputFormat,
    precision: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let code = link::extract_code(input);
    if code != input {
        tracing::debug!("extracted code {:?} from {:?}", code, input);
    }
    let coord =
        osmlink_core::decode(&code).with_context(|| format!("decode short link {code:?}"))?;
    let line = format::render(&coord, format, precision)?;
    writeln!(out, "{line}")?;
    Ok(())
}
