//! `encode_osm <lat> <lon> <zoom>` – print the short-link code for a point.

use anyhow::{Context, Result};
use osmlink_core::link;
use std::io::Write;

pub fn run_encode(lat: f64, lon: f64, zoom: u8, url: bool, out: &mut impl Write) -> Result<()> {
    let code = osmlink_core::encode(lat, lon, zoom)
        .with_context(|| format!("encode ({lat}, {lon}) at zoom {zoom}"))?;
    if url {
        writeln!(out, "{}", link::short_url(&code))?;
    } else {
        writeln!(out, "{code}")?;
    }
    Ok(())
}
