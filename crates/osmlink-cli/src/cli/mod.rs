//! CLI for the osmlink short-link tools.

mod commands;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use osmlink_core::config::{self, OsmlinkConfig};
use osmlink_core::format::OutputFormat;
use std::io::{self, Write};
use std::path::PathBuf;

use commands::{run_decode, run_encode};

/// `decode_osm`: print the latitude, longitude and zoom named by a short link.
#[derive(Debug, Parser)]
#[command(name = "decode_osm")]
#[command(about = "Decode a map short-link code into latitude/longitude/zoom", long_about = None)]
pub struct DecodeCli {
    /// Short-link code (e.g. `0EEQjE`) or full URL (e.g. `https://osm.org/go/0EEQjE`).
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub code: String,

    /// Output format: json (default) or plain.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Round latitude and longitude to N decimal places.
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Read settings from this TOML file instead of the XDG config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl DecodeCli {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        cli.run(&mut io::stdout().lock())
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let cfg = load_config(self.config.as_ref())?;
        let format = self.format.unwrap_or(cfg.format);
        let precision = self.precision.or(cfg.precision);
        run_decode(&self.code, format, precision, out)
    }
}

/// `encode_osm`: print the short-link code for a point at a zoom level.
#[derive(Debug, Parser)]
#[command(name = "encode_osm")]
#[command(about = "Encode latitude/longitude/zoom as a map short-link code", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct EncodeCli {
    /// Latitude in degrees (-85.0511 to 85.0511).
    pub lat: f64,

    /// Longitude in degrees (-180 to 180).
    pub lon: f64,

    /// Zoom level; must be a multiple of 3.
    pub zoom: u8,

    /// Print the full short-link URL instead of the bare code.
    #[arg(long)]
    pub url: bool,
}

impl EncodeCli {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        cli.run(&mut io::stdout().lock())
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        run_encode(self.lat, self.lon, self.zoom, self.url, out)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<OsmlinkConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_default()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
