//! Rendering decoded coordinates for output.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geo::GeoCoordinate;

/// Most decimal places worth printing for an `f64` degree value.
pub const MAX_PRECISION: usize = 15;

/// Output encoding for a decoded coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"lat":..,"lon":..,"zoom":..}` on one line.
    #[default]
    Json,
    /// `lat lon zoom` separated by spaces.
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            other => Err(format!("unknown output format '{other}' (expected json or plain)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Plain => f.write_str("plain"),
        }
    }
}

/// Renders `coord` as a single line (no trailing newline).
pub fn render(coord: &GeoCoordinate, format: OutputFormat, precision: Option<usize>) -> Result<String> {
    let coord = match precision {
        Some(p) => {
            ensure!(p <= MAX_PRECISION, "precision {p} exceeds maximum of {MAX_PRECISION}");
            coord.rounded(p)
        }
        None => *coord,
    };
    match format {
        OutputFormat::Json => serde_json::to_string(&coord).context("serialize coordinate"),
        OutputFormat::Plain => Ok(coord.to_string()),
    }
}
