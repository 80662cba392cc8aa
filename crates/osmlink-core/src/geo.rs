//! Web Mercator projection between tile addresses and WGS84 degrees.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::EncodeError;
use crate::tile::{TileAddress, MAX_ZOOM};

/// Web Mercator valid latitude range.
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Decoded position: the north-west corner of a tile, plus its zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
    /// Zoom level; three per short-link symbol, unbounded by the 64-bit tile grid.
    pub zoom: u32,
}

impl GeoCoordinate {
    /// Projects a tile address to the latitude/longitude of its north-west corner.
    pub fn from_tile(tile: &TileAddress) -> Self {
        let n = tile.grid_size();

        let lon = (tile.x as f64 * 360.0) / n - 180.0;

        // Inverse Web Mercator
        let lat_rad = (PI * (1.0 - (2.0 * tile.y as f64) / n)).sinh().atan();
        let lat = lat_rad * 180.0 / PI;

        Self {
            lat,
            lon,
            zoom: u32::from(tile.zoom),
        }
    }

    /// Projects a position given as fractions of the world (`x / n`, `y / n`,
    /// both in `0.0..=1.0`), for zooms too deep for integer tile indices.
    pub fn from_fraction(fx: f64, fy: f64, zoom: u32) -> Self {
        let lon = fx * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * fy)).sinh().atan() * 180.0 / PI;
        Self { lat, lon, zoom }
    }

    /// Finds the tile at `zoom` containing this coordinate.
    ///
    /// Points on the east or south edge fall into the last column/row.
    pub fn to_tile(&self) -> Result<TileAddress, EncodeError> {
        if !(MIN_LAT..=MAX_LAT).contains(&self.lat) {
            return Err(EncodeError::InvalidLatitude(self.lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&self.lon) {
            return Err(EncodeError::InvalidLongitude(self.lon));
        }
        let zoom = match u8::try_from(self.zoom) {
            Ok(z) if z <= MAX_ZOOM => z,
            _ => return Err(EncodeError::InvalidZoom(self.zoom)),
        };

        let n = 2.0_f64.powi(i32::from(zoom));
        let last = (1u64 << zoom) - 1;

        let x = ((self.lon + 180.0) / 360.0 * n) as u64;

        let lat_rad = self.lat * PI / 180.0;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u64;

        Ok(TileAddress::new(x.min(last), y.min(last), zoom))
    }

    /// Copy with latitude and longitude rounded to `digits` decimal places.
    pub fn rounded(&self, digits: usize) -> Self {
        let factor = 10f64.powi(digits as i32);
        Self {
            lat: (self.lat * factor).round() / factor,
            lon: (self.lon * factor).round() / factor,
            zoom: self.zoom,
        }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lat, self.lon, self.zoom)
    }
}
