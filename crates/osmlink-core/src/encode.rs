//! Short-link encoding, the inverse of [`crate::decode`].

use crate::alphabet;
use crate::error::EncodeError;
use crate::geo::GeoCoordinate;
use crate::tile::{TileAddress, LEVELS_PER_SYMBOL, MAX_ZOOM};

/// Encodes a tile address as a short-link code.
///
/// The zoom must be a multiple of 3 because each symbol carries exactly three
/// levels.
pub fn encode_tile(tile: &TileAddress) -> Result<String, EncodeError> {
    if tile.zoom > MAX_ZOOM {
        return Err(EncodeError::InvalidZoom(u32::from(tile.zoom)));
    }
    if tile.zoom % LEVELS_PER_SYMBOL != 0 {
        return Err(EncodeError::UnalignedZoom(tile.zoom));
    }
    if !tile.in_bounds() {
        return Err(EncodeError::TileOutOfRange {
            x: tile.x,
            y: tile.y,
            zoom: tile.zoom,
        });
    }

    let symbols = tile.zoom / LEVELS_PER_SYMBOL;
    let mut code = String::with_capacity(symbols as usize);
    for s in 0..symbols {
        let mut value = 0u8;
        for i in 1..=LEVELS_PER_SYMBOL {
            value = (value << 2) | tile.group_at(s * LEVELS_PER_SYMBOL + i);
        }
        code.push(alphabet::symbol(value));
    }
    Ok(code)
}

/// Encodes the tile at `zoom` containing (`lat`, `lon`).
///
/// Decoding the result gives the north-west corner of that tile, not the
/// original point.
pub fn encode(lat: f64, lon: f64, zoom: u8) -> Result<String, EncodeError> {
    if zoom % LEVELS_PER_SYMBOL != 0 {
        return Err(EncodeError::UnalignedZoom(zoom));
    }
    let tile = GeoCoordinate {
        lat,
        lon,
        zoom: u32::from(zoom),
    }
    .to_tile()?;
    let code = encode_tile(&tile)?;
    tracing::debug!(lat, lon, zoom, code = %code, "encoded short link");
    Ok(code)
}
