//! Short-link decoding: code -> tile address -> latitude/longitude/zoom.

use crate::alphabet;
use crate::error::DecodeError;
use crate::geo::GeoCoordinate;
use crate::tile::{TileAddress, LEVELS_PER_SYMBOL, MAX_ZOOM};

/// Longest code whose tile address fits in 64-bit accumulators.
///
/// Longer codes still decode; their position is accumulated as a fraction of
/// the world instead of as integer tile indices.
pub const MAX_TILE_CODE_LEN: usize = (MAX_ZOOM / LEVELS_PER_SYMBOL) as usize;

/// Maps every character to its 6-bit value, stopping at the first invalid one.
fn symbol_values(code: &str) -> Result<Vec<u8>, DecodeError> {
    code.chars()
        .enumerate()
        .map(|(position, ch)| {
            alphabet::index_of(ch).ok_or(DecodeError::InvalidCharacter { ch, position })
        })
        .collect()
}

/// The three 2-bit groups of a symbol value, most significant first.
fn groups(value: u8) -> impl Iterator<Item = u8> {
    (0..LEVELS_PER_SYMBOL).map(move |i| (value >> ((2 - i) * 2)) & 0b11)
}

fn tile_from_values(values: &[u8]) -> TileAddress {
    let mut tile = TileAddress::default();
    for &value in values {
        for bits in groups(value) {
            tile.push_group(bits);
        }
    }
    tile
}

/// Same walk as [`tile_from_values`], but `x / n` and `y / n` are built
/// directly: the group at depth `k` adds its bits times `2^-k`.
fn fraction_from_values(values: &[u8]) -> GeoCoordinate {
    let mut fx = 0.0_f64;
    let mut fy = 0.0_f64;
    let mut scale = 1.0_f64;
    let mut zoom = 0u32;
    for &value in values {
        for bits in groups(value) {
            scale *= 0.5;
            fx += f64::from(bits & 1) * scale;
            fy += f64::from((bits >> 1) & 1) * scale;
            zoom = zoom.saturating_add(1);
        }
    }
    GeoCoordinate::from_fraction(fx, fy, zoom)
}

/// Decodes a short-link code into the tile address it names.
///
/// Every symbol contributes three 2-bit groups, most significant first. The
/// empty code is the single zoom-0 tile. Returns `Ok(None)` for a valid code
/// longer than [`MAX_TILE_CODE_LEN`], whose tile indices do not fit in `u64`.
pub fn decode_tile(code: &str) -> Result<Option<TileAddress>, DecodeError> {
    let values = symbol_values(code)?;
    if values.len() > MAX_TILE_CODE_LEN {
        return Ok(None);
    }
    Ok(Some(tile_from_values(&values)))
}

/// Decodes a short-link code into the north-west corner of its tile.
///
/// Total over the alphabet: any code made only of short-link symbols decodes,
/// with zoom `3 * len`.
///
/// # Examples
///
/// - `decode("")` → zoom 0, lon -180, lat ≈ 85.0511
/// - `decode("_")` → zoom 3, lon 135, lat ≈ -79.1713
pub fn decode(code: &str) -> Result<GeoCoordinate, DecodeError> {
    let values = symbol_values(code)?;
    let coord = if values.len() <= MAX_TILE_CODE_LEN {
        let tile = tile_from_values(&values);
        tracing::debug!(code, x = tile.x, y = tile.y, zoom = tile.zoom, "decoded tile");
        GeoCoordinate::from_tile(&tile)
    } else {
        fraction_from_values(&values)
    };
    tracing::debug!(
        code,
        lat = coord.lat,
        lon = coord.lon,
        zoom = coord.zoom,
        "decoded short link"
    );
    Ok(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    const NORTH_LIMIT: f64 = 85.051_128_779_806_59;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn tile(code: &str) -> TileAddress {
        decode_tile(code).unwrap().unwrap()
    }

    #[test]
    fn empty_code_is_zoom_zero() {
        let c = decode("").unwrap();
        assert_eq!(c.zoom, 0);
        assert_eq!(c.lon, -180.0);
        assert_close(c.lat, NORTH_LIMIT);
        let expected = std::f64::consts::PI.sinh().atan().to_degrees();
        assert_close(c.lat, expected);
    }

    #[test]
    fn first_symbol_stays_at_origin() {
        assert_eq!(tile("A"), TileAddress::new(0, 0, 3));
        let c = decode("A").unwrap();
        assert_eq!(c.zoom, 3);
        assert_eq!(c.lon, -180.0);
        assert_close(c.lat, NORTH_LIMIT);
    }

    #[test]
    fn last_symbol_sets_every_bit() {
        assert_eq!(tile("_"), TileAddress::new(7, 7, 3));
        let c = decode("_").unwrap();
        assert_eq!(c.zoom, 3);
        assert_eq!(c.lon, 135.0);
        assert!((c.lat - -79.171_334_64).abs() < 1e-6, "lat {}", c.lat);
    }

    #[test]
    fn groups_split_into_x_and_y_bits() {
        // 'B' = 0b000001: only the last group carries an x bit.
        assert_eq!(tile("B"), TileAddress::new(1, 0, 3));
        // 'C' = 0b000010: only the last group carries a y bit.
        assert_eq!(tile("C"), TileAddress::new(0, 1, 3));
        // 'Q' = 0b010000: first group is 01.
        assert_eq!(tile("Q"), TileAddress::new(4, 0, 3));
        // 'g' = 0b100000: first group is 10.
        assert_eq!(tile("g"), TileAddress::new(0, 4, 3));
    }

    #[test]
    fn symbols_accumulate_in_order() {
        // "_A": x = y = 0b111000
        assert_eq!(tile("_A"), TileAddress::new(56, 56, 6));
        // "A_": x = y = 0b000111
        assert_eq!(tile("A_"), TileAddress::new(7, 7, 6));
    }

    #[test]
    fn zoom_is_three_per_symbol_and_longitude_in_range() {
        let mut code = String::new();
        for (i, &b) in ALPHABET.iter().cycle().step_by(7).take(40).enumerate() {
            code.push(b as char);
            let c = decode(&code).unwrap();
            assert_eq!(c.zoom as usize, 3 * (i + 1));
            assert!((-180.0..=180.0).contains(&c.lon), "lon {}", c.lon);
            assert!((-90.0..=90.0).contains(&c.lat), "lat {}", c.lat);
        }
    }

    #[test]
    fn invalid_character_reports_symbol_and_position() {
        assert_eq!(
            decode("ab!cd"),
            Err(DecodeError::InvalidCharacter { ch: '!', position: 2 })
        );
        assert_eq!(
            decode("~"),
            Err(DecodeError::InvalidCharacter { ch: '~', position: 0 })
        );
    }

    #[test]
    fn stops_at_first_invalid_character() {
        assert_eq!(
            decode_tile("A?B!"),
            Err(DecodeError::InvalidCharacter { ch: '?', position: 1 })
        );
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(
            decode("é!"),
            Err(DecodeError::InvalidCharacter { ch: 'é', position: 0 })
        );
        assert_eq!(
            decode("Aé"),
            Err(DecodeError::InvalidCharacter { ch: 'é', position: 1 })
        );
    }

    #[test]
    fn deepest_tile_code_fills_u64() {
        let t = tile(&"_".repeat(MAX_TILE_CODE_LEN));
        assert_eq!(t.zoom, 63);
        assert_eq!(t.x, (1u64 << 63) - 1);
        assert_eq!(t.y, (1u64 << 63) - 1);
    }

    #[test]
    fn long_codes_decode_with_zoom_three_per_symbol() {
        for len in [MAX_TILE_CODE_LEN + 1, 30, 64, 500] {
            for sym in ['A', '_', 'g', 'Q'] {
                let code: String = std::iter::repeat(sym).take(len).collect();
                let c = decode(&code).unwrap();
                assert_eq!(c.zoom as usize, 3 * len, "code {sym} x {len}");
                assert!((-180.0..=180.0).contains(&c.lon), "lon {}", c.lon);
                assert!((-90.0..=90.0).contains(&c.lat), "lat {}", c.lat);
            }
        }
        let c = decode(&"A".repeat(22)).unwrap();
        assert_eq!(c.zoom, 66);
        assert_eq!(c.lon, -180.0);
        assert_close(c.lat, NORTH_LIMIT);
        assert_eq!(decode_tile(&"A".repeat(22)), Ok(None));
    }

    #[test]
    fn long_code_continues_from_its_prefix() {
        let prefix = "0EEQjEzY-_9abcdXYZ123";
        assert_eq!(prefix.len(), MAX_TILE_CODE_LEN);
        let short = decode(prefix).unwrap();
        // Trailing 'A's add only zero bits: same corner, deeper zoom.
        let long = decode(&format!("{prefix}AAAA")).unwrap();
        assert_eq!(long.zoom, short.zoom + 12);
        assert!((long.lon - short.lon).abs() < 1e-9);
        assert!((long.lat - short.lat).abs() < 1e-9);
        // Trailing '_'s stay inside the deepest 64-bit tile.
        let nudged = decode(&format!("{prefix}____")).unwrap();
        assert!((nudged.lon - short.lon).abs() < 1e-9);
        assert!((nudged.lat - short.lat).abs() < 1e-9);
    }

    #[test]
    fn invalid_character_in_long_code() {
        let mut code = "A".repeat(40);
        code.push('!');
        assert_eq!(
            decode(&code),
            Err(DecodeError::InvalidCharacter { ch: '!', position: 40 })
        );
    }

    #[test]
    fn repeated_decodes_are_identical() {
        let long = "ZzY-_9".repeat(8);
        for code in ["", "A", "_", "0EEQjE", "ZzY-_9", long.as_str()] {
            let a = decode(code).unwrap();
            let b = decode(code).unwrap();
            assert_eq!(a.lat.to_bits(), b.lat.to_bits());
            assert_eq!(a.lon.to_bits(), b.lon.to_bits());
            assert_eq!(a.zoom, b.zoom);
        }
    }
}
