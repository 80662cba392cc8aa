//! Map short-link codes: decode `osm.org/go/<code>` style codes into
//! latitude/longitude/zoom, and encode coordinates back into codes.

pub mod config;
pub mod logging;

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod geo;
pub mod link;
pub mod tile;

pub use decode::{decode, decode_tile, MAX_TILE_CODE_LEN};
pub use encode::{encode, encode_tile};
pub use error::{DecodeError, EncodeError};
pub use geo::GeoCoordinate;
pub use tile::TileAddress;
