//! CLI command handlers, one per binary.

mod decode;
mod encode;

pub use decode::run_decode;
pub use encode::run_encode;
