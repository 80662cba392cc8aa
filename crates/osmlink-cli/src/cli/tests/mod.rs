//! CLI parse tests, one file per binary.


use super::{DecodeCli, EncodeCli};
use clap::Parser;

pub(super) fn parse_decode(args: &[&str]) -> DecodeCli {
    DecodeCli::try_parse_from(args).unwrap()
}

pub(super) fn parse_encode(args: &[&str]) -> EncodeCli {
    EncodeCli::try_parse_from(args).unwrap()
}
