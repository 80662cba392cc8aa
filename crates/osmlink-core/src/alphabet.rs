//! The 64-symbol short-link alphabet.
//!
//! Symbol order is fixed: `A-Z` (0-25), `a-z` (26-51), `0-9` (52-61),
//! `-` (62), `_` (63). Lookup goes through a table built at compile time,
//! so membership and index are decided in one place.

/// Short-link symbols, indexed by their 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marker for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// ASCII byte -> symbol index, `INVALID` for everything else.
static LOOKUP: [u8; 128] = build_lookup();

const fn build_lookup() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the 6-bit index of `c`, or `None` if `c` is not a short-link symbol.
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match LOOKUP[c as usize] {
        INVALID => None,
        idx => Some(idx),
    }
}

/// Returns the symbol for a 6-bit index. Only the low six bits are used.
#[inline]
pub fn symbol(index: u8) -> char {
    ALPHABET[(index & 0x3F) as usize] as char
}
