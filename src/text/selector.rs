//! Variation selector mapping for ghost-hex.
//!
//! Each ASCII byte maps to exactly one codepoint of the supplementary
//! variation selector block (VS17-VS144, U+E0100..=U+E017F). The mapping is
//! a bijection over the 128 ASCII values, so no escaping is ever needed.

use crate::{ASCII_MAX, VS_END, VS_START};

/// Maps an ASCII byte to its variation selector.
///
/// Returns `None` for bytes above 0x7F.
pub fn byte_to_selector(byte: u8) -> Option<char> {
    if byte > ASCII_MAX {
        return None;
    }
    char::from_u32(VS_START + u32::from(byte))
}

/// Maps a variation selector back to the ASCII byte it carries.
///
/// Returns `None` when `c` lies outside U+E0100..=U+E017F.
pub fn selector_to_byte(c: char) -> Option<u8> {
    if !is_selector(c) {
        return None;
    }
    u8::try_from(u32::from(c) - VS_START).ok()
}

/// Returns true if `c` is one of the 128 payload selectors.
pub fn is_selector(c: char) -> bool {
    (VS_START..=VS_END).contains(&u32::from(c))
}

/// Byte offset where the maximal trailing run of selectors begins.
///
/// Equals `text.len()` when the text does not end in a selector. The offset
/// is always a char boundary, so `&text[..offset]` is the carrier.
pub fn trailing_selector_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .take_while(|&(_, c)| is_selector(c))
        .last()
        .map_or(text.len(), |(idx, _)| idx)
}
