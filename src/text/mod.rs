//! Text processing for ghost-hex.
//!
//! This module provides:
//! - The byte <-> variation selector bijection
//! - Detection of the trailing selector run

pub mod selector;

pub use selector::{byte_to_selector, is_selector, selector_to_byte, trailing_selector_start};
