//! Payload decoding for ghost-hex.
//!
//! Only the maximal trailing run of variation selectors is payload. Selectors
//! that appear earlier in the text stay in the carrier untouched.
//!
//! Decoding never fails: any string splits into a (possibly empty) carrier
//! and a (possibly empty) payload.

use log::trace;

use crate::text::selector::{is_selector, selector_to_byte, trailing_selector_start};

/// Result of decoding a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Everything before the trailing selector run.
    pub carrier: String,
    /// The ASCII payload carried by the trailing run, in original order.
    pub payload: String,
}

impl Decoded {
    /// Returns true if the text carried any payload.
    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Number of payload bytes recovered from the trailing run.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// One-line status describing what was recovered.
    pub fn summary(&self) -> String {
        match self.payload_len() {
            0 => "no trailing vs payload found.".to_string(),
            n => format!("{n} byte(s) recovered from trailing vs."),
        }
    }
}

/// Splits `text` into carrier and payload.
pub fn decode(text: &str) -> Decoded {
    let start = trailing_selector_start(text);
    let (carrier, selectors) = text.split_at(start);

    let payload: String = selectors
        .chars()
        .filter_map(selector_to_byte)
        .map(char::from)
        .collect();

    trace!(
        "split text at byte {}: {} carrier bytes, {} payload chars",
        start,
        carrier.len(),
        payload.len()
    );

    Decoded {
        carrier: carrier.to_string(),
        payload,
    }
}

/// Tuple form of [`decode`]: `(carrier, payload)`.
pub fn split_encoded(text: &str) -> (String, String) {
    let Decoded { carrier, payload } = decode(text);
    (carrier, payload)
}

/// Returns true if `text` ends with at least one payload selector.
pub fn has_payload(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_selector)
}

/// Number of payload characters in the trailing run of `text`.
pub fn payload_len(text: &str) -> usize {
    text.chars().rev().take_while(|&c| is_selector(c)).count()
}
