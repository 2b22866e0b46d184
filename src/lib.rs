//! # ghost-hex - hide ASCII in plain sight
//!
//! ghost-hex hides an ASCII payload inside ordinary text by appending one
//! Unicode variation selector (VS17-VS144, U+E0100..=U+E017F) per payload
//! byte after a visible carrier string. Most renderers draw nothing for
//! those codepoints, so the text looks unchanged.
//!
//! ## Example Usage
//!
//! ```rust
//! use ghost_hex::{decode, encode};
//!
//! let encoded = encode("hi", "ok", false).unwrap();
//! assert_eq!(encoded.chars().count(), 4);
//!
//! let decoded = decode(&encoded);
//! assert_eq!(decoded.carrier, "hi");
//! assert_eq!(decoded.payload, "ok");
//! ```
//!
//! ## Limitations
//!
//! - Payload characters must be in 0x00..=0x7F.
//! - Only the trailing selector run is decoded. Selectors in the middle of
//!   the text are treated as part of the carrier.
//!
//! ## Modules
//!
//! - [`text`]: Selector mapping and trailing-run detection
//! - [`encoder`]: Carrier + payload encoding
//! - [`decoder`]: Carrier/payload splitting (never fails)

/// First payload selector (VS17), carries byte 0x00.
pub const VS_START: u32 = 0xE0100;

/// Last payload selector (VS144), carries byte 0x7F.
pub const VS_END: u32 = 0xE017F;

/// Largest payload byte value.
pub const ASCII_MAX: u8 = 0x7F;

pub mod decoder;
pub mod encoder;
pub mod text;

pub use decoder::{decode, has_payload, payload_len, split_encoded, Decoded};
pub use encoder::{
    encode, encode_detailed, encode_payload, encode_payload_lossy, encode_with_config,
    EncodedText, EncoderConfig, EncoderError, LossyPayload,
};
pub use text::selector::{byte_to_selector, is_selector, selector_to_byte};
