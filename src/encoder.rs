//! Payload encoding for ghost-hex.
//!
//! The encoder appends one variation selector per payload character to the
//! carrier. The carrier itself is copied through untouched.

use log::debug;
use thiserror::Error;

use crate::text::selector::byte_to_selector;

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error(
        "non-ASCII payload character {ch:?} (U+{code:04X}); only 0x00-0x7F are supported"
    )]
    InvalidPayloadCharacter { ch: char, code: u32 },

    #[error("carrier text is required")]
    EmptyCarrier,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Accept an empty carrier (the output is then only selectors).
    pub allow_empty_carrier: bool,
    /// Drop non-ASCII payload characters instead of failing.
    pub skip_non_ascii: bool,
}

/// Payload selectors plus what was left out of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LossyPayload {
    /// One selector per encoded payload character.
    pub encoded: String,
    /// Number of payload bytes that made it into `encoded`.
    pub ascii_count: usize,
    /// Distinct dropped characters, in first-seen order.
    pub omitted: Vec<char>,
}

/// Result of a full encode: the output text and its payload statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    /// Carrier followed by the payload selectors.
    pub text: String,
    /// Number of payload bytes appended.
    pub ascii_count: usize,
    /// Distinct non-ASCII characters dropped (lossy mode only).
    pub omitted: Vec<char>,
}

impl EncodedText {
    /// One-line status describing what was encoded.
    pub fn summary(&self) -> String {
        if !self.omitted.is_empty() {
            let list: Vec<String> = self.omitted.iter().map(char::to_string).collect();
            let suffix = if self.ascii_count > 0 {
                format!("encoded {} byte(s).", self.ascii_count)
            } else {
                "no ascii payload encoded.".to_string()
            };
            return format!("omitted non-ascii: {}. {}", list.join(" "), suffix);
        }
        if self.ascii_count == 0 {
            return "payload is empty. output is just the carrier.".to_string();
        }
        format!(
            "{} byte(s) mapped to vs17-vs144 and appended.",
            self.ascii_count
        )
    }
}

/// Encodes a payload as a string of variation selectors.
///
/// No carrier is involved; the result is invisible text that can be
/// appended anywhere.
pub fn encode_payload(payload: &str) -> Result<String, EncoderError> {
    let mut encoded = String::with_capacity(payload.len() * 4);
    for ch in payload.chars() {
        let selector = u8::try_from(ch)
            .ok()
            .and_then(byte_to_selector)
            .ok_or(EncoderError::InvalidPayloadCharacter {
                ch,
                code: u32::from(ch),
            })?;
        encoded.push(selector);
    }
    Ok(encoded)
}

/// Encodes a payload, silently dropping characters above 0x7F.
///
/// Never fails. Dropped characters are reported once each in `omitted`.
pub fn encode_payload_lossy(payload: &str) -> LossyPayload {
    let mut result = LossyPayload::default();
    for ch in payload.chars() {
        match u8::try_from(ch).ok().and_then(byte_to_selector) {
            Some(selector) => {
                result.encoded.push(selector);
                result.ascii_count += 1;
            }
            None => {
                if !result.omitted.contains(&ch) {
                    result.omitted.push(ch);
                }
            }
        }
    }
    result
}

/// Encodes `payload` after `carrier`.
///
/// # Errors
/// * [`EncoderError::EmptyCarrier`] if `carrier` is empty and
///   `allow_empty_carrier` is false. Checked before the payload.
/// * [`EncoderError::InvalidPayloadCharacter`] for the first payload
///   character above 0x7F.
pub fn encode(
    carrier: &str,
    payload: &str,
    allow_empty_carrier: bool,
) -> Result<String, EncoderError> {
    let config = EncoderConfig {
        allow_empty_carrier,
        ..EncoderConfig::default()
    };
    encode_with_config(carrier, payload, &config)
}

/// Encodes with an explicit configuration.
pub fn encode_with_config(
    carrier: &str,
    payload: &str,
    config: &EncoderConfig,
) -> Result<String, EncoderError> {
    encode_detailed(carrier, payload, config).map(|encoded| encoded.text)
}

/// Encodes with an explicit configuration, keeping payload statistics.
///
/// With `skip_non_ascii` set, only the empty-carrier check can fail.
pub fn encode_detailed(
    carrier: &str,
    payload: &str,
    config: &EncoderConfig,
) -> Result<EncodedText, EncoderError> {
    if carrier.is_empty() && !config.allow_empty_carrier {
        return Err(EncoderError::EmptyCarrier);
    }

    let selectors = if config.skip_non_ascii {
        encode_payload_lossy(payload)
    } else {
        let encoded = encode_payload(payload)?;
        LossyPayload {
            ascii_count: payload.len(),
            encoded,
            omitted: Vec::new(),
        }
    };
    debug!(
        "encoded {} payload chars after {} carrier chars",
        selectors.ascii_count,
        carrier.chars().count()
    );

    let mut text = String::with_capacity(carrier.len() + selectors.encoded.len());
    text.push_str(carrier);
    text.push_str(&selectors.encoded);
    Ok(EncodedText {
        text,
        ascii_count: selectors.ascii_count,
        omitted: selectors.omitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hi_ok() {
        let encoded = encode("hi", "ok", false).unwrap();
        let chars: Vec<char> = encoded.chars().collect();
        assert_eq!(chars, vec!['h', 'i', '\u{E016F}', '\u{E016B}']);
    }

    #[test]
    fn test_encode_boundaries() {
        assert_eq!(encode_payload("\u{0}").unwrap(), "\u{E0100}");
        assert_eq!(encode_payload("\u{7F}").unwrap(), "\u{E017F}");
    }

    #[test]
    fn test_encode_rejects_0x80() {
        let err = encode_payload("\u{80}").unwrap_err();
        assert_eq!(
            err,
            EncoderError::InvalidPayloadCharacter {
                ch: '\u{80}',
                code: 0x80
            }
        );
    }

    #[test]
    fn test_encode_rejects_non_ascii_with_message() {
        let err = encode("carrier", "café", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "non-ASCII payload character 'é' (U+00E9); only 0x00-0x7F are supported"
        );
    }

    #[test]
    fn test_empty_carrier_rejected() {
        assert_eq!(encode("", "A", false), Err(EncoderError::EmptyCarrier));
        assert_eq!(
            EncoderError::EmptyCarrier.to_string(),
            "carrier text is required"
        );
    }

    #[test]
    fn test_empty_carrier_checked_before_payload() {
        assert_eq!(encode("", "é", false), Err(EncoderError::EmptyCarrier));
    }

    #[test]
    fn test_empty_carrier_allowed() {
        assert_eq!(encode("", "A", true).unwrap(), "\u{E0141}");
    }

    #[test]
    fn test_empty_payload_returns_carrier() {
        assert_eq!(encode("visible", "", false).unwrap(), "visible");
    }

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert!(!config.allow_empty_carrier);
        assert!(encode_with_config("", "x", &config).is_err());
    }

    #[test]
    fn test_lossy_payload_drops_non_ascii() {
        let lossy = encode_payload_lossy("héllo wörld é");
        assert_eq!(lossy.ascii_count, 10);
        assert_eq!(lossy.omitted, vec!['é', 'ö']);
        assert_eq!(lossy.encoded, encode_payload("hllo wrld ").unwrap());
    }

    #[test]
    fn test_lossy_payload_all_dropped() {
        let lossy = encode_payload_lossy("ñ🌳ñ");
        assert_eq!(lossy.ascii_count, 0);
        assert_eq!(lossy.encoded, "");
        assert_eq!(lossy.omitted, vec!['ñ', '🌳']);
    }

    #[test]
    fn test_skip_non_ascii_config() {
        let config = EncoderConfig {
            skip_non_ascii: true,
            ..EncoderConfig::default()
        };
        let encoded = encode_detailed("hi", "oké", &config).unwrap();
        assert_eq!(encoded.text, "hi\u{E016F}\u{E016B}");
        assert_eq!(encoded.ascii_count, 2);
        assert_eq!(encoded.omitted, vec!['é']);
        assert_eq!(encoded.summary(), "omitted non-ascii: é. encoded 2 byte(s).");
    }

    #[test]
    fn test_skip_non_ascii_still_requires_carrier() {
        let config = EncoderConfig {
            skip_non_ascii: true,
            ..EncoderConfig::default()
        };
        assert_eq!(
            encode_detailed("", "ok", &config),
            Err(EncoderError::EmptyCarrier)
        );
    }

    #[test]
    fn test_encoded_summary_messages() {
        let config = EncoderConfig::default();
        assert_eq!(
            encode_detailed("hi", "ok", &config).unwrap().summary(),
            "2 byte(s) mapped to vs17-vs144 and appended."
        );
        assert_eq!(
            encode_detailed("hi", "", &config).unwrap().summary(),
            "payload is empty. output is just the carrier."
        );

        let lossy = EncoderConfig {
            skip_non_ascii: true,
            ..EncoderConfig::default()
        };
        assert_eq!(
            encode_detailed("hi", "é ü", &lossy).unwrap().summary(),
            "omitted non-ascii: é ü. encoded 1 byte(s)."
        );
        assert_eq!(
            encode_detailed("hi", "éü", &lossy).unwrap().summary(),
            "omitted non-ascii: é ü. no ascii payload encoded."
        );
    }
}
