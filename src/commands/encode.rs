//! Encode command - append a hidden payload to a carrier.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};

use ghost_hex::{encode_detailed, EncoderConfig};

use super::CommandExecutor;

/// Encode an ASCII payload as trailing variation selectors.
///
/// The output is the carrier followed by one invisible selector per payload
/// character. Nothing else is written (no trailing newline).
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Visible carrier text
    #[arg(long)]
    pub carrier: String,

    /// ASCII payload to hide (characters 0x00-0x7F only)
    #[arg(long)]
    pub payload: String,

    /// Allow encoding with an empty carrier
    #[arg(long)]
    pub allow_empty_carrier: bool,

    /// Drop non-ASCII payload characters instead of failing
    /// The dropped characters are reported as a warning on stderr
    #[arg(long)]
    pub skip_non_ascii: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let config = EncoderConfig {
            allow_empty_carrier: self.allow_empty_carrier,
            skip_non_ascii: self.skip_non_ascii,
        };
        let encoded = encode_detailed(&self.carrier, &self.payload, &config)?;
        if encoded.omitted.is_empty() {
            info!("{}", encoded.summary());
        } else {
            warn!("{}", encoded.summary());
        }

        let mut stdout = io::stdout().lock();
        stdout
            .write_all(encoded.text.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write encoded text")?;
        Ok(())
    }
}
