//! Decode command - split text into its carrier and hidden payload.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use ghost_hex::{decode, Decoded};

use super::{CommandError, CommandExecutor};

/// Decode the trailing variation selectors of a text.
///
/// Without flags, prints a two-section report:
///
/// carrier:
/// <carrier>
///
/// payload:
/// <payload>
///
/// NOTE: decoding itself never fails. Text without trailing selectors
/// yields an empty payload. With --verbose, the number of recovered bytes
/// is logged to stderr.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Text containing a trailing selector payload
    #[arg(long)]
    pub text: String,

    /// Output only the decoded payload
    #[arg(long)]
    pub only_payload: bool,

    /// Output only the carrier text
    #[arg(long)]
    pub only_carrier: bool,
}

/// Which part of the decoded text to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Report,
    PayloadOnly,
    CarrierOnly,
}

impl DecodeCommand {
    /// Resolves the output flags, rejecting the both-set combination.
    pub fn output_mode(&self) -> Result<OutputMode, CommandError> {
        match (self.only_payload, self.only_carrier) {
            (true, true) => Err(CommandError::ConflictingOutputFlags),
            (true, false) => Ok(OutputMode::PayloadOnly),
            (false, true) => Ok(OutputMode::CarrierOnly),
            (false, false) => Ok(OutputMode::Report),
        }
    }
}

/// Renders decoded text for the given output mode.
pub fn render(decoded: &Decoded, mode: OutputMode) -> String {
    match mode {
        OutputMode::PayloadOnly => decoded.payload.clone(),
        OutputMode::CarrierOnly => decoded.carrier.clone(),
        OutputMode::Report => format!(
            "carrier:\n{}\n\npayload:\n{}",
            decoded.carrier, decoded.payload
        ),
    }
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        // Flags are validated before touching the text.
        let mode = self.output_mode()?;

        let decoded = decode(&self.text);
        info!("{}", decoded.summary());

        let mut stdout = io::stdout().lock();
        stdout
            .write_all(render(&decoded, mode).as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write decoded text")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(only_payload: bool, only_carrier: bool) -> DecodeCommand {
        DecodeCommand {
            text: String::new(),
            only_payload,
            only_carrier,
        }
    }

    #[test]
    fn test_output_mode_resolution() {
        assert_eq!(command(false, false).output_mode(), Ok(OutputMode::Report));
        assert_eq!(command(true, false).output_mode(), Ok(OutputMode::PayloadOnly));
        assert_eq!(command(false, true).output_mode(), Ok(OutputMode::CarrierOnly));
        assert_eq!(
            command(true, true).output_mode(),
            Err(CommandError::ConflictingOutputFlags)
        );
    }

    #[test]
    fn test_render_report() {
        let decoded = Decoded {
            carrier: "hi".to_string(),
            payload: "ok".to_string(),
        };
        assert_eq!(
            render(&decoded, OutputMode::Report),
            "carrier:\nhi\n\npayload:\nok"
        );
        assert_eq!(render(&decoded, OutputMode::PayloadOnly), "ok");
        assert_eq!(render(&decoded, OutputMode::CarrierOnly), "hi");
    }

    #[test]
    fn test_render_report_empty_payload() {
        let decoded = Decoded {
            carrier: "plain".to_string(),
            payload: String::new(),
        };
        assert_eq!(
            render(&decoded, OutputMode::Report),
            "carrier:\nplain\n\npayload:\n"
        );
    }
}
