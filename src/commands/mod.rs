//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod decode;
mod encode;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;

use anyhow::Result;
use thiserror::Error;

/// Errors raised by the command layer itself, before the core is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("choose only one of --only-payload or --only-carrier")]
    ConflictingOutputFlags,
}

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command, writing its result to stdout.
    fn execute(&self) -> Result<()>;
}
