//! Command trait definition for CLI commands.
//!
//! Every genomesim subcommand implements [`Command`]; `enum_dispatch` routes the parsed
//! subcommand to its implementation.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

/// Trait implemented by all genomesim CLI commands.
#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}
