//! CLI argument definitions and command handlers.

mod commands;
mod run;

pub use commands::{Cli, Commands, GenerateArgs};
pub use run::{run_fallback, run_generate};
