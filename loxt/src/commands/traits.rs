//! Traits shared by the loxt subcommands.

use crate::error::Result;

/// A subcommand: built once from its parsed arguments, then executed.
pub trait Command {
    /// Parsed arguments.
    type Args;

    /// What a successful run yields (token count, check report).
    type Output;

    /// Builds the command from its arguments.
    fn new(args: Self::Args) -> Self;

    /// Runs the command, writing its listing to stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Subcommand name as typed on the command line.
    fn name() -> &'static str;
}

/// One-line summary logged when a subcommand starts.
pub trait CommandDescription {
    /// The summary text.
    fn description() -> &'static str;
}
