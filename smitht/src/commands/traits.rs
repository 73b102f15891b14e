//! Command trait for the smitht CLI.
//!
//! This module defines the standard command trait that all commands
//! must implement to ensure consistency across the application.

use crate::error::Result;

/// Standard command trait that all smitht commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    ///
    /// Results go to stdout; diagnostics and progress go to the log.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
