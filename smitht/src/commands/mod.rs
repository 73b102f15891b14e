//! Command modules for the smitht CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod lex;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use lex::{LexArgs, LexCommand};
