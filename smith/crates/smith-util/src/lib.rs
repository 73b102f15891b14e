//! smith-util - Core Utilities and Foundation Types
//!
//! Types shared by every stage of the Smith toolchain:
//!
//! - [`span`] - Two-dimensional positions, half-open spans and source files
//! - [`diagnostic`] - Severity levels, diagnostics and a collecting handler
//! - [`error`] - Error enums for the fallible operations in this crate
//!
//! Nothing here knows about tokens; the lexer builds on these types and the
//! command-line tool renders them.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{Pos, SourceFile, Span};
