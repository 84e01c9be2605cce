//! yaslc-util - Foundation Types for the YASL Compiler
//!
//! This crate provides the types shared by every phase of the `yaslc`
//! front end:
//!
//! - [`span`] - Source location tracking (byte ranges, line/column info)
//! - [`symbol`] - String interning for efficient identifier handling
//! - [`diagnostic`] - Error and warning reporting infrastructure
//!
//! Only the lexer phase exists today, but these utilities are deliberately
//! phase-agnostic: a parser or semantic analyzer reports through the same
//! [`Handler`] and addresses source text through the same [`Span`].

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
