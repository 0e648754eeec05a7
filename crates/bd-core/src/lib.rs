//! # bd-core
//!
//! Core error definitions and primitive type aliases shared by the other
//! crates in the busdays workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year (proleptic Gregorian).
pub type Year = i32;

/// Number of days, as returned by day counting operations.
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
