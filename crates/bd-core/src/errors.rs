//! Error types for busdays.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` and
//! `fail!` macros are shorthands for early returns with that error.

use thiserror::Error;

/// The top-level error type used throughout busdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A holiday rule was built from out-of-bounds day, month or occurrence.
    #[error("invalid holiday rule: {0}")]
    InvalidHolidayRule(String),

    /// Invalid calendar date, or date arithmetic outside the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout busdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns the given error variant immediately, with a formatted message.
///
/// # Example
/// ```
/// use bd_core::{fail, errors::Error};
/// fn always_err() -> bd_core::errors::Result<()> {
///     fail!(Date, "no such day");
/// }
/// assert_eq!(always_err(), Err(Error::Date("no such day".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
