//! Error type for the vectorized coordinate API.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from elementwise coordinate conversion.
///
/// Scalar conversions never fail; these arise only when validating
/// slice arguments.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoordError {
    /// Vectorized arguments have different lengths.
    LengthMismatch(usize, usize),
    /// An input element is NaN or infinite (element index).
    NonFinite(usize),
}

impl Display for CoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch(a, b) => write!(f, "argument length mismatch: {a} vs {b}"),
            Self::NonFinite(i) => write!(f, "non-finite input at element {i}"),
        }
    }
}

impl Error for CoordError {}
