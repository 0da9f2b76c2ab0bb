// ============================================================================
// Numeral Errors
// Error types for numeral encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while converting to or from a numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input representation does not fit the conversion direction
    TypeMismatch,
    /// Encode called with a value of zero or below
    NonPositiveValue,
    /// Decode called with an empty or whitespace-only string
    EmptyInput,
    /// Decode input matches neither accepted grammar
    GrammarMismatch,
    /// Value cannot be expressed by the target numeral system
    OutOfRange,
    /// Decoded total exceeded u64::MAX
    Overflow,
}

impl NumeralError {
    /// Whether this error belongs to the domain error family (bad value, not bad type).
    pub const fn is_domain_error(self) -> bool {
        !matches!(self, NumeralError::TypeMismatch)
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::TypeMismatch => {
                write!(f, "type mismatch: integer required to encode, string to decode")
            },
            NumeralError::NonPositiveValue => write!(f, "non-zero positive integer required"),
            NumeralError::EmptyInput => write!(f, "non-empty string required"),
            NumeralError::GrammarMismatch => write!(
                f,
                "string does not match any pattern for the numeral system"
            ),
            NumeralError::OutOfRange => {
                write!(f, "value out of range for the numeral system")
            },
            NumeralError::Overflow => {
                write!(f, "arithmetic overflow: decoded value exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral conversions
pub type NumeralResult<T> = Result<T, NumeralError>;
