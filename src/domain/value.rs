// ============================================================================
// Numeral Value
// Strictly positive integer accepted by every encoder
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer strictly greater than zero.
///
/// Alphabetic numeral systems have no zero glyph, so zero and negative
/// values are rejected at construction with `NonPositiveValue`.
///
/// # Example
/// ```
/// use numeral_engine::domain::NumeralValue;
/// use numeral_engine::numeric::NumeralError;
///
/// assert_eq!(NumeralValue::try_from(1010i64).unwrap().get(), 1010);
/// assert_eq!(NumeralValue::try_from(0i64), Err(NumeralError::NonPositiveValue));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u64", into = "u64")
)]
#[repr(transparent)]
pub struct NumeralValue(NonZeroU64);

impl NumeralValue {
    /// Smallest encodable value
    pub const ONE: Self = Self(NonZeroU64::MIN);

    /// Create from an unsigned integer.
    ///
    /// # Errors
    /// Returns `NonPositiveValue` for zero.
    #[inline]
    pub fn new(value: u64) -> NumeralResult<Self> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(NumeralError::NonPositiveValue)
    }

    /// Get the wrapped integer.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for NumeralValue {
    type Error = NumeralError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for NumeralValue {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(NumeralError::NonPositiveValue);
        }
        Self::new(value.unsigned_abs())
    }
}

impl TryFrom<i32> for NumeralValue {
    type Error = NumeralError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<Decimal> for NumeralValue {
    type Error = NumeralError;

    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// - `TypeMismatch` if the decimal has a fractional part
    /// - `NonPositiveValue` if it is zero or negative
    /// - `OutOfRange` if it does not fit in a u64
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if !value.fract().is_zero() {
            return Err(NumeralError::TypeMismatch);
        }
        if value <= Decimal::ZERO {
            return Err(NumeralError::NonPositiveValue);
        }
        let integer = value.to_u64().ok_or(NumeralError::OutOfRange)?;
        Self::new(integer)
    }
}

impl From<NumeralValue> for u64 {
    #[inline]
    fn from(value: NumeralValue) -> Self {
        value.get()
    }
}

impl FromStr for NumeralValue {
    type Err = NumeralError;

    /// Parse from an Arabic numeral string.
    ///
    /// # Examples
    /// - "1010" -> 1010
    /// - "9.75" -> TypeMismatch
    /// - "-4" -> NonPositiveValue
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumeralError::EmptyInput);
        }

        let decimal = Decimal::from_str(s).map_err(|_| NumeralError::TypeMismatch)?;
        Self::try_from(decimal)
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
