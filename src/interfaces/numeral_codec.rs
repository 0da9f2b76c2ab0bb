// ============================================================================
// Numeral Codec Interface
// Defines the contract for pluggable numeral systems
// ============================================================================

use crate::domain::{NumeralSystem, NumeralValue};
use crate::numeric::NumeralResult;

/// Strategy pattern interface for numeral systems
/// Implementations: Cyrillic (Church Slavonic), Roman
pub trait NumeralCodec: Send + Sync {
    /// Write a value in this numeral system
    ///
    /// # Errors
    /// `OutOfRange` if the system cannot express the value
    fn encode(&self, value: NumeralValue) -> NumeralResult<String>;

    /// Read a numeral written in this system
    ///
    /// # Errors
    /// `EmptyInput` for blank text, `GrammarMismatch` for text that is not a
    /// well-formed numeral, `Overflow` when the value exceeds 64 bits
    fn decode(&self, text: &str) -> NumeralResult<NumeralValue>;

    /// The system this codec implements
    fn system(&self) -> NumeralSystem;

    /// Get the codec name for logging
    fn name(&self) -> &str;

    /// Write a raw integer, rejecting zero
    fn encode_u64(&self, value: u64) -> NumeralResult<String> {
        self.encode(NumeralValue::new(value)?)
    }
}
