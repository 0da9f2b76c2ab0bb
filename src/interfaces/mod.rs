// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod numeral_codec;

pub use numeral_codec::NumeralCodec;
