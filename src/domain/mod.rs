// ============================================================================
// Domain Models Module
// Contains the alphabets, values, groups and style settings
// ============================================================================

pub mod alphabet;
pub mod config;
pub mod flags;
pub mod group;
pub mod value;

pub use alphabet::{CyrillicAlphabet, GlyphClass, RomanAlphabet, CYRILLIC, ROMAN};
pub use config::{CodecConfig, NumeralSystem};
pub use flags::{FormattingState, MarkerStyle, StyleFlags};
pub use group::{DigitGroup, DigitGroups, GlyphGroup};
pub use value::NumeralValue;
