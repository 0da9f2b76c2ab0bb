// ============================================================================
// Engine Module
// Contains the numeral codecs and their shared grouping and formatting
// ============================================================================

mod cyrillic;
mod format;
mod groups;
mod roman;

#[cfg(feature = "serde")]
pub mod dynamic;
pub mod factory;

pub use cyrillic::CyrillicCodec;
pub use factory::{create_from_config, NumeralCodecBuilder};
pub use format::{FormattingEngine, RenderedGroup};
pub use groups::{segment_cyrillic, segment_roman, split_bands, split_thousands, GlyphGroups};
pub use roman::RomanCodec;
