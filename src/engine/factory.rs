// ============================================================================
// Codec Factory
// Creates numeral codecs with proper configuration
// ============================================================================

use crate::domain::{CodecConfig, MarkerStyle, NumeralSystem, StyleFlags};
use crate::engine::{CyrillicCodec, RomanCodec};
use crate::interfaces::NumeralCodec;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral codec from configuration
///
/// # Arguments
/// * `config` - Numeral system and default style flags
///
/// # Returns
/// * `Result<Box<dyn NumeralCodec>, String>` - Configured codec or error
///
/// # Example
/// ```
/// use numeral_engine::prelude::*;
///
/// let codec = create_from_config(CodecConfig::church_slavonic()).unwrap();
/// assert_eq!(codec.encode_u64(1010).unwrap(), "҂а.і҃");
/// ```
pub fn create_from_config(config: CodecConfig) -> Result<Box<dyn NumeralCodec>, String> {
    config.validate()?;

    let codec: Box<dyn NumeralCodec> = match config.system {
        NumeralSystem::Cyrillic => Box::new(CyrillicCodec::new(config.flags)),
        NumeralSystem::Roman => Box::new(RomanCodec::new()),
    };

    tracing::debug!(codec = codec.name(), flags = ?config.flags, "created numeral codec");
    Ok(codec)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating numeral codecs with fluent API
///
/// # Example
/// ```
/// use numeral_engine::prelude::*;
///
/// let codec = NumeralCodecBuilder::cyrillic()
///     .delimited()
///     .delimiter_dots()
///     .build()
///     .unwrap();
///
/// assert_eq!(codec.encode_u64(1_000_001).unwrap(), "҂҂а.а҃");
/// ```
pub struct NumeralCodecBuilder {
    config: CodecConfig,
}

impl NumeralCodecBuilder {
    /// Create a builder for the specified system with no style flags
    pub fn new(system: NumeralSystem) -> Self {
        Self {
            config: CodecConfig::new(system, StyleFlags::empty()),
        }
    }

    /// Start a Cyrillic codec
    pub fn cyrillic() -> Self {
        Self::new(NumeralSystem::Cyrillic)
    }

    /// Start a Roman codec
    pub fn roman() -> Self {
        Self::new(NumeralSystem::Roman)
    }

    // ========================================================================
    // Marker Style
    // ========================================================================

    /// Thousand mark before every glyph of a group
    pub fn plain(mut self) -> Self {
        self.config = self.config.with_style(MarkerStyle::Plain);
        self
    }

    /// Thousand marks before the whole group
    pub fn delimited(mut self) -> Self {
        self.config = self.config.with_style(MarkerStyle::Delimited);
        self
    }

    // ========================================================================
    // Decorations
    // ========================================================================

    /// Omit the titlo
    pub fn without_titlo(mut self) -> Self {
        self.config = self.config.without_titlo();
        self
    }

    /// Dot between every pair of groups (delimited style)
    pub fn delimiter_dots(mut self) -> Self {
        self.config = self.config.with_flags(StyleFlags::DELIMDOT);
        self
    }

    /// Dot before and after the numeral
    pub fn wrap_dots(mut self) -> Self {
        self.config = self.config.with_flags(StyleFlags::WRAPDOT);
        self
    }

    /// Add raw style flags
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.config = self.config.with_flags(flags);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from a preset configuration
    pub fn from_config(config: CodecConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the codec
    pub fn build(self) -> Result<Box<dyn NumeralCodec>, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CodecConfig {
        &self.config
    }
}
