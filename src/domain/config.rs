// ============================================================================
// Codec Configuration
// Numeral system selection and default style flags for a codec
// ============================================================================

use super::flags::{MarkerStyle, StyleFlags};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Numeral System
// ============================================================================

/// Supported numeral systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralSystem {
    /// Church Slavonic Cyrillic numerals
    /// - Additive inside a group, multiplicative across groups
    /// - Thousand marks, teen swap, titlo and dot decorations
    Cyrillic,

    /// Roman numerals
    /// - Subtractive notation per decimal band
    /// - Range 1..=3999
    Roman,
}

// ============================================================================
// Complete Codec Configuration
// ============================================================================

/// Configuration for creating a numeral codec
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    /// The numeral system to read and write
    pub system: NumeralSystem,

    /// Default style flags applied to every conversion
    /// Ignored by the Roman system
    pub flags: StyleFlags,
}

impl CodecConfig {
    /// Create a new configuration with required parameters
    pub fn new(system: NumeralSystem, flags: StyleFlags) -> Self {
        Self { system, flags }
    }

    /// Builder method: Add style flags
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Builder method: Select the marker style
    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        match style {
            MarkerStyle::Delimited => {
                self.flags.remove(StyleFlags::PLAIN);
                self.flags.insert(StyleFlags::DELIM);
            }
            MarkerStyle::Plain => {
                self.flags.remove(StyleFlags::DELIMDOT);
                self.flags.insert(StyleFlags::PLAIN);
            }
        }
        self
    }

    /// Builder method: Drop the titlo
    pub fn without_titlo(mut self) -> Self {
        self.flags.insert(StyleFlags::NOTITLO);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.system == NumeralSystem::Roman && !self.flags.is_empty() {
            return Err("Roman numerals take no style flags".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CodecConfig {
    /// Church Slavonic configuration
    /// - Delimited thousand marks
    /// - Titlo on
    pub fn church_slavonic() -> Self {
        Self::new(NumeralSystem::Cyrillic, StyleFlags::DELIM)
    }

    /// Manuscript-style configuration
    /// - Thousand mark before every digit
    /// - Titlo on
    pub fn manuscript() -> Self {
        Self::new(NumeralSystem::Cyrillic, StyleFlags::PLAIN)
    }

    /// Printed-book configuration
    /// - Delimited thousand marks with dots between groups
    /// - Wrapped in dots
    pub fn printed() -> Self {
        Self::new(NumeralSystem::Cyrillic, StyleFlags::ALLDOT)
    }

    /// Roman configuration
    pub fn roman() -> Self {
        Self::new(NumeralSystem::Roman, StyleFlags::empty())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::church_slavonic()
    }
}
