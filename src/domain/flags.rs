// ============================================================================
// Style Flags
// Bit flags selecting marker style and decoration for a single conversion
// ============================================================================

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Independently combinable style flags for Cyrillic output.
    ///
    /// Unknown bits are dropped by [`StyleFlags::from_bits_truncate`], never rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
    pub struct StyleFlags: u32 {
        /// Stamp magnitude markers before every digit glyph
        const PLAIN = 0x1;
        /// Stamp magnitude markers once per group (default)
        const DELIM = 0x10;
        /// Do not place the titlo
        const NOTITLO = 0x100;
        /// Append a dot
        const ENDDOT = 0x1000;
        /// Prepend a dot
        const PREDOT = 0x10000;
        /// Dots between groups (internal; use DELIMDOT)
        const DOT = 0x100000;
        /// Dots between groups, forces delimited style
        const DELIMDOT = Self::DOT.bits() | Self::DELIM.bits();
        /// Wrap in dots
        const WRAPDOT = Self::ENDDOT.bits() | Self::PREDOT.bits();
        /// Wrapper and delimiter dots
        const ALLDOT = Self::WRAPDOT.bits() | Self::DELIMDOT.bits();
    }
}

/// Where magnitude markers attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerStyle {
    /// Once per group, before its leading glyph
    #[default]
    Delimited,
    /// Before every glyph of the group
    Plain,
}

/// Per-call decoration settings derived from [`StyleFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingState {
    pub style: MarkerStyle,
    pub suppress_titlo: bool,
    pub prepend_dot: bool,
    pub append_dot: bool,
    pub delimiter_dots: bool,
}

impl FormattingState {
    /// Resolve flags into a formatting state.
    ///
    /// DELIM (or DELIMDOT) wins over PLAIN; with neither set the style is delimited.
    pub fn from_flags(flags: StyleFlags) -> Self {
        let delimiter_dots = flags.contains(StyleFlags::DOT);
        let style = if flags.contains(StyleFlags::DELIM) || delimiter_dots {
            MarkerStyle::Delimited
        } else if flags.contains(StyleFlags::PLAIN) {
            MarkerStyle::Plain
        } else {
            MarkerStyle::Delimited
        };

        Self {
            style,
            suppress_titlo: flags.contains(StyleFlags::NOTITLO),
            prepend_dot: flags.contains(StyleFlags::PREDOT),
            append_dot: flags.contains(StyleFlags::ENDDOT),
            delimiter_dots,
        }
    }
}

impl From<StyleFlags> for FormattingState {
    fn from(flags: StyleFlags) -> Self {
        Self::from_flags(flags)
    }
}
