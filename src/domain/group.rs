// ============================================================================
// Digit Groups
// Value-side and text-side units exchanged between the group engine and codecs
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

/// One chunk of an integer's decomposition.
///
/// For the Cyrillic system `value` is in `0..=999` and `magnitude` counts
/// powers of one thousand; for the Roman system `value` is a single decimal
/// digit and `magnitude` counts powers of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGroup {
    pub value: u16,
    pub magnitude: u32,
}

impl DigitGroup {
    #[inline]
    pub const fn new(value: u16, magnitude: u32) -> Self {
        Self { value, magnitude }
    }

    #[inline]
    pub const fn hundreds(self) -> u16 {
        self.value / 100 % 10
    }

    #[inline]
    pub const fn tens(self) -> u16 {
        self.value / 10 % 10
    }

    #[inline]
    pub const fn units(self) -> u16 {
        self.value % 10
    }

    /// Zero-valued groups render to nothing and are dropped before assembly.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }
}

/// Ordered digit groups, least significant first
pub type DigitGroups = SmallVec<[DigitGroup; 8]>;

/// Textual form of one group as found by segmentation.
///
/// `markers` is the number of magnitude markers that led the group
/// (always zero for the Roman system).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphGroup {
    pub markers: u32,
    pub glyphs: SmallVec<[char; 4]>,
}

impl GlyphGroup {
    pub fn new(markers: u32) -> Self {
        Self {
            markers,
            glyphs: SmallVec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    pub fn push(&mut self, glyph: char) {
        self.glyphs.push(glyph);
    }
}

impl fmt::Display for GlyphGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.markers {
            write!(f, "\u{0482}")?;
        }
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_accessors() {
        let group = DigitGroup::new(407, 1);
        assert_eq!(group.hundreds(), 4);
        assert_eq!(group.tens(), 0);
        assert_eq!(group.units(), 7);
        assert!(!group.is_empty());
        assert!(DigitGroup::new(0, 3).is_empty());
    }

    #[test]
    fn test_glyph_group_display() {
        let mut group = GlyphGroup::new(2);
        group.push('р');
        group.push('а');
        assert_eq!(group.to_string(), "҂҂ра");
        assert!(GlyphGroup::default().is_empty());
    }
}
