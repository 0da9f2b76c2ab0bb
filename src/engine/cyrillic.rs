// ============================================================================
// Multiplicative Codec (Church Slavonic Cyrillic)
// Additive inside a group, thousand marks across groups
// ============================================================================

use super::format::{FormattingEngine, RenderedGroup};
use super::groups::{segment_cyrillic, split_thousands};
use crate::domain::{
    CyrillicAlphabet, DigitGroup, FormattingState, GlyphGroup, MarkerStyle, NumeralSystem,
    NumeralValue, StyleFlags, CYRILLIC,
};
use crate::interfaces::NumeralCodec;
use crate::numeric::{NumeralError, NumeralResult};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Church Slavonic Cyrillic numeral codec
///
/// Values are written in base-1000 groups. Inside a group the hundreds, tens
/// and units glyphs are summed; each thousand mark before a group (or before a
/// glyph, in plain style) multiplies it by one thousand.
///
/// # Example
/// ```text
/// 1444          -> ҂аум҃д
/// 18            -> и҃і        (teen: units before ten)
/// 1010  DELIM   -> ҂а.і҃      (dot keeps "і" out of the thousands group)
/// 1010  PLAIN   -> ҂а҃і
/// ```
pub struct CyrillicCodec {
    alphabet: &'static CyrillicAlphabet,
    flags: StyleFlags,
}

impl CyrillicCodec {
    pub fn new(flags: StyleFlags) -> Self {
        Self {
            alphabet: &CYRILLIC,
            flags,
        }
    }

    /// Default style flags used by [`NumeralCodec::encode`] and [`NumeralCodec::decode`]
    pub fn flags(&self) -> StyleFlags {
        self.flags
    }

    // ========================================================================
    // Encode
    // ========================================================================

    /// Encode with explicit style flags.
    ///
    /// Pipeline: split -> ambiguity check -> render (translate, mark, swap)
    /// -> purge empty groups -> decorate.
    pub fn encode_with(&self, value: NumeralValue, flags: StyleFlags) -> String {
        let state = FormattingState::from_flags(flags);
        let groups = split_thousands(value);

        let separate_units =
            state.style == MarkerStyle::Delimited && Self::units_group_ambiguous(&groups);

        let rendered: SmallVec<[RenderedGroup; 8]> = groups
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| self.render_group(*group, state.style))
            .collect();

        tracing::trace!(
            value = value.get(),
            groups = rendered.len(),
            separate_units,
            "rendered Cyrillic digit groups"
        );

        FormattingEngine::new(self.alphabet).assemble(&rendered, separate_units, &state)
    }

    /// Whether the unmarked units group would be read as part of the group above it.
    ///
    /// Only values are inspected. The units group is absorbed when its leading
    /// glyph can legally continue the nearest non-empty higher group:
    /// - that group ends with a hundreds glyph (any units group without hundreds)
    /// - it ends with a units glyph and the units group is exactly "ten"
    /// - it ends with a tens glyph other than "ten" and the units group leads
    ///   with a units glyph (units only, or a swapped teen)
    fn units_group_ambiguous(groups: &[DigitGroup]) -> bool {
        let Some(units) = groups.first().filter(|group| !group.is_empty()) else {
            return false;
        };
        let Some(above) = groups.iter().skip(1).find(|group| !group.is_empty()) else {
            return false;
        };

        if units.hundreds() != 0 {
            return false;
        }

        match (above.tens(), above.units()) {
            (0, 0) => true,
            (0, _) => units.tens() == 1 && units.units() == 0,
            (1, _) => false,
            (_, 0) => units.units() != 0 && units.tens() <= 1,
            _ => false,
        }
    }

    /// Translate one non-empty group and attach its thousand marks.
    fn render_group(&self, group: DigitGroup, style: MarkerStyle) -> RenderedGroup {
        let mut glyphs: ArrayVec<char, 3> = ArrayVec::new();
        let scaled = [
            u32::from(group.hundreds()) * 100,
            u32::from(group.tens()) * 10,
            u32::from(group.units()),
        ];
        for value in scaled {
            // No zero glyph: absent digits are skipped
            if let Some(glyph) = self.alphabet.glyph(value) {
                glyphs.push(glyph);
            }
        }

        // Plain style marks every glyph, so a marked teen keeps ten-then-unit order
        let swap = group.tens() == 1
            && group.units() != 0
            && (style == MarkerStyle::Delimited || group.magnitude == 0);
        if swap {
            let n = glyphs.len();
            glyphs.swap(n - 2, n - 1);
        }

        let marks: String = std::iter::repeat(self.alphabet.thousand)
            .take(group.magnitude as usize)
            .collect();
        let mut text = String::new();
        match style {
            MarkerStyle::Delimited => {
                text.push_str(&marks);
                text.extend(glyphs);
            }
            MarkerStyle::Plain => {
                for glyph in glyphs {
                    text.push_str(&marks);
                    text.push(glyph);
                }
            }
        }

        RenderedGroup {
            magnitude: group.magnitude,
            text,
        }
    }

    // ========================================================================
    // Decode
    // ========================================================================

    /// Decode with explicit style flags.
    ///
    /// The marker style selects the grammar: delimited (default) or plain.
    ///
    /// # Errors
    /// - `EmptyInput` for empty or whitespace-only text
    /// - `GrammarMismatch` if the text matches neither grammar
    /// - `Overflow` if the value exceeds u64::MAX
    pub fn decode_with(&self, text: &str, flags: StyleFlags) -> NumeralResult<NumeralValue> {
        let result = self.read(text, FormattingState::from_flags(flags).style);
        if let Err(err) = &result {
            tracing::debug!(input = text, %err, "rejected Cyrillic numeral");
        }
        result
    }

    fn read(&self, text: &str, style: MarkerStyle) -> NumeralResult<NumeralValue> {
        let normalized = FormattingEngine::new(self.alphabet).strip(text)?;
        let groups = segment_cyrillic(&normalized, style, self.alphabet)?;

        let mut total = 0u64;
        for (index, group) in groups.iter().enumerate() {
            let multiplier = Self::multiplier(index, group)?;
            let value = self.group_value(group)?;
            total = value
                .checked_mul(multiplier)
                .and_then(|scaled| total.checked_add(scaled))
                .ok_or(NumeralError::Overflow)?;
        }

        tracing::trace!(input = text, groups = groups.len(), total, "read Cyrillic numeral");
        NumeralValue::new(total).map_err(|_| NumeralError::GrammarMismatch)
    }

    /// Thousand marks are authoritative; without them the position decides.
    fn multiplier(index: usize, group: &GlyphGroup) -> NumeralResult<u64> {
        let exponent = if group.markers > 0 {
            group.markers
        } else {
            u32::try_from(index).map_err(|_| NumeralError::Overflow)?
        };
        1000u64.checked_pow(exponent).ok_or(NumeralError::Overflow)
    }

    /// Sum of the glyph values in a group, markers excluded.
    fn group_value(&self, group: &GlyphGroup) -> NumeralResult<u64> {
        group.glyphs.iter().try_fold(0u64, |sum, &glyph| {
            let value = self
                .alphabet
                .value_of(glyph)
                .ok_or(NumeralError::GrammarMismatch)?;
            Ok(sum + u64::from(value))
        })
    }
}

impl Default for CyrillicCodec {
    fn default() -> Self {
        Self::new(StyleFlags::empty())
    }
}

impl NumeralCodec for CyrillicCodec {
    fn encode(&self, value: NumeralValue) -> NumeralResult<String> {
        Ok(self.encode_with(value, self.flags))
    }

    fn decode(&self, text: &str) -> NumeralResult<NumeralValue> {
        self.decode_with(text, self.flags)
    }

    fn system(&self) -> NumeralSystem {
        NumeralSystem::Cyrillic
    }

    fn name(&self) -> &str {
        "Cyrillic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: u64) -> NumeralValue {
        NumeralValue::new(value).unwrap()
    }

    fn write(value: u64, flags: StyleFlags) -> String {
        CyrillicCodec::default().encode_with(v(value), flags)
    }

    fn read(text: &str) -> NumeralResult<u64> {
        CyrillicCodec::default().decode(text).map(NumeralValue::get)
    }

    fn read_plain(text: &str) -> NumeralResult<u64> {
        CyrillicCodec::default()
            .decode_with(text, StyleFlags::PLAIN)
            .map(NumeralValue::get)
    }

    #[test]
    fn test_write_digits() {
        assert_eq!(write(1, StyleFlags::empty()), "а҃");
        assert_eq!(write(9, StyleFlags::empty()), "ѳ҃");
    }

    #[test]
    fn test_write_tens() {
        assert_eq!(write(10, StyleFlags::empty()), "і҃");
        assert_eq!(write(18, StyleFlags::empty()), "и҃і");
        assert_eq!(write(22, StyleFlags::empty()), "к҃в");
    }

    #[test]
    fn test_write_hundreds() {
        assert_eq!(write(100, StyleFlags::empty()), "р҃");
        assert_eq!(write(207, StyleFlags::empty()), "с҃з");
        assert_eq!(write(333, StyleFlags::empty()), "тл҃г");
        // Teen swap with a hundreds digit present
        assert_eq!(write(115, StyleFlags::empty()), "рє҃і");
    }

    #[test]
    fn test_write_plain() {
        let plain = StyleFlags::PLAIN;
        assert_eq!(write(1000, plain), "҂а҃");
        assert_eq!(write(1006, plain), "҂а҃ѕ");
        assert_eq!(write(1010, plain), "҂а҃і");
        assert_eq!(write(1015, plain), "҂ає҃і");
        assert_eq!(write(1444, plain), "҂аум҃д");
        assert_eq!(write(11000, plain), "҂і҂а҃");
        assert_eq!(write(10_001_010_001, plain), "҂҂҂і҂҂а҂і҃а");
        assert_eq!(write(50_000_000_000, plain), "҂҂҂н҃");
        assert_eq!(write(60_000_070_000, plain), "҂҂҂ѯ҂ѻ҃");
        assert_eq!(write(111_111_111, plain), "҂҂р҂҂і҂҂а҂р҂і҂ара҃і");
    }

    #[test]
    fn test_write_delimited_ambiguity() {
        let delim = StyleFlags::DELIM;
        assert_eq!(write(1010, delim), "҂а.і҃");
        assert_eq!(write(11000, delim), "҂а҃і");
        assert_eq!(write(10010, delim), "҂і҃і");
        assert_eq!(write(110010, delim), "҂рі҃і");
        assert_eq!(write(100010, delim), "҂р.і҃");
        assert_eq!(write(110000, delim), "҂р҃і");
        assert_eq!(write(100011, delim), "҂р.а҃і");
        assert_eq!(write(111000, delim), "҂ра҃і");
    }

    #[test]
    fn test_write_delimited_separator_exactly_when_needed() {
        let delim = StyleFlags::DELIM;
        // Units glyph after a tens-ending group
        assert_eq!(write(20005, delim), "҂к.є҃");
        assert_eq!(write(20011, delim), "҂к.а҃і");
        // Hundreds-ending group absorbs tens
        assert_eq!(write(100020, delim), "҂р.к҃");
        // No merge possible: no dot
        assert_eq!(write(1011, delim), "҂аа҃і");
        assert_eq!(write(1001, delim), "҂а҃а");
        assert_eq!(write(21010, delim), "҂ка҃і");
        assert_eq!(write(1100, delim), "҂а҃р");
        // Nearest non-empty group decides when the thousands group is empty
        assert_eq!(write(1_000_010, delim), "҂҂а.і҃");
        assert_eq!(write(1_000_020, delim), "҂҂а҃к");
    }

    #[test]
    fn test_write_delimited_big() {
        let delim = StyleFlags::DELIM;
        assert_eq!(write(10_001_010_001, delim), "҂҂҂і҂҂а҂і҃а");
        assert_eq!(write(50_000_000_000, delim), "҂҂҂н҃");
        assert_eq!(write(60_000_070_000, delim), "҂҂҂ѯ҂ѻ҃");
        assert_eq!(write(111_111_111, delim), "҂҂раі҂раіра҃і");
    }

    #[test]
    fn test_write_decorations() {
        assert_eq!(write(1, StyleFlags::NOTITLO), "а");
        assert_eq!(write(11000, StyleFlags::PLAIN | StyleFlags::NOTITLO), "҂і҂а");
        assert_eq!(write(1, StyleFlags::ENDDOT), "а҃.");
        assert_eq!(write(1, StyleFlags::WRAPDOT), ".а҃.");
        assert_eq!(write(1001, StyleFlags::DELIMDOT), "҂а.а҃");
        assert_eq!(write(1010, StyleFlags::DELIMDOT), "҂а.і҃");
        assert_eq!(write(11000, StyleFlags::DELIMDOT), "҂а҃і");
        assert_eq!(write(111_111_111, StyleFlags::DELIMDOT), "҂҂раі.҂раі.ра҃і");
        assert_eq!(write(1001, StyleFlags::ALLDOT), ".҂а.а҃.");
        assert_eq!(write(1001, StyleFlags::ENDDOT | StyleFlags::DELIMDOT), "҂а.а҃.");
    }

    #[test]
    fn test_read_basic() {
        assert_eq!(read("а҃"), Ok(1));
        assert_eq!(read("ѳ"), Ok(9));
        assert_eq!(read("і҃"), Ok(10));
        assert_eq!(read("и҃і"), Ok(18));
        assert_eq!(read("к҃в"), Ok(22));
        assert_eq!(read("р҃"), Ok(100));
        assert_eq!(read("с҃з"), Ok(207));
        assert_eq!(read("тл҃г"), Ok(333));
    }

    #[test]
    fn test_read_thousands() {
        assert_eq!(read("҂а҃"), Ok(1000));
        assert_eq!(read("҂а҃ѕ"), Ok(1006));
        assert_eq!(read("҂ає҃і"), Ok(1015));
        assert_eq!(read("҂аум҃д"), Ok(1444));
        assert_eq!(read("҂а.і҃"), Ok(1010));
        assert_eq!(read("҂а҃і"), Ok(11000));
    }

    #[test]
    fn test_read_big() {
        assert_eq!(read("҂҂҂і҂҂а҂і҃а"), Ok(10_001_010_001));
        assert_eq!(read("҂҂҂н҃"), Ok(50_000_000_000));
        assert_eq!(read("҂҂҂ѯ҂ѻ҃"), Ok(60_000_070_000));
        assert_eq!(read("҂҂р҂҂і҂҂а҂р҂і҂ара҃і"), Ok(111_111_111));
    }

    #[test]
    fn test_read_position_implied() {
        assert_eq!(read("пфхч҃ѱ"), Ok(80_500_690_700));
    }

    #[test]
    fn test_read_normalization() {
        assert_eq!(read("а"), Ok(1));
        assert_eq!(read("а҃ "), Ok(1));
        assert_eq!(read("А҃"), Ok(1));
        assert_eq!(read(" вКА"), Ok(2021));
        assert_eq!(read(".҂а.а҃."), Ok(1001));
    }

    #[test]
    fn test_read_plain() {
        assert_eq!(read_plain("҂і҂а"), Ok(11000));
        assert_eq!(read_plain("҂а҃і"), Ok(1010));
        assert_eq!(read_plain("҂҂р҂҂і҂҂а҂р҂і҂ара҃і"), Ok(111_111_111));
    }

    #[test]
    fn test_read_errors() {
        assert_eq!(read(""), Err(NumeralError::EmptyInput));
        assert_eq!(read("  "), Err(NumeralError::EmptyInput));
        assert_eq!(read("A113"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("XIV"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("҂"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("..."), Err(NumeralError::GrammarMismatch));
    }

    #[test]
    fn test_read_overflow() {
        assert_eq!(read("҂҂҂҂҂҂҂а"), Err(NumeralError::Overflow));
    }

    #[test]
    fn test_round_trip_both_styles() {
        let values = [1, 10, 11, 19, 110, 1010, 1011, 10010, 20011, 100020, 110010, 999_999];
        for value in values {
            for flags in [StyleFlags::DELIM, StyleFlags::DELIMDOT, StyleFlags::NOTITLO] {
                assert_eq!(read(&write(value, flags)), Ok(value), "{value} {flags:?}");
            }
            assert_eq!(read_plain(&write(value, StyleFlags::PLAIN)), Ok(value), "{value}");
        }
    }
}
