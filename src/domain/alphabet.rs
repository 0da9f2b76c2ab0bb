// ============================================================================
// Numeral Alphabets
// Immutable glyph/value tables for each supported numeral system
// ============================================================================

/// Position of a glyph inside a three-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlyphClass {
    /// 1-9
    Units = 1,
    /// 10-90
    Tens = 2,
    /// 100-900
    Hundreds = 3,
}

/// Church Slavonic Cyrillic numeral alphabet.
///
/// Digits are additive inside a group; the thousand mark multiplies the glyph
/// it precedes by one thousand per repetition.
#[derive(Debug, PartialEq, Eq)]
pub struct CyrillicAlphabet {
    /// Glyphs for 1..=9
    pub units: [char; 9],
    /// Glyphs for 10..=90
    pub tens: [char; 9],
    /// Glyphs for 100..=900
    pub hundreds: [char; 9],
    /// Magnitude marker ("thousand" sign)
    pub thousand: char,
    /// Diacritic (titlo)
    pub titlo: char,
    /// Delimiter and wrap dot
    pub dot: char,
}

/// The Church Slavonic table
pub static CYRILLIC: CyrillicAlphabet = CyrillicAlphabet {
    units: ['а', 'в', 'г', 'д', 'є', 'ѕ', 'з', 'и', 'ѳ'],
    tens: ['і', 'к', 'л', 'м', 'н', 'ѯ', 'ѻ', 'п', 'ч'],
    hundreds: ['р', 'с', 'т', 'у', 'ф', 'х', 'ѱ', 'ѿ', 'ц'],
    thousand: '\u{0482}',
    titlo: '\u{0483}',
    dot: '.',
};

impl CyrillicAlphabet {
    /// Glyph for a single-digit value scaled by its class (e.g. 7, 70 or 700).
    ///
    /// Returns `None` for zero and for values that are not a digit times 1, 10 or 100.
    pub fn glyph(&self, value: u32) -> Option<char> {
        let (table, digit) = match value {
            1..=9 => (&self.units, value),
            10..=90 if value % 10 == 0 => (&self.tens, value / 10),
            100..=900 if value % 100 == 0 => (&self.hundreds, value / 100),
            _ => return None,
        };
        table.get(digit as usize - 1).copied()
    }

    /// Reverse lookup: value and class of a digit glyph.
    pub fn lookup(&self, glyph: char) -> Option<(u32, GlyphClass)> {
        let position = |table: &[char; 9]| table.iter().position(|&g| g == glyph);

        if let Some(i) = position(&self.units) {
            Some((i as u32 + 1, GlyphClass::Units))
        } else if let Some(i) = position(&self.tens) {
            Some(((i as u32 + 1) * 10, GlyphClass::Tens))
        } else {
            position(&self.hundreds).map(|i| ((i as u32 + 1) * 100, GlyphClass::Hundreds))
        }
    }

    /// Value of a digit glyph.
    #[inline]
    pub fn value_of(&self, glyph: char) -> Option<u32> {
        self.lookup(glyph).map(|(value, _)| value)
    }

    /// The "ten" glyph, which takes part in the teen swap.
    #[inline]
    pub const fn ten(&self) -> char {
        self.tens[0]
    }

    /// Whether the glyph is one of the 27 digit glyphs.
    #[inline]
    pub fn is_digit(&self, glyph: char) -> bool {
        self.lookup(glyph).is_some()
    }
}

/// Roman numeral alphabet.
///
/// Each decimal band (units, tens, hundreds, thousands) has a "one" glyph;
/// all bands but the thousands also have a "five" glyph.
#[derive(Debug, PartialEq, Eq)]
pub struct RomanAlphabet {
    /// "One" glyph per band, least significant first
    pub ones: [char; 4],
    /// "Five" glyph per band, least significant first
    pub fives: [char; 3],
}

/// The Roman table
pub static ROMAN: RomanAlphabet = RomanAlphabet {
    ones: ['I', 'X', 'C', 'M'],
    fives: ['V', 'L', 'D'],
};

impl RomanAlphabet {
    /// Number of decimal bands the alphabet covers
    pub const BANDS: usize = 4;

    /// Largest value the alphabet can express (MMMCMXCIX)
    pub const MAX_VALUE: u64 = 3999;

    /// "One" glyph of a band.
    #[inline]
    pub fn one(&self, band: usize) -> Option<char> {
        self.ones.get(band).copied()
    }

    /// "Five" glyph of a band.
    #[inline]
    pub fn five(&self, band: usize) -> Option<char> {
        self.fives.get(band).copied()
    }

    /// Value of a glyph (1, 5, 10, ... 1000).
    pub fn value_of(&self, glyph: char) -> Option<u32> {
        if let Some(band) = self.ones.iter().position(|&g| g == glyph) {
            return Some(10u32.pow(band as u32));
        }
        self.fives
            .iter()
            .position(|&g| g == glyph)
            .map(|band| 5 * 10u32.pow(band as u32))
    }
}
