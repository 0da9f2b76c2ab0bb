// ============================================================================
// Subtractive Codec (Roman)
// Per-band subtractive notation, range 1..=3999
// ============================================================================

use super::groups::{segment_roman, split_bands};
use crate::domain::{GlyphGroup, NumeralSystem, NumeralValue, RomanAlphabet, ROMAN};
use crate::interfaces::NumeralCodec;
use crate::numeric::{NumeralError, NumeralResult};

/// Roman numeral codec
///
/// Each decimal band is written independently: 1-3 repeat the band's "one"
/// glyph, 4 and 9 use the subtractive short forms, 5-8 lead with "five".
///
/// # Example
/// ```text
/// 1919 -> MCMXIX
/// 2022 -> MMXXII
/// 4000 -> OutOfRange
/// ```
pub struct RomanCodec {
    alphabet: &'static RomanAlphabet,
}

impl RomanCodec {
    pub fn new() -> Self {
        Self { alphabet: &ROMAN }
    }

    /// Render one decimal digit of a band.
    fn render_band(&self, digit: u16, band: usize) -> NumeralResult<String> {
        let one = self.alphabet.one(band).ok_or(NumeralError::OutOfRange)?;
        let five = || self.alphabet.five(band).ok_or(NumeralError::OutOfRange);
        let ten = || self.alphabet.one(band + 1).ok_or(NumeralError::OutOfRange);
        let ones = |count: u16| std::iter::repeat(one).take(count as usize);

        let text = match digit {
            0 => String::new(),
            1..=3 => ones(digit).collect(),
            4 => [one, five()?].iter().collect(),
            5..=8 => std::iter::once(five()?).chain(ones(digit - 5)).collect(),
            9 => [one, ten()?].iter().collect(),
            _ => return Err(NumeralError::OutOfRange),
        };

        Ok(text)
    }

    /// Signed sum of a band: a glyph followed by a strictly larger one is subtracted.
    fn band_value(&self, band: &GlyphGroup) -> NumeralResult<u64> {
        let values = band
            .glyphs
            .iter()
            .map(|&glyph| self.alphabet.value_of(glyph).map(i64::from))
            .collect::<Option<Vec<i64>>>()
            .ok_or(NumeralError::GrammarMismatch)?;

        let signed: i64 = values
            .iter()
            .enumerate()
            .map(|(i, &value)| match values.get(i + 1) {
                Some(&next) if next > value => -value,
                _ => value,
            })
            .sum();

        Ok(signed.unsigned_abs())
    }

    fn read(&self, text: &str) -> NumeralResult<NumeralValue> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NumeralError::EmptyInput);
        }

        let normalized = trimmed.to_uppercase();
        let bands = segment_roman(&normalized, self.alphabet)?;

        let mut total = 0u64;
        for band in &bands {
            total += self.band_value(band)?;
        }

        tracing::trace!(input = text, total, "read Roman numeral");
        NumeralValue::new(total).map_err(|_| NumeralError::GrammarMismatch)
    }
}

impl Default for RomanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl NumeralCodec for RomanCodec {
    fn encode(&self, value: NumeralValue) -> NumeralResult<String> {
        if value.get() > RomanAlphabet::MAX_VALUE {
            tracing::debug!(value = value.get(), "value out of Roman range");
            return Err(NumeralError::OutOfRange);
        }

        let bands = split_bands(value, RomanAlphabet::BANDS)?;
        let mut out = String::new();
        for (band, digit) in bands.iter().enumerate().rev() {
            out.push_str(&self.render_band(digit.value, band)?);
        }

        tracing::trace!(value = value.get(), numeral = %out, "wrote Roman numeral");
        Ok(out)
    }

    fn decode(&self, text: &str) -> NumeralResult<NumeralValue> {
        let result = self.read(text);
        if let Err(err) = &result {
            tracing::debug!(input = text, %err, "rejected Roman numeral");
        }
        result
    }

    fn system(&self) -> NumeralSystem {
        NumeralSystem::Roman
    }

    fn name(&self) -> &str {
        "Roman"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn write(value: u64) -> NumeralResult<String> {
        RomanCodec::new().encode(NumeralValue::new(value)?)
    }

    fn read(text: &str) -> NumeralResult<u64> {
        RomanCodec::new().decode(text).map(NumeralValue::get)
    }

    #[test]
    fn test_read_digits() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
        for (i, text) in expected.iter().enumerate() {
            assert_eq!(read(text), Ok(i as u64 + 1));
        }
    }

    #[test]
    fn test_read_tens_and_hundreds() {
        assert_eq!(read("XL"), Ok(40));
        assert_eq!(read("LXXX"), Ok(80));
        assert_eq!(read("XC"), Ok(90));
        assert_eq!(read("CD"), Ok(400));
        assert_eq!(read("DCCC"), Ok(800));
        assert_eq!(read("CM"), Ok(900));
        assert_eq!(read("MMM"), Ok(3000));
    }

    #[test]
    fn test_read_mixed() {
        assert_eq!(read("XIV"), Ok(14));
        assert_eq!(read("XIX"), Ok(19));
        assert_eq!(read("LXXIX"), Ok(79));
        assert_eq!(read("CLXIV"), Ok(164));
        assert_eq!(read("CDLXXVII"), Ok(477));
        assert_eq!(read("DCCLIX"), Ok(759));
        assert_eq!(read("CMXCIX"), Ok(999));
        assert_eq!(read("MCMXIX"), Ok(1919));
        assert_eq!(read("MMXXII"), Ok(2022));
    }

    #[test]
    fn test_read_normalization() {
        assert_eq!(read(" mcmxix "), Ok(1919));
        assert_eq!(read("xIv"), Ok(14));
    }

    #[test]
    fn test_read_errors() {
        assert_eq!(read(""), Err(NumeralError::EmptyInput));
        assert_eq!(read(" "), Err(NumeralError::EmptyInput));
        assert_eq!(read("IIII"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("IC"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("MMMM"), Err(NumeralError::GrammarMismatch));
        assert_eq!(read("а҃"), Err(NumeralError::GrammarMismatch));
    }

    #[test]
    fn test_write() {
        assert_eq!(write(1).unwrap(), "I");
        assert_eq!(write(4).unwrap(), "IV");
        assert_eq!(write(9).unwrap(), "IX");
        assert_eq!(write(14).unwrap(), "XIV");
        assert_eq!(write(40).unwrap(), "XL");
        assert_eq!(write(90).unwrap(), "XC");
        assert_eq!(write(400).unwrap(), "CD");
        assert_eq!(write(1919).unwrap(), "MCMXIX");
        assert_eq!(write(2022).unwrap(), "MMXXII");
        assert_eq!(write(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_write_errors() {
        assert_eq!(write(0), Err(NumeralError::NonPositiveValue));
        assert_eq!(write(4000), Err(NumeralError::OutOfRange));
    }

    #[test]
    fn test_round_trip_full_range() {
        for value in 1..=RomanAlphabet::MAX_VALUE {
            let text = write(value).unwrap();
            assert_eq!(read(&text), Ok(value), "{text}");
        }
    }

    #[test]
    fn test_band_values_stay_single_digit() {
        let codec = RomanCodec::new();
        for value in [3888, 3999, 1444, 2749] {
            let text = write(value).unwrap();
            let bands = segment_roman(&text, &ROMAN).unwrap();
            for (band, group) in bands.iter().enumerate() {
                let digit = codec.band_value(group).unwrap() / 10u64.pow(band as u32);
                assert!(digit <= 9, "{text} band {band}");
            }
        }
    }

    quickcheck! {
        fn prop_round_trip(seed: u16) -> bool {
            let value = 1 + u64::from(seed) % RomanAlphabet::MAX_VALUE;
            write(value).and_then(|text| read(&text)) == Ok(value)
        }

        fn prop_lower_case_reads_the_same(seed: u16) -> bool {
            let value = 1 + u64::from(seed) % RomanAlphabet::MAX_VALUE;
            write(value).and_then(|text| read(&text.to_lowercase())) == Ok(value)
        }

        fn prop_out_of_range_rejected(extra: u32) -> bool {
            write(RomanAlphabet::MAX_VALUE + 1 + u64::from(extra)) == Err(NumeralError::OutOfRange)
        }
    }
}
