// ============================================================================
// Formatting Engine
// Applies and removes titlo and dot decorations on Cyrillic numerals
// ============================================================================

use crate::domain::{CyrillicAlphabet, FormattingState};
use crate::numeric::{NumeralError, NumeralResult};

/// Text of one non-empty digit group, markers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    /// Power of one thousand the group stands for
    pub magnitude: u32,
    /// Glyphs with their magnitude markers
    pub text: String,
}

/// Decorates assembled digit strings and strips decorations from input.
#[derive(Debug, Clone, Copy)]
pub struct FormattingEngine<'a> {
    alphabet: &'a CyrillicAlphabet,
}

impl<'a> FormattingEngine<'a> {
    pub fn new(alphabet: &'a CyrillicAlphabet) -> Self {
        Self { alphabet }
    }

    /// Assemble groups (ascending order) most significant first and decorate the result.
    ///
    /// A delimiter dot goes between every adjacent pair when requested; otherwise
    /// only between the units group and the group above it when `separate_units` is set.
    pub fn assemble(
        &self,
        groups: &[RenderedGroup],
        separate_units: bool,
        state: &FormattingState,
    ) -> String {
        let mut out = String::new();

        for (i, group) in groups.iter().enumerate().rev() {
            out.push_str(&group.text);

            let lower = i.checked_sub(1).and_then(|j| groups.get(j));
            if let Some(lower) = lower {
                if state.delimiter_dots || (separate_units && lower.magnitude == 0) {
                    out.push(self.alphabet.dot);
                }
            }
        }

        if !state.suppress_titlo {
            out = self.place_titlo(&out);
        }

        self.wrap(out, state)
    }

    /// Place the titlo over the second-to-last glyph, or after a lone trailing glyph.
    ///
    /// The titlo never lands directly after a marker or a dot.
    pub fn place_titlo(&self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();

        match chars.len() {
            n if n >= 2 && self.alphabet.is_digit(chars[n - 2]) => {
                chars.insert(n - 1, self.alphabet.titlo);
            }
            _ => chars.push(self.alphabet.titlo),
        }

        chars.into_iter().collect()
    }

    /// Prepend and/or append a dot.
    pub fn wrap(&self, text: String, state: &FormattingState) -> String {
        if !state.prepend_dot && !state.append_dot {
            return text;
        }

        let mut out = String::with_capacity(text.len() + 2);
        if state.prepend_dot {
            out.push(self.alphabet.dot);
        }
        out.push_str(&text);
        if state.append_dot {
            out.push(self.alphabet.dot);
        }
        out
    }

    /// Normalize input for segmentation.
    ///
    /// Trims whitespace, lower-cases, removes every titlo and strips wrap dots.
    /// Interior dots are kept: they are group boundaries.
    ///
    /// # Errors
    /// Returns `EmptyInput` for empty or whitespace-only text.
    pub fn strip(&self, text: &str) -> NumeralResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NumeralError::EmptyInput);
        }

        let folded: String = trimmed
            .to_lowercase()
            .chars()
            .filter(|&c| c != self.alphabet.titlo)
            .collect();

        Ok(folded.trim_matches(self.alphabet.dot).trim().to_string())
    }
}
