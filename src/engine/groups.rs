// ============================================================================
// Group Engine
// Splits integers into digit groups and numeral text into glyph groups
// ============================================================================

use crate::domain::{
    CyrillicAlphabet, DigitGroup, DigitGroups, GlyphClass, GlyphGroup, MarkerStyle, NumeralValue,
    RomanAlphabet,
};
use crate::numeric::{NumeralError, NumeralResult};
use smallvec::SmallVec;

/// Glyph groups in ascending magnitude order
pub type GlyphGroups = SmallVec<[GlyphGroup; 8]>;

// ============================================================================
// Split (encode direction)
// ============================================================================

/// Split a value into base-1000 groups, least significant first.
///
/// Zero-valued groups are kept so that each group's index equals its magnitude.
pub fn split_thousands(value: NumeralValue) -> DigitGroups {
    let mut groups = DigitGroups::new();
    let mut rest = value.get();
    let mut magnitude = 0;

    while rest > 0 {
        groups.push(DigitGroup::new((rest % 1000) as u16, magnitude));
        rest /= 1000;
        magnitude += 1;
    }

    groups
}

/// Split a value into decimal digits, one per band, least significant first.
///
/// # Errors
/// Returns `OutOfRange` if the value needs more than `bands` digits.
pub fn split_bands(value: NumeralValue, bands: usize) -> NumeralResult<DigitGroups> {
    let mut groups = DigitGroups::new();
    let mut rest = value.get();
    let mut magnitude = 0;

    while rest > 0 {
        if groups.len() == bands {
            return Err(NumeralError::OutOfRange);
        }
        groups.push(DigitGroup::new((rest % 10) as u16, magnitude));
        rest /= 10;
        magnitude += 1;
    }

    Ok(groups)
}

// ============================================================================
// Segment (decode direction), Cyrillic
// ============================================================================

/// A digit glyph together with the magnitude markers written directly before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    markers: u32,
    glyph: char,
    class: GlyphClass,
}

/// Break normalized text into dot-separated runs of tokens.
///
/// Wrap dots must already be stripped; any remaining dot is a group boundary.
fn tokenize(text: &str, alphabet: &CyrillicAlphabet) -> NumeralResult<Vec<Vec<Token>>> {
    let mut runs = vec![Vec::new()];
    let mut markers = 0u32;

    for ch in text.chars() {
        if ch == alphabet.thousand {
            markers += 1;
        } else if ch == alphabet.dot {
            // A dot needs a glyph on both sides and cannot split a marker from its glyph
            let closed = runs.last().is_some_and(|run| !run.is_empty());
            if markers > 0 || !closed {
                return Err(NumeralError::GrammarMismatch);
            }
            runs.push(Vec::new());
        } else {
            let (_, class) = alphabet.lookup(ch).ok_or(NumeralError::GrammarMismatch)?;
            if let Some(run) = runs.last_mut() {
                run.push(Token {
                    markers,
                    glyph: ch,
                    class,
                });
            }
            markers = 0;
        }
    }

    if markers > 0 || runs.iter().any(Vec::is_empty) {
        return Err(NumeralError::GrammarMismatch);
    }

    Ok(runs)
}

/// Greedy parse of one group starting at `start`:
/// `[hundreds]? ( [units]? ten | [tens]? [units]? )`.
///
/// Only the first token may carry markers. Returns the index after the group.
fn parse_group(tokens: &[Token], start: usize, alphabet: &CyrillicAlphabet) -> (GlyphGroup, usize) {
    let mut group = GlyphGroup::new(tokens[start].markers);
    let mut pos = start;

    // Token at `pos` if it can continue the current group
    let peek = |pos: usize| {
        tokens
            .get(pos)
            .filter(|token| pos == start || token.markers == 0)
    };
    let is_ten = |token: &Token| token.glyph == alphabet.ten();

    if let Some(token) = peek(pos).filter(|t| t.class == GlyphClass::Hundreds) {
        group.push(token.glyph);
        pos += 1;
    }

    match (peek(pos), peek(pos + 1)) {
        (Some(units), Some(ten)) if units.class == GlyphClass::Units && is_ten(ten) => {
            group.push(units.glyph);
            group.push(ten.glyph);
            pos += 2;
        }
        (Some(ten), _) if is_ten(ten) => {
            group.push(ten.glyph);
            pos += 1;
        }
        _ => {
            if let Some(tens) = peek(pos).filter(|t| t.class == GlyphClass::Tens) {
                group.push(tens.glyph);
                pos += 1;
            }
            if let Some(units) = peek(pos).filter(|t| t.class == GlyphClass::Units) {
                group.push(units.glyph);
                pos += 1;
            }
        }
    }

    (group, pos)
}

/// Whether a plain-style run of same-magnitude glyphs forms a valid group.
///
/// Accepts descending order (hundreds, tens, units) and the swapped teen form.
fn is_plain_group(run: &[Token], alphabet: &CyrillicAlphabet) -> bool {
    if run.len() > 3 {
        return false;
    }
    if run.windows(2).all(|pair| pair[0].class > pair[1].class) {
        return true;
    }

    let teen = match run {
        [first, rest @ ..] if first.class == GlyphClass::Hundreds => rest,
        _ => run,
    };
    matches!(teen, [units, ten] if units.class == GlyphClass::Units && ten.glyph == alphabet.ten())
}

/// Segment normalized Cyrillic text into glyph groups, ascending magnitude order.
///
/// - `Delimited`: markers start a group and apply to the whole group; unmarked
///   glyphs that can legally continue a group are absorbed into it.
/// - `Plain`: a run of glyphs carrying the same marker count is one group;
///   unmarked glyphs are grouped by the delimited grammar.
///
/// # Errors
/// Returns `GrammarMismatch` for foreign glyphs, dangling markers, misplaced dots
/// or malformed plain runs.
pub fn segment_cyrillic(
    text: &str,
    style: MarkerStyle,
    alphabet: &CyrillicAlphabet,
) -> NumeralResult<GlyphGroups> {
    let mut groups = GlyphGroups::new();

    for tokens in tokenize(text, alphabet)? {
        let mut pos = 0;

        while pos < tokens.len() {
            let markers = tokens[pos].markers;

            if style == MarkerStyle::Plain && markers > 0 {
                let len = tokens[pos..]
                    .iter()
                    .take_while(|token| token.markers == markers)
                    .count();
                let run = &tokens[pos..pos + len];
                if !is_plain_group(run, alphabet) {
                    return Err(NumeralError::GrammarMismatch);
                }

                let mut group = GlyphGroup::new(markers);
                run.iter().for_each(|token| group.push(token.glyph));
                groups.push(group);
                pos += len;
            } else {
                let (group, next) = parse_group(&tokens, pos, alphabet);
                groups.push(group);
                pos = next;
            }
        }
    }

    // Most significant first -> ascending
    groups.reverse();
    Ok(groups)
}

// ============================================================================
// Segment (decode direction), Roman
// ============================================================================

/// Length of the run of `glyph` starting at `pos`, capped at `max`.
fn run_length(glyphs: &[char], pos: usize, glyph: char, max: usize) -> usize {
    glyphs
        .get(pos..)
        .map_or(0, |rest| rest.iter().take(max).take_while(|&&g| g == glyph).count())
}

/// Parse one decimal band starting at `pos`. Returns the index after the band.
fn parse_band(
    glyphs: &[char],
    pos: usize,
    one: char,
    five: Option<char>,
    ten: Option<char>,
) -> (GlyphGroup, usize) {
    let at = |i: usize| glyphs.get(i).copied();
    let end = match at(pos) {
        Some(g) if g == one => {
            let next = at(pos + 1);
            if next.is_some() && (next == five || next == ten) {
                pos + 2
            } else {
                pos + run_length(glyphs, pos, one, 3)
            }
        }
        Some(g) if Some(g) == five => pos + 1 + run_length(glyphs, pos + 1, one, 3),
        _ => pos,
    };

    let mut group = GlyphGroup::new(0);
    group.glyphs.extend_from_slice(&glyphs[pos..end]);
    (group, end)
}

/// Segment normalized Roman text into its decimal bands, ascending magnitude order.
///
/// Each band accepts one of: up to three "one" glyphs, "one" + "five",
/// "five" followed by up to three "one" glyphs, or "one" + next band's "one".
/// The thousands band only has the repeated form.
///
/// # Errors
/// Returns `GrammarMismatch` if the text is not fully consumed.
pub fn segment_roman(text: &str, alphabet: &RomanAlphabet) -> NumeralResult<GlyphGroups> {
    let glyphs: Vec<char> = text.chars().collect();
    let mut bands = GlyphGroups::new();
    let mut pos = 0;

    for band in (0..RomanAlphabet::BANDS).rev() {
        let one = alphabet.one(band).ok_or(NumeralError::OutOfRange)?;
        let (group, next) = parse_band(
            &glyphs,
            pos,
            one,
            alphabet.five(band),
            alphabet.one(band + 1),
        );
        bands.push(group);
        pos = next;
    }

    if pos != glyphs.len() {
        return Err(NumeralError::GrammarMismatch);
    }

    bands.reverse();
    Ok(bands)
}
