//! CSS font shorthand parsing.
//!
//! Parses strings like "80px 'Great Vibes'" or "bold 120px uploaded-Script-1, serif"
//! into components usable with cosmic-text.

use crate::error::{Canvas2dError, Canvas2dResult};
use cosmic_text::{Style, Weight};

/// Parsed font specification from a CSS font string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    /// Font style (normal, italic, oblique).
    pub style: Style,
    /// Font weight (100-900 or keywords like bold).
    pub weight: Weight,
    /// Font size in pixels.
    pub size_px: f32,
    /// Font families in order of preference.
    pub families: Vec<String>,
}

impl Default for ParsedFont {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            weight: Weight::NORMAL,
            size_px: 10.0,
            families: vec!["sans-serif".to_string()],
        }
    }
}

/// Keywords that may precede the size, and what they set.
enum Prefix {
    Style(Style),
    Weight(Weight),
    Ignored,
}

const PREFIX_KEYWORDS: &[(&str, Prefix)] = &[
    ("italic", Prefix::Style(Style::Italic)),
    ("oblique", Prefix::Style(Style::Oblique)),
    // normal may be a style, variant, or weight
    ("normal", Prefix::Ignored),
    ("small-caps", Prefix::Ignored),
    ("bolder", Prefix::Weight(Weight::EXTRA_BOLD)),
    ("bold", Prefix::Weight(Weight::BOLD)),
    ("lighter", Prefix::Weight(Weight::LIGHT)),
];

/// Parse a CSS font string into components.
///
/// Supports format: `[style] [variant] [weight] size[/line-height] family[, family]*`
pub fn parse_font(font_str: &str) -> Canvas2dResult<ParsedFont> {
    let font_str = font_str.trim();
    if font_str.is_empty() {
        return Ok(ParsedFont::default());
    }

    let mut result = ParsedFont::default();
    let mut remaining = font_str;

    // Style, variant and weight may appear in any order before the size
    'prefix: loop {
        let trimmed = remaining.trim_start();
        for (keyword, prefix) in PREFIX_KEYWORDS {
            if let Some(rest) = strip_word(trimmed, keyword) {
                match prefix {
                    Prefix::Style(style) => result.style = *style,
                    Prefix::Weight(weight) => result.weight = *weight,
                    Prefix::Ignored => {}
                }
                remaining = rest;
                continue 'prefix;
            }
        }
        if let Some((weight, rest)) = parse_numeric_weight(trimmed) {
            result.weight = weight;
            remaining = rest;
            continue;
        }
        break;
    }

    let (size, rest) = parse_font_size(remaining.trim_start())?;
    result.size_px = size;
    remaining = rest.trim_start();

    if let Some(rest) = remaining.strip_prefix('/') {
        remaining = skip_line_height(rest);
    }

    let families = parse_font_families(remaining);
    if !families.is_empty() {
        result.families = families;
    }

    Ok(result)
}

/// Strip `word` from the front of `s` if it is followed by whitespace or the end.
fn strip_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(word)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Try to parse a numeric weight (100-900) at the start of the string.
fn parse_numeric_weight(s: &str) -> Option<(Weight, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let weight: u16 = s[..end].parse().ok()?;
    if !(100..=900).contains(&weight) || weight % 100 != 0 {
        return None;
    }

    let rest = &s[end..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((Weight(weight), rest))
}

/// Parse font size from string.
fn parse_font_size(s: &str) -> Canvas2dResult<(f32, &str)> {
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());

    if num_end == 0 {
        return Err(Canvas2dError::FontParseError(format!(
            "Expected font size, got: {}",
            s
        )));
    }

    let num_str = &s[..num_end];
    let rest = &s[num_end..];

    let size: f32 = num_str.parse().map_err(|_| {
        Canvas2dError::FontParseError(format!("Invalid font size number: {}", num_str))
    })?;

    let (multiplier, unit_len) = if rest.starts_with("px") {
        (1.0, 2)
    } else if rest.starts_with("pt") {
        (4.0 / 3.0, 2) // 1pt = 4/3 px
    } else if rest.starts_with("rem") {
        (16.0, 3)
    } else if rest.starts_with("em") {
        (16.0, 2) // Assume 1em = 16px
    } else if rest.starts_with('%') {
        (16.0 / 100.0, 1)
    } else {
        (1.0, 0)
    };

    Ok((size * multiplier, &rest[unit_len..]))
}

/// Skip line-height specification after '/'.
fn skip_line_height(s: &str) -> &str {
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    s[end..].trim_start()
}

/// Parse a comma separated family list. Quoted names may contain commas.
fn parse_font_families(s: &str) -> Vec<String> {
    let mut families = Vec::new();
    let mut remaining = s.trim();

    while !remaining.is_empty() {
        let (family, rest) = parse_single_family(remaining);
        if !family.is_empty() {
            families.push(family);
        }
        match rest.trim_start().strip_prefix(',') {
            Some(rest) => remaining = rest.trim_start(),
            None => break,
        }
    }

    families
}

/// Parse a single font family name.
fn parse_single_family(s: &str) -> (String, &str) {
    let s = s.trim_start();

    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote) {
            return parse_quoted_family(inner, quote);
        }
    }

    let end = s.find(',').unwrap_or(s.len());
    (s[..end].trim().to_string(), &s[end..])
}

/// Read a quoted family name up to the closing `quote`.
///
/// A backslash makes the next character literal. An unterminated quote runs
/// to the end of the string.
fn parse_quoted_family(s: &str, quote: char) -> (String, &str) {
    let mut name = String::new();
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    name.push(escaped);
                }
            }
            c if c == quote => return (name, &s[i + c.len_utf8()..]),
            c => name.push(c),
        }
    }
    (name, "")
}
