//! Text shaping and measurement using cosmic-text.

use crate::font_parser::ParsedFont;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Text metrics returned by measureText().
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
    /// Font ascent above the alphabetic baseline.
    pub font_bounding_box_ascent: f32,
    /// Font descent below the alphabetic baseline.
    pub font_bounding_box_descent: f32,
}

/// A shaped single line of text plus the vertical extents used for baseline math.
pub(crate) struct ShapedLine {
    pub buffer: Buffer,
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// Pick the cosmic-text family for a CSS family list.
///
/// The first family present in the font database wins. Generic keywords map to
/// cosmic-text generics. When nothing matches, the first name is passed through
/// and cosmic-text's own fallback chooses a face.
pub(crate) fn resolve_family<'a>(font_system: &FontSystem, families: &'a [String]) -> Family<'a> {
    let db = font_system.db();
    let mut fallback = None;
    for name in families {
        let family = match name.to_ascii_lowercase().as_str() {
            "serif" => Family::Serif,
            "sans-serif" => Family::SansSerif,
            "monospace" => Family::Monospace,
            "cursive" => Family::Cursive,
            "fantasy" => Family::Fantasy,
            _ => Family::Name(name.as_str()),
        };
        let present = match family {
            Family::Name(n) => db
                .faces()
                .any(|face| face.families.iter().any(|(f, _)| f == n)),
            _ => true,
        };
        if present {
            return family;
        }
        fallback.get_or_insert(family);
    }
    fallback.unwrap_or(Family::SansSerif)
}

/// Shape `text` as a single unwrapped line.
pub(crate) fn shape_line(
    font_system: &mut FontSystem,
    text: &str,
    font: &ParsedFont,
    hinting_enabled: bool,
) -> ShapedLine {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);

    // cosmic-text needs at least one face to shape against
    if font_system.db().len() == 0 {
        log::warn!(target: "canvas", "no fonts available, \"{}\" is not drawn", text);
        return ShapedLine {
            buffer: Buffer::new_empty(metrics),
            width: 0.0,
            ascent: font.size_px * 0.8,
            descent: font.size_px * 0.2,
        };
    }

    let mut buffer = Buffer::new(font_system, metrics);

    let family = resolve_family(font_system, &font.families);
    let mut attrs = Attrs::new()
        .family(family)
        .weight(font.weight)
        .style(font.style);
    if !hinting_enabled {
        // Match unhinted outline rendering
        attrs = attrs.cache_key_flags(CacheKeyFlags::DISABLE_HINTING);
    }

    // No width is set on the buffer, so the line never wraps
    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut width: f32 = 0.0;
    let mut ascent: f32 = 0.0;
    let mut descent: f32 = 0.0;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        ascent = ascent.max(run.line_y - run.line_top);
        descent = descent.max((run.line_top + run.line_height) - run.line_y);
    }
    if ascent == 0.0 && descent == 0.0 {
        ascent = font.size_px * 0.8;
        descent = font.size_px * 0.2;
    }

    ShapedLine {
        buffer,
        width,
        ascent,
        descent,
    }
}

/// Measure text using cosmic-text.
pub fn measure_text(
    font_system: &mut FontSystem,
    text: &str,
    font: &ParsedFont,
    hinting_enabled: bool,
) -> TextMetrics {
    let line = shape_line(font_system, text, font, hinting_enabled);
    TextMetrics {
        width: line.width,
        font_bounding_box_ascent: line.ascent,
        font_bounding_box_descent: line.descent,
    }
}
