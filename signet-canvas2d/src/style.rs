//! Paint, line and text style values held in the drawing state.

/// Source of color for fills and strokes.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Color(tiny_skia::Color),
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::Color(tiny_skia::Color::BLACK)
    }
}

impl FillStyle {
    /// Anti-aliased paint for this style.
    pub(crate) fn to_paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        match self {
            FillStyle::Color(color) => paint.set_color(*color),
        }
        paint
    }
}

/// Shape drawn at the ends of stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<LineCap> for tiny_skia::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

/// Horizontal placement of text relative to its anchor.
///
/// Text is always laid out left to right, so `Start` behaves as `Left` and
/// `End` as `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    #[default]
    Start,
    End,
}

impl TextAlign {
    /// Offset from the anchor x to the start of a line `width` pixels wide.
    pub fn x_offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left | TextAlign::Start => 0.0,
            TextAlign::Right | TextAlign::End => -width,
            TextAlign::Center => -width / 2.0,
        }
    }
}

/// Vertical placement of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    /// Offset from the anchor y to the alphabetic baseline of a line with the
    /// given font ascent and descent.
    pub fn y_offset(self, ascent: f32, descent: f32) -> f32 {
        match self {
            TextBaseline::Top => ascent,
            TextBaseline::Hanging => ascent * 0.8,
            // Half way between the em box top and bottom
            TextBaseline::Middle => (ascent - descent) / 2.0,
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Ideographic => -descent * 0.5,
            TextBaseline::Bottom => -descent,
        }
    }
}
