//! The part of the context that `save()` and `restore()` act on.

use crate::font_parser::ParsedFont;
use crate::style::{FillStyle, LineCap, TextAlign, TextBaseline};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    pub fill_style: FillStyle,
    pub stroke_style: FillStyle,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub miter_limit: f32,
    pub font: ParsedFont,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for DrawingState {
    /// Initial state of a fresh or reset canvas: black paint, 1px butt-capped
    /// lines, 10px sans-serif text anchored at start/alphabetic.
    fn default() -> Self {
        Self {
            fill_style: FillStyle::default(),
            stroke_style: FillStyle::default(),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            miter_limit: 10.0,
            font: ParsedFont::default(),
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
        }
    }
}

impl DrawingState {
    /// Stroke parameters for the current line settings.
    pub(crate) fn stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.line_width,
            line_cap: self.line_cap.into(),
            miter_limit: self.miter_limit,
            ..Default::default()
        }
    }
}
