//! Paints a [`StyleDescriptor`] onto a canvas surface.

use crate::error::SignetResult;
use crate::style::{
    BackgroundMode, StyleDescriptor, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_INK_COLOR,
};
use signet_canvas2d::{Canvas2dContext, LineCap, TextAlign, TextBaseline};

pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.3)";
pub const SHADOW_OFFSET: f32 = 3.0;
/// Underline distance below the center line, as a fraction of the font size.
pub const UNDERLINE_OFFSET_RATIO: f32 = 0.3;
pub const UNDERLINE_WIDTH: f32 = 3.0;

/// Renders signatures onto a fixed-size surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRenderer {
    width: u32,
    height: u32,
}

impl Default for SignatureRenderer {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl SignatureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paint `style` onto `surface` and hand the painted surface to `on_ready`.
    ///
    /// Every paint starts from a fully reset surface, so identical inputs give
    /// identical pixels. Blank text paints nothing: the surface keeps its
    /// previous pixels, `on_ready` is not called and `Ok(false)` is returned.
    pub fn render<F>(
        &self,
        surface: &mut Canvas2dContext,
        style: &StyleDescriptor,
        on_ready: F,
    ) -> SignetResult<bool>
    where
        F: FnOnce(&Canvas2dContext),
    {
        if !style.has_text() {
            log::debug!("Nothing to render for blank text");
            return Ok(false);
        }

        surface.set_dimensions(self.width, self.height)?;
        let (width, height) = (self.width as f32, self.height as f32);
        let (center_x, center_y) = (width / 2.0, height / 2.0);

        match &style.background {
            BackgroundMode::Transparent => surface.clear_rect(0.0, 0.0, width, height),
            BackgroundMode::Opaque(color) => {
                if let Err(err) = surface.set_fill_style(color) {
                    log::warn!("Invalid background color {:?}, using white: {}", color, err);
                    surface.set_fill_style(DEFAULT_BACKGROUND_COLOR)?;
                }
                surface.fill_rect(0.0, 0.0, width, height);
            }
        }

        let font = style.font_string();
        surface.set_font(&font)?;
        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);

        if style.shadow {
            surface.set_fill_style(SHADOW_COLOR)?;
            surface.fill_text(
                &style.text,
                center_x + SHADOW_OFFSET,
                center_y + SHADOW_OFFSET,
            );
        }

        let ink = if surface.set_fill_style(&style.ink_color).is_ok() {
            style.ink_color.as_str()
        } else {
            log::warn!("Invalid ink color {:?}, using black", style.ink_color);
            surface.set_fill_style(DEFAULT_INK_COLOR)?;
            DEFAULT_INK_COLOR
        };
        surface.fill_text(&style.text, center_x, center_y);

        if style.underline {
            let text_width = surface.measure_text(&style.text).width;
            let y = center_y + style.font_size_px as f32 * UNDERLINE_OFFSET_RATIO;
            surface.set_stroke_style(ink)?;
            surface.set_line_width(UNDERLINE_WIDTH);
            surface.set_line_cap(LineCap::Butt);
            surface.begin_path();
            surface.move_to(center_x - text_width / 2.0, y);
            surface.line_to(center_x + text_width / 2.0, y);
            surface.stroke();
        }

        log::debug!(
            "Rendered {:?} with {} (shadow: {}, underline: {})",
            style.text,
            font,
            style.shadow,
            style.underline
        );
        on_ready(surface);
        Ok(true)
    }
}
