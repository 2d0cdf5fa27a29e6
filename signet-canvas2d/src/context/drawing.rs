//! Rectangle fills and path strokes for Canvas2dContext.

use super::Canvas2dContext;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Stroke the current path.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        // Clone the path builder so we don't consume it
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };

        let stroke = self.state.stroke();
        let paint = self.state.stroke_style.to_paint();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", x, y, width, height);
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) {
            let paint = self.state.fill_style.to_paint();
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Clear a rectangle (set pixels to transparent).
    pub fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        log::debug!(target: "canvas", "clearRect {} {} {} {}", x, y, width, height);
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) {
            let paint = tiny_skia::Paint {
                blend_mode: tiny_skia::BlendMode::Clear,
                ..Default::default()
            };
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}
