//! Path building operations for Canvas2dContext.

use super::Canvas2dContext;

impl Canvas2dContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        self.path_builder.move_to(x, y);
        self.has_current_point = true;
    }

    /// Draw a line to a point.
    ///
    /// Without a current point this behaves like `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        if !self.has_current_point {
            self.move_to(x, y);
            return;
        }
        self.path_builder.line_to(x, y);
    }
}
