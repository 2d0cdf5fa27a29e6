//! Canvas 2D raster surface used by signet to paint signatures.
//!
//! This crate provides the subset of the Canvas 2D API that signature
//! rendering needs, without a browser or JavaScript runtime. It uses:
//! - `tiny-skia` for 2D graphics rendering
//! - `cosmic-text` for text shaping, measurement, and glyph outlines
//! - `fontdb` for font database management, including fonts registered at runtime
//!
//! # Example
//!
//! ```rust,ignore
//! use signet_canvas2d::{Canvas2dContext, TextAlign, TextBaseline};
//!
//! let mut ctx = Canvas2dContext::new(800, 300)?;
//! ctx.set_fill_style("white")?;
//! ctx.fill_rect(0.0, 0.0, 800.0, 300.0);
//! ctx.set_font("bold 80px 'Great Vibes'")?;
//! ctx.set_text_align(TextAlign::Center);
//! ctx.set_text_baseline(TextBaseline::Middle);
//! ctx.set_fill_style("#000000")?;
//! ctx.fill_text("Jane Doe", 400.0, 150.0);
//! let png_data = ctx.to_png()?;
//! ```

mod context;
mod drawing_state;
mod error;
mod font_config;
mod font_parser;
mod style;
mod text;

// Re-export public API
pub use context::{Canvas2dContext, LoadedFont};
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use font_config::{font_config_to_fontdb, CustomFont, FontConfig, GenericFamilyMap};
pub use font_parser::{parse_font, ParsedFont};
pub use style::{FillStyle, LineCap, TextAlign, TextBaseline};
pub use text::TextMetrics;
