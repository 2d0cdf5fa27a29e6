//! Integration tests for signet-canvas2d.

use signet_canvas2d::{
    Canvas2dContext, Canvas2dError, CustomFont, FontConfig, LineCap, TextAlign, TextBaseline,
};
use std::sync::{Arc, OnceLock};

/// Bytes of some installed font file, if the machine has any.
fn system_font_bytes() -> Option<Arc<Vec<u8>>> {
    static FONT: OnceLock<Option<Arc<Vec<u8>>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let bytes = db.faces().find_map(|face| match &face.source {
            fontdb::Source::File(path) => std::fs::read(path).ok().map(Arc::new),
            _ => None,
        });
        bytes
    })
    .clone()
}

/// Skip test if there are no system fonts to draw glyphs with.
macro_rules! skip_if_no_system_fonts {
    () => {
        if system_font_bytes().is_none() {
            eprintln!("Skipping test: no system fonts available");
            return;
        }
    };
}

fn ink_bounds(ctx: &Canvas2dContext) -> Option<(u32, u32, u32, u32)> {
    let data = ctx.get_image_data(0, 0, ctx.width(), ctx.height());
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..ctx.height() {
        for x in 0..ctx.width() {
            let idx = ((y * ctx.width() + x) * 4 + 3) as usize;
            if data[idx] > 0 {
                let b = bounds.get_or_insert((x, y, x, y));
                b.0 = b.0.min(x);
                b.1 = b.1.min(y);
                b.2 = b.2.max(x);
                b.3 = b.3.max(y);
            }
        }
    }
    bounds
}

/// Test that centered, middle-baseline text lands around the anchor point.
#[test]
fn test_fill_text_is_centered() {
    skip_if_no_system_fonts!();
    let mut ctx = Canvas2dContext::new(400, 200).unwrap();
    ctx.set_font("60px sans-serif").unwrap();
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.fill_text("Hello", 200.0, 100.0);

    let (x0, y0, x1, y1) = ink_bounds(&ctx).expect("text should produce ink");
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    assert!((cx - 200.0).abs() < 20.0, "horizontal center {}", cx);
    assert!((cy - 100.0).abs() < 30.0, "vertical center {}", cy);
}

/// Test that wide text is clipped at the surface edges, not wrapped.
#[test]
fn test_wide_text_overflows_on_one_line() {
    skip_if_no_system_fonts!();
    let mut ctx = Canvas2dContext::new(200, 100).unwrap();
    ctx.set_font("80px sans-serif").unwrap();
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);
    let text = "Maximiliana Wolfeschlegel";
    assert!(ctx.measure_text(text).width > 200.0);
    ctx.fill_text(text, 100.0, 50.0);

    let (x0, y0, x1, y1) = ink_bounds(&ctx).unwrap();
    // Ink reaches both edges; a single line stays well inside the height
    assert_eq!(x0, 0);
    assert_eq!(x1, 199);
    assert!(y0 > 0 && y1 < 99);
}

/// Test that measured width grows with font size.
#[test]
fn test_measure_text_scales_with_size() {
    skip_if_no_system_fonts!();
    let mut ctx = Canvas2dContext::new(10, 10).unwrap();
    ctx.set_font("40px sans-serif").unwrap();
    let small = ctx.measure_text("Jane Doe").width;
    ctx.set_font("80px sans-serif").unwrap();
    let large = ctx.measure_text("Jane Doe").width;
    assert!(small > 0.0);
    assert!((large / small - 2.0).abs() < 0.1, "{} vs {}", small, large);
}

/// Test registering font bytes under a synthesized family name.
#[test]
fn test_load_and_unload_font_with_family_override() {
    skip_if_no_system_fonts!();
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    let mut ctx = Canvas2dContext::with_config(10, 10, &config).unwrap();
    let data = system_font_bytes().unwrap();

    let loaded = ctx
        .load_font(&CustomFont::with_family(data, "uploaded-test-1"))
        .unwrap();
    assert!(loaded.face_count() >= 1);
    assert_eq!(loaded.family(), Some("uploaded-test-1"));
    assert!(ctx.has_font_family("uploaded-test-1"));

    ctx.set_font("40px uploaded-test-1").unwrap();
    assert!(ctx.measure_text("Jane").width > 0.0);

    ctx.unload_font(&loaded);
    assert!(!ctx.has_font_family("uploaded-test-1"));
}

/// Test that data without any face is rejected.
#[test]
fn test_load_font_rejects_garbage() {
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    let mut ctx = Canvas2dContext::with_config(10, 10, &config).unwrap();
    let garbage = CustomFont::with_family(Arc::new(b"not a font at all".to_vec()), "x");
    assert!(matches!(
        ctx.load_font(&garbage),
        Err(Canvas2dError::FontLoadError(_))
    ));
    assert!(!ctx.has_font_family("x"));
}

/// Test that a square cap extends a stroke past its endpoints.
#[test]
fn test_line_cap_square() {
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    let mut ctx = Canvas2dContext::with_config(100, 20, &config).unwrap();
    ctx.set_stroke_style("black").unwrap();
    ctx.set_line_width(4.0);
    ctx.set_line_cap(LineCap::Square);
    ctx.begin_path();
    ctx.move_to(20.0, 10.0);
    ctx.line_to(80.0, 10.0);
    ctx.stroke();

    let data = ctx.get_image_data(0, 0, 100, 20);
    let alpha = |x: usize, y: usize| data[(y * 100 + x) * 4 + 3];
    assert_eq!(alpha(18, 10), 255);
    assert_eq!(alpha(81, 10), 255);
    assert_eq!(alpha(10, 10), 0);
}
