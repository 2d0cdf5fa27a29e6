#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::OnceLock;

use signet_rs::signet_canvas2d::FontConfig;
use signet_rs::Session;

/// Path of an installed .ttf/.otf file to upload, if the machine has one.
pub fn system_font_file() -> Option<PathBuf> {
    static FONT: OnceLock<Option<PathBuf>> = OnceLock::new();
    FONT.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let files: Vec<PathBuf> = db
            .faces()
            .filter_map(|face| match &face.source {
                fontdb::Source::File(path) => Some(path.clone()),
                _ => None,
            })
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf"))
                    .unwrap_or(false)
            })
            .collect();
        // Prefer common Latin text faces over symbol fonts
        files
            .iter()
            .find(|path| {
                let name = path.to_string_lossy();
                ["DejaVuSans.ttf", "LiberationSans-Regular.ttf", "NotoSans-Regular.ttf"]
                    .iter()
                    .any(|preferred| name.ends_with(preferred))
            })
            .or_else(|| files.first())
            .cloned()
    })
    .clone()
}

/// Skip test if there is no font file to draw glyphs with.
macro_rules! skip_if_no_system_fonts {
    () => {
        if $crate::common::system_font_file().is_none() {
            eprintln!("Skipping test: no system fonts available");
            return;
        }
    };
}

/// Session that only sees fonts uploaded into it.
pub fn bare_session() -> Session {
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    Session::with_font_config(&config).unwrap()
}

/// Bare session with the system font uploaded as `signature.ttf` and selected.
pub fn session_with_uploaded_font() -> Session {
    let path = system_font_file().expect("system font");
    let data = std::fs::read(path).unwrap();
    let mut session = bare_session();
    session.upload_font_bytes("signature.ttf", data).unwrap();
    session
}

/// Straight-alpha RGBA pixels of the whole preview.
pub fn pixels(session: &Session) -> Vec<u8> {
    let surface = session.surface();
    surface.get_image_data(0, 0, surface.width(), surface.height())
}
