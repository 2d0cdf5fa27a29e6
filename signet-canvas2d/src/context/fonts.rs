//! Runtime font registration for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::font_config::{load_custom_font, CustomFont};

/// Handle to faces loaded with [`Canvas2dContext::load_font`].
///
/// Pass it back to [`Canvas2dContext::unload_font`] to drop the faces again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFont {
    faces: Vec<fontdb::ID>,
    family: Option<String>,
}

impl LoadedFont {
    /// Number of faces the font file contributed.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Family override the faces were registered under, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl Canvas2dContext {
    /// Load font data into this context's font database.
    ///
    /// Fails with [`Canvas2dError::FontLoadError`] when the data holds no
    /// readable face; the database is left unchanged in that case.
    pub fn load_font(&mut self, font: &CustomFont) -> Canvas2dResult<LoadedFont> {
        let faces = load_custom_font(self.font_system.db_mut(), font);
        if faces.is_empty() {
            return Err(Canvas2dError::FontLoadError(format!(
                "no usable font face in {} bytes",
                font.data.len()
            )));
        }
        log::debug!(
            target: "canvas",
            "loaded {} face(s) as {:?}",
            faces.len(),
            font.family_name
        );
        Ok(LoadedFont {
            faces,
            family: font.family_name.clone(),
        })
    }

    /// Remove faces previously added with [`Canvas2dContext::load_font`].
    pub fn unload_font(&mut self, font: &LoadedFont) {
        let db = self.font_system.db_mut();
        for id in &font.faces {
            db.remove_face(*id);
        }
        log::debug!(target: "canvas", "unloaded {} face(s) of {:?}", font.faces.len(), font.family);
    }

    /// Whether any face in the font database belongs to `family`.
    pub fn has_font_family(&self, family: &str) -> bool {
        self.font_system
            .db()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }
}
