//! Registry of uploaded fonts.

use crate::error::FontRegistrationError;
use crate::style::BUILTIN_FAMILIES;
use std::path::Path;
use std::sync::Arc;

const FONT_EXTENSIONS: [&str; 2] = [".ttf", ".otf"];

/// Display name for uploads whose file name is only an extension.
pub const UNTITLED_FONT: &str = "untitled";

/// A font accepted by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFont {
    /// File name without its extension.
    pub display_name: String,
    /// Unique family name the font is drawn with.
    pub family_id: String,
    /// Raw font file bytes.
    pub data: Arc<Vec<u8>>,
}

/// One entry of the family selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOption {
    pub display_name: String,
    pub family_id: String,
}

/// Uploaded fonts, keyed by synthesized family id.
///
/// Ids take the form `uploaded-{stem}-{n}` where `n` comes from a counter
/// owned by the registry, so they never repeat within a registry and never
/// match a built-in family.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<RegisteredFont>,
    next_id: u64,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register font bytes uploaded under `file_name`.
    pub fn register_font(
        &mut self,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<RegisteredFont, FontRegistrationError> {
        check_font_extension(file_name)?;

        if let Err(err) = ttf_parser::Face::parse(&data, 0) {
            log::warn!("Rejected font upload {}: {}", file_name, err);
            return Err(FontRegistrationError::FontLoadFailed {
                file_name: file_name.to_string(),
                reason: err.to_string(),
            });
        }

        self.next_id += 1;
        let display_name = match file_stem(file_name) {
            "" => UNTITLED_FONT.to_string(),
            stem => stem.to_string(),
        };
        let font = RegisteredFont {
            family_id: format!("uploaded-{}-{}", display_name, self.next_id),
            display_name,
            data: Arc::new(data),
        };
        log::info!("Registered font {} as {}", file_name, font.family_id);
        self.fonts.push(font.clone());
        Ok(font)
    }

    /// Remove an uploaded font. Unknown ids are ignored.
    pub fn remove_font(&mut self, family_id: &str) -> Option<RegisteredFont> {
        let index = self.fonts.iter().position(|f| f.family_id == family_id)?;
        let font = self.fonts.remove(index);
        log::info!("Removed font {}", font.family_id);
        Some(font)
    }

    pub fn get(&self, family_id: &str) -> Option<&RegisteredFont> {
        self.fonts.iter().find(|f| f.family_id == family_id)
    }

    /// Look up an uploaded font by family id or, failing that, by display name.
    /// The most recent upload wins when display names repeat.
    pub fn find(&self, name: &str) -> Option<&RegisteredFont> {
        self.get(name)
            .or_else(|| self.fonts.iter().rev().find(|f| f.display_name == name))
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Built-in families followed by uploads in registration order.
    pub fn families(&self) -> Vec<FontOption> {
        BUILTIN_FAMILIES
            .iter()
            .map(|family| FontOption {
                display_name: family.to_string(),
                family_id: family.to_string(),
            })
            .chain(self.fonts.iter().map(|f| FontOption {
                display_name: f.display_name.clone(),
                family_id: f.family_id.clone(),
            }))
            .collect()
    }

    /// Whether `family_id` names a built-in or uploaded family.
    pub fn is_known_family(&self, family_id: &str) -> bool {
        BUILTIN_FAMILIES.contains(&family_id) || self.get(family_id).is_some()
    }
}

/// Accept only `.ttf` and `.otf` file names, ignoring case.
pub fn check_font_extension(file_name: &str) -> Result<(), FontRegistrationError> {
    let lower = file_name.to_ascii_lowercase();
    if FONT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(FontRegistrationError::InvalidFontFormat(file_name.to_string()))
    }
}

/// Read an uploaded font file.
///
/// The extension is checked before the file is touched. Returns the file name
/// and the file bytes.
pub async fn read_font_upload(path: &Path) -> Result<(String, Vec<u8>), FontRegistrationError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    check_font_extension(&file_name)?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|source| FontRegistrationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Read {} bytes from {:?}", data.len(), path);
    Ok((file_name, data))
}

/// File name with its last extension removed. A name that is only an
/// extension, like `.ttf`, has an empty stem.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index + 1 < file_name.len() => &file_name[..index],
        _ => file_name,
    }
}
