//! PNG export of a painted signature surface.

use crate::error::ExportError;
use signet_canvas2d::Canvas2dContext;
use std::path::{Path, PathBuf};

pub const FILE_NAME_SUFFIX: &str = "_signature.png";

/// PNG bytes plus the file name to save them under.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    file_name: String,
    png: Vec<u8>,
}

impl ExportArtifact {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn png_data(&self) -> &[u8] {
        &self.png
    }

    /// Write the PNG into `dir`, returning the full path of the new file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {} bytes to {:?}", self.png.len(), path);
        Ok(path)
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Download file name for a signature of `name`.
pub fn signature_file_name(name: &str) -> String {
    format!("{}{}", sanitize_name(name), FILE_NAME_SUFFIX)
}

/// Encode a painted surface as PNG.
///
/// `surface` is `None` when nothing has been painted yet. A blank name or a
/// missing surface yields [`ExportError::NothingToExport`].
pub fn export(
    surface: Option<&Canvas2dContext>,
    name: &str,
) -> Result<ExportArtifact, ExportError> {
    let surface = match surface {
        Some(surface) if !name.trim().is_empty() => surface,
        _ => return Err(ExportError::NothingToExport),
    };

    let png = surface.to_png()?;
    Ok(ExportArtifact {
        file_name: signature_file_name(name),
        png,
    })
}
