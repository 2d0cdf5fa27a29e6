use signet_canvas2d::Canvas2dError;
use std::path::PathBuf;

/// Errors raised while registering an uploaded font.
///
/// None of these leave the registry or the surface modified.
#[derive(Debug, thiserror::Error)]
pub enum FontRegistrationError {
    #[error("Invalid font format: `{0}` is not a .ttf or .otf file")]
    InvalidFontFormat(String),

    #[error("Failed to load font `{file_name}`: {reason}")]
    FontLoadFailed { file_name: String, reason: String },

    #[error("Failed to read font file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while exporting the painted surface.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export: enter a name and paint a preview first")]
    NothingToExport,

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] Canvas2dError),

    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SignetError {
    #[error(transparent)]
    FontRegistration(#[from] FontRegistrationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Canvas error: {0}")]
    Canvas(#[from] Canvas2dError),

    #[error("Invalid style preset: {0}")]
    Preset(#[from] serde_json::Error),
}

pub type SignetResult<T> = Result<T, SignetError>;
