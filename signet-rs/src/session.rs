//! Interactive signature editing state.
//!
//! A [`Session`] owns the style inputs, the uploaded fonts and the preview
//! surface. Every input change repaints the preview, and user-facing outcomes
//! are recorded as [`Notice`]s.

use crate::error::{ExportError, FontRegistrationError, SignetResult};
use crate::export::export;
use crate::fonts::{read_font_upload, FontOption, FontRegistry, RegisteredFont};
use crate::renderer::SignatureRenderer;
use crate::style::{
    clamp_font_size, BackgroundMode, StyleDescriptor, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_INK_COLOR,
};
use signet_canvas2d::{Canvas2dContext, CustomFont, FontConfig, LoadedFont};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const FONT_UPLOADED: &str = "Font uploaded successfully!";
pub const INVALID_FILE_TYPE: &str = "Invalid file type";
pub const FONT_UPLOAD_FAILED: &str = "Font upload failed";
pub const DOWNLOAD_SUCCESSFUL: &str = "Download successful!";
pub const CANNOT_DOWNLOAD: &str = "Cannot download";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

pub struct Session {
    name: String,
    font_family: String,
    font_size_px: u32,
    ink_color: String,
    background: BackgroundMode,
    bold: bool,
    shadow: bool,
    underline: bool,
    registry: FontRegistry,
    loaded_fonts: HashMap<String, LoadedFont>,
    renderer: SignatureRenderer,
    surface: Canvas2dContext,
    ready: bool,
    notices: Vec<Notice>,
}

impl Session {
    /// Session drawing with system fonts.
    pub fn new() -> SignetResult<Self> {
        Self::with_font_config(&FontConfig::default())
    }

    pub fn with_font_config(config: &FontConfig) -> SignetResult<Self> {
        let renderer = SignatureRenderer::new();
        let surface = Canvas2dContext::with_config(renderer.width(), renderer.height(), config)?;
        Ok(Self {
            name: String::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_px: DEFAULT_FONT_SIZE,
            ink_color: DEFAULT_INK_COLOR.to_string(),
            background: BackgroundMode::default(),
            bold: false,
            shadow: false,
            underline: false,
            registry: FontRegistry::new(),
            loaded_fonts: HashMap::new(),
            renderer,
            surface,
            ready: false,
            notices: Vec::new(),
        })
    }

    // --- Inputs ---

    pub fn set_name(&mut self, name: impl Into<String>) -> SignetResult<()> {
        self.name = name.into();
        self.refresh()
    }

    pub fn set_font_family(&mut self, family_id: impl Into<String>) -> SignetResult<()> {
        self.font_family = family_id.into();
        self.refresh()
    }

    /// Set the font size, clamped to the selectable range and step.
    pub fn set_font_size(&mut self, size: u32) -> SignetResult<()> {
        self.font_size_px = clamp_font_size(size);
        self.refresh()
    }

    pub fn set_ink_color(&mut self, color: impl Into<String>) -> SignetResult<()> {
        self.ink_color = color.into();
        self.refresh()
    }

    pub fn set_background(&mut self, background: BackgroundMode) -> SignetResult<()> {
        self.background = background;
        self.refresh()
    }

    pub fn set_bold(&mut self, bold: bool) -> SignetResult<()> {
        self.bold = bold;
        self.refresh()
    }

    pub fn set_shadow(&mut self, shadow: bool) -> SignetResult<()> {
        self.shadow = shadow;
        self.refresh()
    }

    pub fn set_underline(&mut self, underline: bool) -> SignetResult<()> {
        self.underline = underline;
        self.refresh()
    }

    /// Replace every input at once, e.g. from a preset.
    pub fn apply_style(&mut self, style: StyleDescriptor) -> SignetResult<()> {
        self.name = style.text;
        self.font_family = style.font_family;
        self.font_size_px = clamp_font_size(style.font_size_px);
        self.ink_color = style.ink_color;
        self.background = style.background;
        self.bold = style.bold;
        self.shadow = style.shadow;
        self.underline = style.underline;
        self.refresh()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    /// Descriptor for the current inputs.
    pub fn descriptor(&self) -> StyleDescriptor {
        StyleDescriptor {
            text: self.name.clone(),
            font_family: self.font_family.clone(),
            font_size_px: self.font_size_px,
            ink_color: self.ink_color.clone(),
            background: self.background.clone(),
            bold: self.bold,
            shadow: self.shadow,
            underline: self.underline,
        }
    }

    // --- Preview ---

    /// Repaint the preview from the current inputs.
    ///
    /// A blank name leaves the surface alone and marks the preview as not ready.
    pub fn refresh(&mut self) -> SignetResult<()> {
        let style = self.descriptor();
        let mut painted = false;
        self.renderer
            .render(&mut self.surface, &style, |_| painted = true)?;
        self.ready = painted;
        Ok(())
    }

    /// Whether the preview holds a paint of the current, non-blank name.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn surface(&self) -> &Canvas2dContext {
        &self.surface
    }

    // --- Fonts ---

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// Entries for the family selector.
    pub fn font_options(&self) -> Vec<FontOption> {
        self.registry.families()
    }

    /// Read and register a font file, then select it.
    pub async fn upload_font(
        &mut self,
        path: &Path,
    ) -> Result<RegisteredFont, FontRegistrationError> {
        let result = match read_font_upload(path).await {
            Ok((file_name, data)) => self.register_and_load(&file_name, data),
            Err(err) => Err(err),
        };
        self.finish_upload(result)
    }

    /// Register font bytes uploaded under `file_name`, then select the font.
    pub fn upload_font_bytes(
        &mut self,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<RegisteredFont, FontRegistrationError> {
        let result = self.register_and_load(file_name, data);
        self.finish_upload(result)
    }

    fn register_and_load(
        &mut self,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<RegisteredFont, FontRegistrationError> {
        let font = self.registry.register_font(file_name, data)?;
        let custom = CustomFont::with_family(font.data.clone(), font.family_id.clone());
        match self.surface.load_font(&custom) {
            Ok(loaded) => {
                self.loaded_fonts.insert(font.family_id.clone(), loaded);
                Ok(font)
            }
            Err(err) => {
                self.registry.remove_font(&font.family_id);
                Err(FontRegistrationError::FontLoadFailed {
                    file_name: file_name.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    fn finish_upload(
        &mut self,
        result: Result<RegisteredFont, FontRegistrationError>,
    ) -> Result<RegisteredFont, FontRegistrationError> {
        match &result {
            Ok(font) => {
                self.notices.push(Notice::info(
                    FONT_UPLOADED,
                    format!("{} is now available for use.", font.display_name),
                ));
                self.font_family = font.family_id.clone();
                if let Err(err) = self.refresh() {
                    log::warn!("Repaint after upload failed: {}", err);
                }
            }
            Err(FontRegistrationError::InvalidFontFormat(_)) => {
                self.notices.push(Notice::error(
                    INVALID_FILE_TYPE,
                    "Please upload a .ttf or .otf font file.",
                ));
            }
            Err(err) => {
                log::warn!("{}", err);
                self.notices.push(Notice::error(
                    FONT_UPLOAD_FAILED,
                    "There was an error loading the font file.",
                ));
            }
        }
        result
    }

    /// Remove an uploaded font. A selection of that font reverts to the default family.
    pub fn remove_font(&mut self, family_id: &str) -> SignetResult<Option<RegisteredFont>> {
        let Some(font) = self.registry.remove_font(family_id) else {
            return Ok(None);
        };
        if let Some(loaded) = self.loaded_fonts.remove(family_id) {
            self.surface.unload_font(&loaded);
        }
        if self.font_family == family_id {
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
        self.refresh()?;
        Ok(Some(font))
    }

    // --- Export ---

    /// Export the preview as PNG into `dir`.
    pub fn download(&mut self, dir: &Path) -> Result<PathBuf, ExportError> {
        let surface = self.ready.then_some(&self.surface);
        let result = export(surface, &self.name).and_then(|artifact| artifact.write_to(dir));
        match &result {
            Ok(_) => self.notices.push(Notice::info(
                DOWNLOAD_SUCCESSFUL,
                "Your signature has been downloaded.",
            )),
            Err(ExportError::NothingToExport) => self.notices.push(Notice::error(
                CANNOT_DOWNLOAD,
                "Please enter a name and generate a preview first.",
            )),
            Err(err) => {
                log::error!("{}", err);
                self.notices.push(Notice::error(CANNOT_DOWNLOAD, err.to_string()));
            }
        }
        result
    }

    // --- Notices ---

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notification log.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
