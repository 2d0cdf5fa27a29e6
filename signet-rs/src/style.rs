//! Style descriptor consumed by the signature renderer.

use crate::error::SignetResult;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Width of the signature surface in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Height of the signature surface in pixels.
pub const CANVAS_HEIGHT: u32 = 300;

pub const MIN_FONT_SIZE: u32 = 30;
pub const MAX_FONT_SIZE: u32 = 150;
pub const FONT_SIZE_STEP: u32 = 5;

pub const DEFAULT_FONT_FAMILY: &str = "Dancing Script";
pub const DEFAULT_FONT_SIZE: u32 = 80;
pub const DEFAULT_INK_COLOR: &str = "#000000";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Script families offered before any upload. Display name and family id are the same.
pub const BUILTIN_FAMILIES: [&str; 5] = [
    "Dancing Script",
    "Great Vibes",
    "Alex Brush",
    "Allura",
    "Parisienne",
];

/// Preset ink colors, in selector order.
pub const PALETTE: [&str; 16] = [
    "#000000", "#333333", "#666666", "#999999", "#1e40af", "#3b82f6", "#06b6d4", "#10b981",
    "#f59e0b", "#ef4444", "#ec4899", "#8b5cf6", "#6366f1", "#84cc16", "#f97316", "#dc2626",
];

/// How the surface is prepared before any text is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundMode {
    /// Fill the whole surface with a CSS color.
    Opaque(String),
    /// Clear every pixel to transparent black.
    Transparent,
}

impl Default for BackgroundMode {
    fn default() -> Self {
        BackgroundMode::Opaque(DEFAULT_BACKGROUND_COLOR.to_string())
    }
}

impl FromStr for BackgroundMode {
    type Err = Infallible;

    /// `transparent` selects [`BackgroundMode::Transparent`]; anything else is
    /// taken as the opaque fill color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            Ok(BackgroundMode::Transparent)
        } else {
            Ok(BackgroundMode::Opaque(s.trim().to_string()))
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundMode::Opaque(color) => write!(f, "{}", color),
            BackgroundMode::Transparent => write!(f, "transparent"),
        }
    }
}

/// Everything needed to paint one signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDescriptor {
    pub text: String,
    pub font_family: String,
    pub font_size_px: u32,
    pub ink_color: String,
    pub background: BackgroundMode,
    pub bold: bool,
    pub shadow: bool,
    pub underline: bool,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_px: DEFAULT_FONT_SIZE,
            ink_color: DEFAULT_INK_COLOR.to_string(),
            background: BackgroundMode::default(),
            bold: false,
            shadow: false,
            underline: false,
        }
    }
}

impl StyleDescriptor {
    /// Load a preset from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SignetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether there is anything to paint.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// CSS font shorthand for the main text pass.
    ///
    /// The family is quoted, with `"` and `\` escaped, so any registered
    /// identifier survives the round trip through the font parser.
    pub fn font_string(&self) -> String {
        let weight = if self.bold { "bold" } else { "normal" };
        let family = self.font_family.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{} {}px \"{}\"", weight, self.font_size_px, family)
    }
}

/// Clamp a requested size to the selectable range and snap it to the slider step.
pub fn clamp_font_size(size: u32) -> u32 {
    let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    (size + FONT_SIZE_STEP / 2) / FONT_SIZE_STEP * FONT_SIZE_STEP
}
