#![doc = include_str!("../README.md")]

pub mod error;
pub mod export;
pub mod fonts;
pub mod renderer;
pub mod session;
pub mod style;

pub use error::{ExportError, FontRegistrationError, SignetError, SignetResult};
pub use export::{export, ExportArtifact};
pub use fonts::{FontOption, FontRegistry, RegisteredFont};
pub use renderer::SignatureRenderer;
pub use session::{Notice, Session, Severity};
pub use signet_canvas2d;
pub use style::{BackgroundMode, StyleDescriptor};
