//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Modus-Typen, die zwischen `app`
//! und dem Host-Viewer geteilt werden.

pub mod options;
mod rendering_mode;

pub use options::TomoSliceOptions;
pub use options::{BOUNDING_BOX_EPSILON, DEFAULT_PLANE_THICKNESS};
pub use rendering_mode::RenderingMode;
