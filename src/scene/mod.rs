//! JSON scene files: text, font, layout, colours, background, playback and export settings.

/// Validated scene wrapper.
pub mod document;
pub(crate) mod model;

pub use document::Scene;
