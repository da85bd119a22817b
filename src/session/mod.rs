//! Frame composition shared by the live preview and every exporter.

/// Background + layout + text painting for one frame.
pub mod composer;

pub use composer::FrameComposer;
