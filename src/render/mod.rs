//! CPU rasterization of backgrounds and character placements.

/// Flat-colour and mesh-gradient backgrounds.
pub mod background;
/// Rendered frame buffers.
pub mod backend;
/// Colour parsing.
pub mod color;
/// Noise-driven four-point gradient shader.
pub mod gradient;
/// Drawing surface over `vello_cpu`.
pub mod surface;
/// Placement painter.
pub mod text;
