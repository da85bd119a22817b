//! Text input handling: placeholder substitution and row segmentation.

/// User text with its placeholder/content flag.
pub mod input;
/// Greedy 20-character row wrapping.
pub mod segment;
