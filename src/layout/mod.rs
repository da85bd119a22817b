//! Deterministic character layout.
//!
//! [`compute_text_layout`] is the single entry point used by the live loop and every exporter:
//! for fixed text, parameters and font it always returns the same placements.

/// Row and character placement.
pub mod engine;
/// Layout parameter snapshot.
pub mod params;

pub use engine::{
    Placement, center_intensity, compute_layout, compute_text_layout, font_size_for_row,
};
pub use params::{Alignment, LayoutParams};
