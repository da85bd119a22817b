//! Font metrics providers.
//!
//! The layout engine only sees [`FontMetrics`]: advance widths, ascent/descent and optional glyph
//! outlines for a character at a size. Custom fonts come from [`OutlineFont`]; without one the
//! engine measures through the host text stack ([`SystemFont`]) or, when no system face exists,
//! through [`ApproximateMetrics`].

use crate::foundation::core::BezPath;

/// Advance-width memoization keyed by font identity, character and size.
pub mod cache;
/// Parsed custom font with vector outlines.
pub mod outline;
/// Atomically swappable current font.
pub mod slot;
/// Host text measurement and painting fallbacks.
pub mod system;

#[cfg(test)]
#[path = "../../tests/unit/support/box_font.rs"]
pub(crate) mod box_font;

pub use cache::CachedMetrics;
pub use outline::OutlineFont;
pub use slot::FontSlot;
pub use system::{ApproximateMetrics, SystemFont};

/// One shaped glyph of a host text run, positioned relative to the pen origin on the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostGlyph {
    /// Glyph id in the run's font.
    pub id: u32,
    /// Horizontal offset from the pen origin.
    pub x: f32,
    /// Vertical offset from the baseline (y grows downward).
    pub y: f32,
}

/// Glyphs for painting a character through the host text primitive.
#[derive(Clone)]
pub struct HostRun {
    /// Font the glyph ids refer to.
    pub font: vello_cpu::peniko::FontData,
    /// Shaped glyphs.
    pub glyphs: Vec<HostGlyph>,
}

impl std::fmt::Debug for HostRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRun")
            .field("glyphs", &self.glyphs)
            .finish_non_exhaustive()
    }
}

/// Read-only font metrics as seen by layout and rendering.
///
/// Implementations must behave as pure functions of `(character, font_size)`: the same query
/// always returns the same answer for the lifetime of the provider.
pub trait FontMetrics: Send + Sync {
    /// Stable identity of the backing font, used as a cache key.
    fn font_id(&self) -> u64;

    /// Human-readable font name.
    fn name(&self) -> &str;

    /// Whether this provider is a user-loaded font with vector outlines.
    fn has_custom_font(&self) -> bool;

    /// Horizontal advance of `ch` at `font_size` pixels.
    fn advance_width(&self, ch: char, font_size: f64) -> f64;

    /// Distance from baseline to the top of the font's em box at `font_size`.
    fn ascent(&self, font_size: f64) -> f64;

    /// Positive distance from baseline to the bottom of the em box at `font_size`.
    fn descent(&self, font_size: f64) -> f64;

    /// Absolute glyph outline of `ch` with its origin on the baseline at `(x, y)`.
    ///
    /// `None` means the provider has no vector outlines and callers should fall back to
    /// [`FontMetrics::host_run`].
    fn outline(&self, ch: char, x: f64, y: f64, font_size: f64) -> Option<BezPath>;

    /// Shaped glyphs for painting `ch` through the host text primitive.
    fn host_run(&self, _ch: char, _font_size: f64) -> Option<HostRun> {
        None
    }
}
