use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::font::{ApproximateMetrics, CachedMetrics, FontMetrics, OutlineFont, SystemFont};
use crate::foundation::error::KinetypeResult;

/// Process-wide current font, replaceable at any time.
///
/// Readers take one [`FontSlot::current`] snapshot per frame so a layout and its paint always see
/// the same font; a swap becomes visible on the next snapshot.
pub struct FontSlot {
    current: RwLock<Arc<dyn FontMetrics>>,
    fallback: Arc<dyn FontMetrics>,
}

impl std::fmt::Debug for FontSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSlot")
            .field("current", &self.current().name())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl FontSlot {
    /// Create a slot that starts on (and falls back to) `fallback`.
    pub fn new(fallback: Arc<dyn FontMetrics>) -> Self {
        Self {
            current: RwLock::new(fallback.clone()),
            fallback,
        }
    }

    /// Create a slot backed by the system sans-serif face, or approximate metrics when the host
    /// has no fonts installed.
    pub fn with_system_fallback() -> Self {
        let fallback: Arc<dyn FontMetrics> = match SystemFont::discover() {
            Ok(font) => Arc::new(CachedMetrics::new(Arc::new(font))),
            Err(e) => {
                tracing::warn!(error = %e, "system font unavailable, using approximate metrics");
                Arc::new(ApproximateMetrics)
            }
        };
        Self::new(fallback)
    }

    /// Snapshot of the current font.
    pub fn current(&self) -> Arc<dyn FontMetrics> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Whether a user font is installed.
    pub fn has_custom_font(&self) -> bool {
        self.current().has_custom_font()
    }

    /// Install `font` as the current font.
    pub fn replace(&self, font: Arc<dyn FontMetrics>) {
        tracing::info!(font = font.name(), "font replaced");
        match self.current.write() {
            Ok(mut guard) => *guard = font,
            Err(poisoned) => *poisoned.into_inner() = font,
        }
    }

    /// Drop any custom font and return to the fallback.
    pub fn reset(&self) {
        self.replace(self.fallback.clone());
    }

    /// Parse a font file and install it, propagating failures.
    pub fn load_path(&self, path: &Path) -> KinetypeResult<()> {
        let font = OutlineFont::from_path(path)?;
        self.replace(Arc::new(CachedMetrics::new(Arc::new(font))));
        Ok(())
    }

    /// Parse a font file and install it; on failure log and keep whatever font is current.
    ///
    /// A working custom font survives a failed upload; without one the slot stays on the
    /// fallback. Returns `true` when `path` was loaded.
    pub fn load_or_fallback(&self, path: &Path) -> bool {
        match self.load_path(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    current = self.current().name(),
                    error = %e,
                    "font load failed, keeping current font"
                );
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/slot.rs"]
mod tests;
