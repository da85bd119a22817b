use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::font::{FontMetrics, HostRun};
use crate::foundation::core::BezPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct AdvanceKey {
    font: u64,
    ch: char,
    size_bits: u64,
}

/// Memoizes advance widths of an inner provider.
///
/// This is the only state layout is allowed to carry between calls; it never changes an answer,
/// only how fast it is produced.
pub struct CachedMetrics {
    inner: Arc<dyn FontMetrics>,
    advances: Mutex<HashMap<AdvanceKey, f64>>,
}

impl std::fmt::Debug for CachedMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedMetrics")
            .field("font", &self.inner.name())
            .field("entries", &self.len())
            .finish()
    }
}

impl CachedMetrics {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: Arc<dyn FontMetrics>) -> Self {
        Self {
            inner,
            advances: Mutex::new(HashMap::new()),
        }
    }

    /// Number of memoized advances.
    pub fn len(&self) -> usize {
        self.advances.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Return `true` when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FontMetrics for CachedMetrics {
    fn font_id(&self) -> u64 {
        self.inner.font_id()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn has_custom_font(&self) -> bool {
        self.inner.has_custom_font()
    }

    fn advance_width(&self, ch: char, font_size: f64) -> f64 {
        let key = AdvanceKey {
            font: self.inner.font_id(),
            ch,
            size_bits: font_size.to_bits(),
        };
        if let Ok(map) = self.advances.lock()
            && let Some(&w) = map.get(&key)
        {
            return w;
        }
        let w = self.inner.advance_width(ch, font_size);
        if let Ok(mut map) = self.advances.lock() {
            map.insert(key, w);
        }
        w
    }

    fn ascent(&self, font_size: f64) -> f64 {
        self.inner.ascent(font_size)
    }

    fn descent(&self, font_size: f64) -> f64 {
        self.inner.descent(font_size)
    }

    fn outline(&self, ch: char, x: f64, y: f64, font_size: f64) -> Option<BezPath> {
        self.inner.outline(ch, x, y, font_size)
    }

    fn host_run(&self, ch: char, font_size: f64) -> Option<HostRun> {
        self.inner.host_run(ch, font_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/cache.rs"]
mod tests;
