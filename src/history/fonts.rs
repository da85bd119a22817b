use serde::{Deserialize, Serialize};

/// One remembered font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    /// File or family name the font was loaded under.
    pub name: String,
    /// Milliseconds since the Unix epoch when it was stored.
    pub timestamp_ms: u64,
}

/// Bounded set of recently loaded fonts plus the last one used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFonts {
    entries: Vec<FontEntry>,
    last_used: Option<String>,
}

impl RecentFonts {
    /// Most fonts kept.
    pub const CAPACITY: usize = 10;

    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `name` and mark it last used.
    ///
    /// A known name only gets a fresh timestamp. A new name evicts the entries with the oldest
    /// timestamps until it fits; the evicted names are returned.
    pub fn store(&mut self, name: &str, timestamp_ms: u64) -> Vec<String> {
        let mut evicted = Vec::new();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.timestamp_ms = timestamp_ms;
        } else {
            while self.entries.len() >= Self::CAPACITY {
                let Some(oldest) = self
                    .entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, e)| e.timestamp_ms)
                    .map(|(i, _)| i)
                else {
                    break;
                };
                evicted.push(self.entries.remove(oldest).name);
            }
            self.entries.push(FontEntry {
                name: name.to_owned(),
                timestamp_ms,
            });
        }
        self.last_used = Some(name.to_owned());
        evicted
    }

    /// Mark a known font as last used. Returns `false` for unknown names.
    pub fn select(&mut self, name: &str) -> bool {
        if self.contains(name) {
            self.last_used = Some(name.to_owned());
            true
        } else {
            false
        }
    }

    /// Drop `name`; clears the last-used mark when it pointed at it.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        if self.last_used.as_deref() == Some(name) {
            self.last_used = None;
        }
        self.entries.len() != before
    }

    /// Whether `name` is remembered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Last used font name.
    pub fn last_used(&self) -> Option<&str> {
        self.last_used.as_deref()
    }

    /// Entries sorted by name.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of fonts remembered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/fonts.rs"]
mod tests;
