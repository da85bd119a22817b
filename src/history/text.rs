use serde::{Deserialize, Serialize};

/// One remembered title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The title, trimmed.
    pub text: String,
    /// Milliseconds since the Unix epoch when it was recorded.
    pub timestamp_ms: u64,
}

/// Newest-first list of recent titles without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextHistory {
    entries: Vec<HistoryEntry>,
}

impl TextHistory {
    /// Most entries kept.
    pub const CAPACITY: usize = 20;
    /// Shorter titles are not recorded.
    pub const MIN_CHARS: usize = 2;

    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` as the newest entry.
    ///
    /// Returns `false` when the text is too short or already the newest entry. An older copy of
    /// the same text moves to the front; the oldest entry drops off past [`Self::CAPACITY`].
    pub fn record(&mut self, text: &str, timestamp_ms: u64) -> bool {
        let text = text.trim();
        if text.chars().count() < Self::MIN_CHARS {
            return false;
        }
        if self.entries.first().is_some_and(|e| e.text == text) {
            return false;
        }
        self.entries.retain(|e| e.text != text);
        self.entries.insert(
            0,
            HistoryEntry {
                text: text.to_owned(),
                timestamp_ms,
            },
        );
        self.entries.truncate(Self::CAPACITY);
        true
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Newest entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/text.rs"]
mod tests;
