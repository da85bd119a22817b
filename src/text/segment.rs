/// Maximum number of characters a wrapped row may accumulate.
///
/// Downstream font-size scaling keys off this value, so it is fixed rather than configurable.
pub const ROW_WRAP_CHARS: usize = 20;

/// One wrapped line of text produced by [`segment`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Row(String);

impl Row {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Row text as written by the user (no case folding).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (Unicode scalar values) in the row.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Return `true` when the row holds no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the row's characters in order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split raw text into wrapped rows.
///
/// Newlines are hard breaks. Within a paragraph, whitespace-delimited words are accumulated while
/// the joined row stays within [`ROW_WRAP_CHARS`]; a longer word flushes the pending row and is
/// emitted on its own. Blank paragraphs produce no rows.
pub fn segment(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if word_len > ROW_WRAP_CHARS {
                if !current.is_empty() {
                    rows.push(Row::new(std::mem::take(&mut current)));
                    current_len = 0;
                }
                rows.push(Row::new(word));
                continue;
            }

            let joined_len = if current.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if joined_len <= ROW_WRAP_CHARS {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = joined_len;
            } else {
                rows.push(Row::new(std::mem::replace(&mut current, word.to_owned())));
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            rows.push(Row::new(current));
        }
    }

    rows
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
