/// Text shown when the user has not typed anything yet.
pub const PLACEHOLDER_TEXT: &str = "Start typing your title";

/// Text to lay out together with its content flag.
///
/// `has_content == false` marks placeholder text: it renders muted and is refused by every
/// exporter.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextInput {
    /// Text fed to the segmenter.
    pub text: String,
    /// Whether `text` is real user content.
    pub has_content: bool,
}

impl TextInput {
    /// Wrap raw user text, substituting the placeholder when it is blank.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::placeholder()
        } else {
            Self {
                text: raw.to_owned(),
                has_content: true,
            }
        }
    }

    /// The placeholder input.
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER_TEXT.to_owned(),
            has_content: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/input.rs"]
mod tests;
