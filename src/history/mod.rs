//! Recent-text and recent-font bookkeeping. Storage is left to the embedding application; both
//! types serialize with `serde`.

/// Recently used font names.
pub mod fonts;
/// Recently typed titles.
pub mod text;

pub use fonts::{FontEntry, RecentFonts};
pub use text::{HistoryEntry, TextHistory};
