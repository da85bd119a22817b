//! SVG, PNG and MP4 export at the fixed 1920x1080 export resolution.
//!
//! Every exporter draws through [`crate::session::FrameComposer`] at a synthetic time, so an
//! exported frame matches the live preview at the same time. Placeholder text is refused before
//! any work starts, and artifacts appear at their destination only once complete.

use std::path::Path;

use crate::encode::ffmpeg::{ensure_parent_dir, partial_path};
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::text::input::TextInput;

/// Single-frame PNG export.
pub mod png;
/// Vector SVG export.
pub mod svg;
/// Frame-accurate video export.
pub mod video;

pub use png::{encode_png, export_png, write_png};
pub use svg::{export_svg, render_svg};
pub use video::{VideoSettings, VideoStats, export_video};

/// Refuse placeholder text.
pub fn ensure_exportable(input: &TextInput) -> KinetypeResult<()> {
    if input.has_content {
        Ok(())
    } else {
        Err(KinetypeError::validation(
            "placeholder text cannot be exported; enter a title first",
        ))
    }
}

/// Write `bytes` to a `.partial` sibling of `path`, then rename it into place.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> KinetypeResult<()> {
    use anyhow::Context as _;

    ensure_parent_dir(path)?;
    let tmp = partial_path(path);
    let written = std::fs::write(&tmp, bytes)
        .with_context(|| format!("write '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("move '{}' into place", path.display()))
        });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(KinetypeError::export(format!("{e:#}")));
    }
    tracing::info!(out = %path.display(), bytes = bytes.len(), "export written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/mod.rs"]
mod tests;
