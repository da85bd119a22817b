use std::io::Cursor;
use std::path::Path;

use crate::export::{ensure_exportable, write_atomically};
use crate::foundation::core::Canvas;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::render::backend::FrameRGBA;
use crate::session::FrameComposer;

/// Encode a frame as PNG (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> KinetypeResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .ok_or_else(|| KinetypeError::export("frame buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| KinetypeError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Render the frame at `time` seconds at 1920x1080 and write it to `out` as PNG.
#[tracing::instrument(skip(composer), fields(out = %out.display()))]
pub fn export_png(composer: &FrameComposer, time: f64, out: &Path) -> KinetypeResult<()> {
    ensure_exportable(composer.input())?;
    let frame = composer.clone().with_canvas(Canvas::EXPORT).render_at(time)?;
    write_png(&frame, out)
}

/// Encode an already rendered frame and write it to `out` atomically.
pub fn write_png(frame: &FrameRGBA, out: &Path) -> KinetypeResult<()> {
    let bytes = encode_png(frame)?;
    write_atomically(out, &bytes)
}
