use crate::encode::sink::{FrameSink, SinkConfig};
use crate::export::ensure_exportable;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::session::FrameComposer;

/// Frame rate and length of a video export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoSettings {
    /// Output frame rate.
    pub fps: Fps,
    /// Length in seconds.
    pub duration_secs: f64,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            fps: Fps {
                num: Self::DEFAULT_FPS,
                den: 1,
            },
            duration_secs: Self::DEFAULT_DURATION_SECS,
        }
    }
}

impl VideoSettings {
    /// Default export frame rate.
    pub const DEFAULT_FPS: u32 = 60;
    /// Default export length in seconds.
    pub const DEFAULT_DURATION_SECS: f64 = 15.0;

    /// Validated settings for `fps` frames per second over `duration_secs`.
    pub fn new(fps: u32, duration_secs: f64) -> KinetypeResult<Self> {
        let fps = Fps::new(fps, 1)?;
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(KinetypeError::validation(
                "export duration_secs must be finite and > 0",
            ));
        }
        Ok(Self { fps, duration_secs })
    }

    /// `[0, floor(fps * duration))`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.fps.secs_to_frames_floor(self.duration_secs)),
        }
    }

    /// Synthetic animation time of frame `idx`: `idx / fps`.
    pub fn time_of(&self, idx: FrameIndex) -> f64 {
        idx.0 as f64 * f64::from(self.fps.den) / f64::from(self.fps.num)
    }
}

/// Result of a finished video export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoStats {
    /// Frames pushed to the sink.
    pub frames: u64,
}

/// Render every frame of `settings` at 1920x1080 into `sink`.
///
/// Frame `i` is drawn at time `i / fps`, never wall-clock time. The thread yields between
/// frames. On any failure the sink is aborted so no partial artifact remains.
#[tracing::instrument(skip(composer, sink))]
pub fn export_video(
    composer: &FrameComposer,
    settings: VideoSettings,
    sink: &mut dyn FrameSink,
) -> KinetypeResult<VideoStats> {
    ensure_exportable(composer.input())?;
    let range = settings.frame_range();
    if range.is_empty() {
        return Err(KinetypeError::validation(
            "export duration is shorter than one frame",
        ));
    }

    let composer = composer.clone().with_canvas(Canvas::EXPORT);
    let canvas = composer.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: settings.fps,
    })?;

    let pushed = push_frames(&composer, settings, range, sink).and_then(|frames| {
        sink.end()?;
        Ok(frames)
    });
    match pushed {
        Ok(frames) => {
            tracing::info!(frames, "video export finished");
            Ok(VideoStats { frames })
        }
        Err(e) => {
            tracing::warn!(error = %e, "video export failed, discarding output");
            sink.abort();
            Err(e)
        }
    }
}

fn push_frames(
    composer: &FrameComposer,
    settings: VideoSettings,
    range: FrameRange,
    sink: &mut dyn FrameSink,
) -> KinetypeResult<u64> {
    let mut frames = 0;
    for idx in range.iter() {
        let frame = composer.render_at(settings.time_of(idx))?;
        sink.push_frame(idx, &frame)?;
        frames += 1;
        if idx.0 % 60 == 0 {
            tracing::debug!(frame = idx.0, total = range.len_frames(), "video progress");
        }
        std::thread::yield_now();
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/export/video.rs"]
mod tests;
