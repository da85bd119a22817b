//! Kinetype is a deterministic kinetic-typography engine.
//!
//! Text is wrapped into rows, laid out per character with a wave displacement driven by a phase
//! value, and painted over a flat or gradient background. The same pure layout function feeds
//! the live preview and every exporter, so a frame at time `t` is identical everywhere:
//!
//! - Load a [`Scene`] (or build [`LayoutParams`] directly)
//! - Create a [`FrameComposer`] over a [`FontSlot`]
//! - Render frames, run the [`LiveLoop`], or export SVG/PNG/MP4
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Play/pause clock, frame-rate limiter and live loop.
pub mod animation;
/// Encoding sinks.
pub mod encode;
/// SVG, PNG and video exporters.
pub mod export;
/// Font metrics providers.
pub mod font;
/// Recent text and font bookkeeping.
pub mod history;
/// Character layout.
pub mod layout;
/// CPU rasterization.
pub mod render;
/// Scene files.
pub mod scene;
/// Frame composition.
pub mod session;
/// Text input and segmentation.
pub mod text;

pub use crate::foundation::core::{BezPath, Canvas, Fps, FrameIndex, FrameRange, Point};
pub use crate::foundation::error::{KinetypeError, KinetypeResult};

pub use crate::animation::{
    AnimationClock, FrameScheduler, LiveLoop, LoopControl, PacedHost, PlaybackState, RepaintHost,
    run_live,
};
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig};
pub use crate::export::{
    VideoSettings, VideoStats, ensure_exportable, export_png, export_svg, export_video,
    render_svg,
};
pub use crate::font::{
    ApproximateMetrics, CachedMetrics, FontMetrics, FontSlot, HostGlyph, HostRun, OutlineFont,
    SystemFont,
};
pub use crate::history::{RecentFonts, TextHistory};
pub use crate::layout::{Alignment, LayoutParams, Placement, compute_layout, compute_text_layout};
pub use crate::render::background::{Background, paint_background};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::color::ColorDef;
pub use crate::render::gradient::GradientShader;
pub use crate::render::surface::Surface;
pub use crate::render::text::paint_placements;
pub use crate::scene::Scene;
pub use crate::session::FrameComposer;
pub use crate::text::input::TextInput;
pub use crate::text::segment::{Row, segment};
