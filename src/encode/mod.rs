//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are fed by the video exporter.

/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
/// Frame sink trait and the in-memory sink.
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
