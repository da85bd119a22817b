//! Play/pause clock, frame-rate limiter and the cooperative live loop.

/// Play/pause animation clock.
pub mod clock;
/// Live preview loop and repaint hosts.
pub mod live;
/// Cooperative frame-rate limiter.
pub mod scheduler;

pub use clock::{AnimationClock, PlaybackState};
pub use live::{LiveLoop, LoopControl, PacedHost, RepaintHost, run_live};
pub use scheduler::FrameScheduler;
