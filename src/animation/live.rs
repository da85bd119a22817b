use std::time::{Duration, Instant};

use crate::animation::clock::AnimationClock;
use crate::animation::scheduler::FrameScheduler;
use crate::foundation::error::KinetypeResult;
use crate::render::backend::FrameRGBA;
use crate::session::FrameComposer;

/// Outcome of one [`LiveLoop::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopControl {
    /// Draw the frame for this animation time.
    Render {
        /// Animation time in seconds.
        time_secs: f64,
    },
    /// Too early for another frame; poll again on the next repaint.
    Skip,
    /// Playback is paused; stop requesting repaints.
    Stop,
}

/// Pure scheduling state of the live preview.
#[derive(Clone, Debug)]
pub struct LiveLoop {
    clock: AnimationClock,
    scheduler: FrameScheduler,
}

impl LiveLoop {
    /// Loop over `clock`, limited by `scheduler`.
    pub fn new(clock: AnimationClock, scheduler: FrameScheduler) -> Self {
        Self { clock, scheduler }
    }

    /// Decide what the repaint at `now_ms` does.
    pub fn tick(&mut self, now_ms: f64) -> LoopControl {
        if !self.clock.is_playing() {
            return LoopControl::Stop;
        }
        if self.scheduler.should_render(now_ms) {
            LoopControl::Render {
                time_secs: self.clock.time(now_ms),
            }
        } else {
            LoopControl::Skip
        }
    }

    /// Pause or resume. A resumed loop renders on its first tick.
    pub fn toggle(&mut self, now_ms: f64) {
        if !self.clock.is_playing() {
            self.scheduler.reset();
        }
        self.clock.toggle(now_ms);
    }

    /// The animation clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// The frame-rate limiter.
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}

/// Host display: hands out repaint timestamps and shows finished frames.
pub trait RepaintHost {
    /// Wait for the next repaint opportunity and return its timestamp in ms, or `None` when the
    /// host is shutting down.
    fn next_repaint(&mut self) -> Option<f64>;

    /// Show a finished frame.
    fn present(&mut self, frame: &FrameRGBA) -> KinetypeResult<()>;
}

/// Counters from one [`run_live`] session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiveStats {
    /// Frames drawn and presented.
    pub rendered: u64,
    /// Repaints skipped by the frame-rate limiter.
    pub skipped: u64,
    /// Last measured frame rate.
    pub measured_fps: Option<f64>,
}

/// Drive `host` until it stops handing out repaints or playback pauses.
///
/// Each frame is fully composed and presented before the next repaint is requested.
pub fn run_live(
    live: &mut LiveLoop,
    composer: &FrameComposer,
    host: &mut dyn RepaintHost,
) -> KinetypeResult<LiveStats> {
    let mut stats = LiveStats::default();
    while let Some(now_ms) = host.next_repaint() {
        match live.tick(now_ms) {
            LoopControl::Render { time_secs } => {
                let frame = composer.render_at(time_secs)?;
                host.present(&frame)?;
                stats.rendered += 1;
            }
            LoopControl::Skip => stats.skipped += 1,
            LoopControl::Stop => break,
        }
        if live.scheduler().measured_fps() != stats.measured_fps {
            stats.measured_fps = live.scheduler().measured_fps();
            if let Some(fps) = stats.measured_fps {
                tracing::debug!(fps, "live frame rate");
            }
        }
    }
    tracing::info!(
        rendered = stats.rendered,
        skipped = stats.skipped,
        "live preview finished"
    );
    Ok(stats)
}

/// Wall-clock host repainting at about 60 Hz until a deadline; keeps the last frame.
#[derive(Debug)]
pub struct PacedHost {
    start: Instant,
    run_for: Duration,
    period: Duration,
    next: Instant,
    last_frame: Option<FrameRGBA>,
    presented: u64,
}

impl PacedHost {
    /// Repaint period of the simulated display.
    pub const PERIOD: Duration = Duration::from_micros(16_667);

    /// Host that hands out repaints for `run_for`.
    pub fn new(run_for: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            run_for,
            period: Self::PERIOD,
            next: start,
            last_frame: None,
            presented: 0,
        }
    }

    /// Last presented frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Number of presented frames.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl RepaintHost for PacedHost {
    fn next_repaint(&mut self) -> Option<f64> {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.start);
        if elapsed >= self.run_for {
            return None;
        }
        self.next = now + self.period;
        Some(elapsed.as_secs_f64() * 1000.0)
    }

    fn present(&mut self, frame: &FrameRGBA) -> KinetypeResult<()> {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/live.rs"]
mod tests;
