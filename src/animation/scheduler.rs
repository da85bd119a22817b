/// Cooperative frame-rate limiter with a once-per-second FPS measurement.
///
/// A tick renders only when at least `1000 / target_fps` ms passed since the last rendered tick.
/// Skipped ticks cost nothing; the caller keeps polling.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScheduler {
    target_fps: f64,
    last_render_ms: Option<f64>,
    window_start_ms: Option<f64>,
    frames_in_window: u32,
    measured_fps: Option<f64>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET_FPS)
    }
}

impl FrameScheduler {
    /// Lowest accepted target.
    pub const MIN_TARGET_FPS: f64 = 1.0;
    /// Highest accepted target.
    pub const MAX_TARGET_FPS: f64 = 120.0;
    /// Target used when none is configured.
    pub const DEFAULT_TARGET_FPS: f64 = 30.0;

    const MEASURE_WINDOW_MS: f64 = 1000.0;
    // Host timestamps this close to the deadline count as due.
    const DEADLINE_SLACK_MS: f64 = 1e-6;

    /// Scheduler for `target_fps`, clamped to `[MIN_TARGET_FPS, MAX_TARGET_FPS]`.
    pub fn new(target_fps: f64) -> Self {
        Self {
            target_fps: clamp_fps(target_fps),
            last_render_ms: None,
            window_start_ms: None,
            frames_in_window: 0,
            measured_fps: None,
        }
    }

    /// Clamped target frame rate.
    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    /// Change the target; takes effect on the next tick.
    pub fn set_target_fps(&mut self, fps: f64) {
        self.target_fps = clamp_fps(fps);
        tracing::debug!(target_fps = self.target_fps, "frame rate target changed");
    }

    /// Minimum spacing between rendered frames.
    pub fn interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Rendered frames per second over the last complete one-second window.
    pub fn measured_fps(&self) -> Option<f64> {
        self.measured_fps
    }

    /// Decide whether the tick at `now_ms` renders. The first tick always does.
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        let due = match self.last_render_ms {
            None => true,
            Some(last) => now_ms - last + Self::DEADLINE_SLACK_MS >= self.interval_ms(),
        };
        if due {
            self.last_render_ms = Some(now_ms);
            self.count_frame(now_ms);
        }
        due
    }

    /// Forget the last rendered frame so the next tick renders immediately.
    pub fn reset(&mut self) {
        self.last_render_ms = None;
        self.window_start_ms = None;
        self.frames_in_window = 0;
    }

    fn count_frame(&mut self, now_ms: f64) {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames_in_window += 1;
        let elapsed = now_ms - start;
        if elapsed >= Self::MEASURE_WINDOW_MS {
            self.measured_fps = Some(f64::from(self.frames_in_window) * 1000.0 / elapsed);
            self.window_start_ms = Some(now_ms);
            self.frames_in_window = 0;
        }
    }
}

fn clamp_fps(fps: f64) -> f64 {
    if fps.is_finite() {
        fps.clamp(FrameScheduler::MIN_TARGET_FPS, FrameScheduler::MAX_TARGET_FPS)
    } else {
        FrameScheduler::DEFAULT_TARGET_FPS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
