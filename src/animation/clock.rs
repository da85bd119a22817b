/// Whether the clock advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Time follows the host clock.
    Playing,
    /// Time is frozen.
    Paused,
}

/// Animation time in seconds, driven by explicit host timestamps in milliseconds.
///
/// While playing, time is the distance from an anchor; pausing freezes the current value and
/// resuming moves the anchor so time continues from the frozen value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    state: PlaybackState,
    anchor_ms: f64,
    frozen_secs: f64,
}

impl AnimationClock {
    /// A playing clock reading 0 at `now_ms`.
    pub fn started_at(now_ms: f64) -> Self {
        Self {
            state: PlaybackState::Playing,
            anchor_ms: now_ms,
            frozen_secs: 0.0,
        }
    }

    /// A paused clock frozen at `secs`.
    pub fn paused_at(secs: f64) -> Self {
        Self {
            state: PlaybackState::Paused,
            anchor_ms: 0.0,
            frozen_secs: secs.max(0.0),
        }
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Animation time at `now_ms`. Never negative.
    pub fn time(&self, now_ms: f64) -> f64 {
        match self.state {
            PlaybackState::Playing => ((now_ms - self.anchor_ms) / 1000.0).max(0.0),
            PlaybackState::Paused => self.frozen_secs,
        }
    }

    /// Freeze at the current time. No-op when already paused.
    pub fn pause(&mut self, now_ms: f64) {
        if self.is_playing() {
            self.frozen_secs = self.time(now_ms);
            self.state = PlaybackState::Paused;
        }
    }

    /// Continue from the frozen time. No-op when already playing.
    pub fn resume(&mut self, now_ms: f64) {
        if !self.is_playing() {
            self.anchor_ms = now_ms - self.frozen_secs * 1000.0;
            self.state = PlaybackState::Playing;
        }
    }

    /// Switch between playing and paused; returns the new state.
    pub fn toggle(&mut self, now_ms: f64) -> PlaybackState {
        match self.state {
            PlaybackState::Playing => self.pause(now_ms),
            PlaybackState::Paused => self.resume(now_ms),
        }
        tracing::debug!(state = ?self.state, time = self.time(now_ms), "playback toggled");
        self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
