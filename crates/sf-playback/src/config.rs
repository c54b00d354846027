use std::time::Duration;

use crate::error::{PlaybackError, PlaybackResult};

/// Events kept by default. Enough for several minutes of busy interaction.
pub const DEFAULT_MAX_EVENTS: usize = 1024;

/// Configuration for a story viewer.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Time between progress ticks.
    pub tick_interval: Duration,
    /// Percentage points added per tick.
    pub progress_step: f32,
    /// Width fraction of each navigation zone at the left and right edges.
    pub tap_zone: f32,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            progress_step: 1.0,
            tap_zone: 1.0 / 3.0,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

impl PlaybackConfig {
    /// Set the time between progress ticks.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the percentage points added per tick.
    pub fn with_progress_step(mut self, step: f32) -> Self {
        self.progress_step = step;
        self
    }

    /// Derive the progress step so each story lasts `duration` at the current interval.
    pub fn with_story_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.progress_step =
                (100.0 * self.tick_interval.as_secs_f64() / duration.as_secs_f64()) as f32;
        }
        self
    }

    /// Set the width fraction of each navigation zone.
    pub fn with_tap_zone(mut self, fraction: f32) -> Self {
        self.tap_zone = fraction;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Number of ticks needed to fill one story.
    ///
    /// A step that divides 100 up to rounding error counts as exact, so a
    /// derived step such as `100 / 60` gives 60 ticks, not 61.
    pub fn ticks_per_story(&self) -> u32 {
        let exact = 100.0 / f64::from(self.progress_step);
        (exact - 1e-3).ceil().max(1.0) as u32
    }

    /// Progress, in percent, after `ticks` ticks of the current story.
    pub fn progress_after(&self, ticks: u32) -> f32 {
        if ticks >= self.ticks_per_story() {
            return 100.0;
        }
        (ticks as f32 * self.progress_step).min(100.0)
    }

    /// How long one story plays uninterrupted.
    pub fn story_duration(&self) -> Duration {
        self.tick_interval * self.ticks_per_story()
    }

    /// Check that the configuration can drive playback.
    pub fn validate(&self) -> PlaybackResult<()> {
        if self.tick_interval.is_zero() {
            return Err(PlaybackError::ZeroTickInterval);
        }
        if !self.progress_step.is_finite() || self.progress_step <= 0.0 || self.progress_step > 100.0
        {
            return Err(PlaybackError::InvalidProgressStep(self.progress_step));
        }
        if !self.tap_zone.is_finite() || self.tap_zone <= 0.0 || self.tap_zone > 0.5 {
            return Err(PlaybackError::InvalidTapZone(self.tap_zone));
        }
        Ok(())
    }
}
