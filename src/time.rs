//! Frame timing for the interactive simulation.
//!
//! The clock hands out the delta used to integrate seed motion. Deltas are
//! capped at [`FrameClock::max_step`] so that a stalled frame (window drag,
//! debugger break) does not fling every seed into a wall.

use std::time::{Duration, Instant};

/// Longest step handed to the physics by default, in seconds.
const DEFAULT_MAX_STEP: f32 = 0.1;

/// Per-frame clock with pause support and an FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    /// Frame count and instant of the last FPS sample.
    fps_sample: (u64, Instant),
    fps_interval: Duration,
    paused: bool,
    fixed_delta: Option<f32>,
    max_step: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_sample: (0, now),
            fps_interval: Duration::from_millis(500),
            paused: false,
            fixed_delta: None,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    /// Use the same delta every frame regardless of wall time.
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.fixed_delta = Some(delta);
        self
    }

    /// Cap on the delta returned by [`FrameClock::tick`].
    pub fn with_max_step(mut self, max_step: f32) -> Self {
        self.max_step = max_step.max(0.0);
        self
    }

    /// Advance one frame and return the simulation delta in seconds.
    ///
    /// Returns `0.0` while paused. The frame counter and FPS keep running
    /// so the window title stays live.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let (sample_frame, sample_time) = self.fps_sample;
        let since = now.duration_since(sample_time);
        if since >= self.fps_interval {
            self.fps = (self.frame_count - sample_frame) as f32 / since.as_secs_f32();
            self.fps_sample = (self.frame_count, now);
        }

        self.delta_secs = if self.paused {
            0.0
        } else {
            self.fixed_delta.unwrap_or(raw).min(self.max_step)
        };
        self.delta_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_tick_measures_time() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();

        assert!(dt > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_delta_is_capped() {
        let mut clock = FrameClock::new().with_max_step(0.005);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(clock.tick(), 0.005);
    }

    #[test]
    fn test_paused_clock_yields_zero() {
        let mut clock = FrameClock::new();
        clock.toggle_pause();
        thread::sleep(Duration::from_millis(5));

        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.frame(), 1);

        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fixed_delta() {
        let mut clock = FrameClock::new().with_fixed_delta(1.0 / 60.0);
        thread::sleep(Duration::from_millis(50));
        let dt = clock.tick();
        assert!((dt - 1.0 / 60.0).abs() < 0.0001);
    }
}
