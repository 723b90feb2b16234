//! Time-based tween that slides the track toward its resting offset

use std::time::{Duration, Instant};

/// Quadratic ease-in-out.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

#[derive(Debug, Clone)]
pub struct SlideAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(500),
        }
    }
}

impl SlideAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, duration: Duration) {
        self.start = current;
        self.target = target;
        self.started_at = Instant::now();
        self.duration = duration;
        // Nothing to tween, the next tick would just land on the target
        self.active = (target - current).abs() > f32::EPSILON;
    }

    /// Returns Some(next_offset) while animating, None when finished/inactive
    pub fn tick(&mut self) -> Option<f32> {
        self.sample(Instant::now())
    }

    fn sample(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = ease_in_out(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
