//! Simple time-based tween animator for smooth scrolling to a target offset

use std::time::{Duration, Instant};

/// Easing curve applied to animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Destination of the running animation.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begin (or redirect) an animation from `current` towards `target`.
    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Jump straight to the end. Returns the final offset if one was running.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.target)
    }

    /// Translate the running animation, keeping its progress. Used when the
    /// content under it is repositioned.
    pub fn shift(&mut self, delta: f32) {
        if self.active {
            self.start += delta;
            self.target += delta;
        }
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut anim = SnapAnimator::new(Duration::from_millis(100), Easing::Linear);
        anim.start(0.0, 256.0, t0);

        let mid = anim.tick(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid - 128.0).abs() < 1.0);
        assert_eq!(anim.tick(t0 + Duration::from_millis(100)), Some(256.0));
        assert!(!anim.is_active());
        assert_eq!(anim.tick(t0 + Duration::from_millis(150)), None);
    }

    #[test]
    fn shift_moves_both_ends() {
        let t0 = Instant::now();
        let mut anim = SnapAnimator::new(Duration::from_millis(100), Easing::EaseOut);
        anim.start(100.0, 200.0, t0);
        anim.shift(-50.0);

        assert_eq!(anim.target(), Some(150.0));
        assert_eq!(anim.finish(), Some(150.0));
        assert_eq!(anim.target(), None);
    }

    #[test]
    fn easing_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }
}
