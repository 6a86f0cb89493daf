//! Progress sweeps: time-driven interpolation of reveal progress.
//!
//! An [`Animation`] moves progress from a start value to a target over a
//! duration. The host drives time by calling `advance` with the elapsed frame
//! time; nothing here sleeps or spawns. Each animation carries an
//! [`AnimationId`] generation so the controller can tell whether a completion
//! belongs to the transition it currently owns. A superseded animation is
//! simply dropped after its current value has been read.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::time::Duration;

use crate::registry::Side;

/// Generation number of an animation. Later animations always have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// The id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Smoothstep over normalized time: slow start, slow end, monotone.
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick {
    pub progress: f64,
    pub finished: bool,
}

/// An in-flight progress sweep for one side.
#[derive(Debug, Clone)]
pub struct Animation {
    id: AnimationId,
    side: Side,
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Animation {
    #[must_use]
    pub fn new(id: AnimationId, side: Side, from: f64, to: f64, duration: Duration) -> Self {
        Self { id, side, from, to, duration, elapsed: Duration::ZERO }
    }

    #[must_use]
    pub fn id(&self) -> AnimationId {
        self.id
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Target progress.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether this sweep opens (moves toward 1) rather than closes.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.to > self.from
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Interpolated progress at the current elapsed time, without advancing.
    #[must_use]
    pub fn current(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    /// Advance by `dt` and report the new progress. A zero-length sweep finishes immediately.
    pub fn advance(&mut self, dt: Duration) -> AnimationTick {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        AnimationTick { progress: self.current(), finished: self.is_finished() }
    }
}
