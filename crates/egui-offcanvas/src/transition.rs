use crate::easing::Easing;
use egui::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timing {
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
}

impl Timing {
    pub fn from_millis(duration: u64, delay: u64, easing: Easing) -> Self {
        Self {
            duration: duration as f64 / 1000.0,
            delay: delay as f64 / 1000.0,
            easing,
        }
    }

    /// Time from the start of a transition until it settles.
    pub fn total(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Vec2,
    to: Vec2,
    timing: Timing,
    // stamped by the first `advance` after the transition was requested
    started_at: Option<f64>,
}

impl Transition {
    fn sample(&self, now: f64) -> Vec2 {
        let Some(started_at) = self.started_at else {
            return self.from;
        };

        let elapsed = now - started_at - self.timing.delay;
        if elapsed <= 0.0 {
            return self.from;
        }
        if self.timing.duration <= 0.0 || elapsed >= self.timing.duration {
            return self.to;
        }

        let progress = self.timing.easing.apply((elapsed / self.timing.duration) as f32);
        self.from + (self.to - self.from) * progress
    }
}

/// The transform of one element: a resting translation plus at most one
/// running transition towards a new translation.
#[derive(Debug, Clone, Default)]
pub struct Track {
    settled: Vec2,
    transition: Option<Transition>,
    now: f64,
}

impl Track {
    /// Starts a transition from wherever the element currently is. A running
    /// transition is replaced.
    pub fn translate_to(&mut self, to: Vec2, timing: Timing) {
        let from = self.translation();
        self.transition = Some(Transition {
            from,
            to,
            timing,
            started_at: None,
        });
    }

    /// Translation at the last observed time.
    pub fn translation(&self) -> Vec2 {
        match &self.transition {
            Some(transition) => transition.sample(self.now),
            None => self.settled,
        }
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    /// Moves the clock forward; returns whether a transition is still running.
    pub fn advance(&mut self, now: f64) -> bool {
        self.now = now;
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        let started_at = *transition.started_at.get_or_insert(now);
        if now - started_at >= transition.timing.total() {
            self.settled = transition.to;
            self.transition = None;
            return false;
        }
        true
    }
}
