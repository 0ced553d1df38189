use serde::{Deserialize, Serialize};

/// Wall-clock duration of one grow animation run, in milliseconds.
pub const GROW_ANIMATION_DURATION_MS: f64 = 1000.0;

/// One grow-animation run over a polled clock.
///
/// Time is whatever monotonic scale the host supplies (milliseconds here and
/// in the engine); only differences against `start_time` matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowAnimation {
    pub start_time: f64,
    pub duration: f64,
}

impl GrowAnimation {
    #[must_use]
    pub fn new(start_time: f64) -> Self {
        Self {
            start_time,
            duration: GROW_ANIMATION_DURATION_MS,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn finished(self, now: f64) -> bool {
        if self.duration <= 0.0 {
            return true;
        }
        ((now - self.start_time) / self.duration) >= 1.0
    }

    /// Completion fraction in [0, 1] at the polled instant.
    #[must_use]
    pub fn progress_at(self, now: f64) -> f64 {
        if self.finished(now) || self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }
}

/// Ticket identifying one animation run.
///
/// Ticks carrying a superseded handle are ignored, so a cancelled run's
/// driver can never mutate state after cancellation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle {
    generation: u64,
}

/// Single-slot animation scheduler: at most one run active, last call wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    active: Option<GrowAnimation>,
    generation: u64,
    progress: f64,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self {
            active: None,
            generation: 0,
            // A dataset supplied before any animation renders fully grown.
            progress: 1.0,
        }
    }
}

impl AnimationDriver {
    /// Cancels any in-flight run and installs a new one starting at `now`.
    pub fn start(&mut self, now: f64) -> AnimationHandle {
        self.start_with(GrowAnimation::new(now))
    }

    pub fn start_with(&mut self, animation: GrowAnimation) -> AnimationHandle {
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(animation);
        self.progress = animation.progress_at(animation.start_time);
        AnimationHandle {
            generation: self.generation,
        }
    }

    /// Advances the run identified by `handle` to the polled instant.
    ///
    /// Returns the stored progress, or `None` when the handle was superseded
    /// or the driver is idle — stale ticks leave all state untouched.
    pub fn tick(&mut self, handle: AnimationHandle, now: f64) -> Option<f64> {
        if handle.generation != self.generation {
            return None;
        }
        let animation = self.active?;
        self.progress = animation.progress_at(now);
        if animation.finished(now) {
            // Run retires; progress stays at 1.0 until the next start.
            self.active = None;
        }
        Some(self.progress)
    }

    /// Synchronous stop. Outstanding handles are invalidated before return.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn progress(self) -> f64 {
        self.progress
    }
}
