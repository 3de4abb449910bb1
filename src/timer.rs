//! Frame-driven timers.
//!
//! Nothing here reads a clock: the owner feeds elapsed seconds through
//! `advance`, the same way slide animations accumulate `dt` every frame.

/// A one-shot deferred task.
///
/// Every `arm` bumps the generation, and a firing is only reported when the
/// pending entry still carries the current generation. Re-arming or
/// cancelling therefore invalidates whatever was pending before.
#[derive(Debug, Default)]
pub struct OneShot {
    generation: u64,
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    generation: u64,
    remaining: f32,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer `delay` seconds from now, replacing any pending arm.
    pub fn arm(&mut self, delay: f32) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            remaining: delay,
        });
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the generation that fired, at most once per arm.
    pub fn advance(&mut self, dt: f32) -> Option<u64> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt;
        if pending.remaining > 0.0 {
            return None;
        }

        let fired = self.pending.take()?;
        (fired.generation == self.generation).then_some(fired.generation)
    }
}

/// Coalesces bursts of requests into one firing per interval.
/// The first request opens the window; later ones ride along with it.
#[derive(Debug)]
pub struct Throttle {
    interval: f32,
    timer: OneShot,
}

impl Throttle {
    pub fn new(interval: f32) -> Self {
        Self { interval, timer: OneShot::new() }
    }

    pub fn request(&mut self) {
        if !self.timer.is_armed() {
            self.timer.arm(self.interval);
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer.advance(dt).is_some()
    }
}

/// Fires once the requests have stopped for a full interval.
#[derive(Debug)]
pub struct Debounce {
    interval: f32,
    timer: OneShot,
}

impl Debounce {
    pub fn new(interval: f32) -> Self {
        Self { interval, timer: OneShot::new() }
    }

    pub fn request(&mut self) {
        self.timer.arm(self.interval);
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer.advance(dt).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_after_delay() {
        let mut timer = OneShot::new();
        let generation = timer.arm(0.6);

        assert_eq!(timer.advance(0.25), None);
        assert!(timer.is_armed());
        assert_eq!(timer.advance(0.5), Some(generation));
        assert!(!timer.is_armed());
        assert_eq!(timer.advance(10.0), None);
    }

    #[test]
    fn rearming_supersedes_previous_arm() {
        let mut timer = OneShot::new();
        let first = timer.arm(0.1);
        let second = timer.arm(1.0);
        assert_ne!(first, second);

        assert_eq!(timer.advance(0.5), None);
        assert_eq!(timer.advance(0.5), Some(second));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = OneShot::new();
        timer.arm(0.1);
        timer.cancel();

        assert!(!timer.is_armed());
        assert_eq!(timer.advance(1.0), None);
    }

    #[test]
    fn throttle_coalesces_burst() {
        let mut throttle = Throttle::new(0.05);
        throttle.request();
        assert!(!throttle.advance(0.02));
        throttle.request();
        throttle.request();
        assert!(throttle.advance(0.04));
        assert!(!throttle.advance(1.0));
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let mut debounce = Debounce::new(0.25);
        debounce.request();
        assert!(!debounce.advance(0.2));
        debounce.request();
        assert!(!debounce.advance(0.2));
        assert!(debounce.advance(0.1));
    }
}
