use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic timestamps.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Readings are `base + offset`, where `base` is captured at construction.
/// Share one between a test and the code under test with `Rc<ManualClock>`.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { base: Instant::now(), offset: Cell::new(Duration::ZERO) }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Places the clock exactly `offset` after its base.
    ///
    /// Moving backwards is allowed; timers reading it saturate at zero.
    pub fn set(&self, offset: Duration) {
        self.offset.set(offset);
    }

    /// Current offset from the base.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_advanced() {
        let clock = ManualClock::new();
        let t0 = clock.now();
        assert_eq!(clock.now(), t0);

        clock.advance(Duration::from_millis(400));
        assert_eq!(clock.now().duration_since(t0), Duration::from_millis(400));
    }

    #[test]
    fn manual_clock_set_is_absolute() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(3));
        clock.set(Duration::from_millis(1000));
        assert_eq!(clock.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn shared_clock_sees_updates() {
        let clock = Rc::new(ManualClock::new());
        let shared = Rc::clone(&clock);
        let t0 = shared.now();
        clock.advance(Duration::from_millis(25));
        assert_eq!(shared.now() - t0, Duration::from_millis(25));
    }
}
