use std::time::Duration;

use web_time::Instant;

/// Monotonic time source for the throttle.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Single send clock shared by move and scroll. Drops, never queues.
#[derive(Debug)]
pub struct CommandThrottler<C: Clock = MonotonicClock> {
    clock: C,
    interval: Duration,
    last_send: Option<Duration>,
}

impl<C: Clock> CommandThrottler<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self { clock, interval, last_send: None }
    }

    /// Claims the send slot if the interval has passed since the last accepted send.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();
        if let Some(last) = self.last_send {
            if now.saturating_sub(last) < self.interval {
                return false;
            }
        }
        self.last_send = Some(now);
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock the test advances by hand.
    #[derive(Clone, Default)]
    pub(crate) struct ManualClock(Rc<Cell<Duration>>);

    impl ManualClock {
        pub(crate) fn advance_ms(&self, ms: u64) {
            self.0.set(self.0.get() + Duration::from_millis(ms));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn first_send_is_always_accepted() {
        let mut th = CommandThrottler::new(ManualClock::default(), Duration::from_millis(16));
        assert!(th.try_acquire());
    }

    #[test]
    fn sends_inside_interval_are_dropped() {
        let clock = ManualClock::default();
        let mut th = CommandThrottler::new(clock.clone(), Duration::from_millis(16));
        assert!(th.try_acquire());
        clock.advance_ms(10);
        assert!(!th.try_acquire());
        // drops do not restart the window
        clock.advance_ms(6);
        assert!(th.try_acquire());
        clock.advance_ms(15);
        assert!(!th.try_acquire());
    }

    #[test]
    fn zero_interval_never_drops() {
        let mut th = CommandThrottler::new(ManualClock::default(), Duration::ZERO);
        assert!(th.try_acquire());
        assert!(th.try_acquire());
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::default();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
