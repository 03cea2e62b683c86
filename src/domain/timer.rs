use std::time::{Duration, Instant};

/// Poll-based interval timer: `expired` answers whether the interval has
/// elapsed since the last reset, and restarts the interval when it has.
/// No callbacks, no scheduling.
#[derive(Debug)]
pub struct Timer {
    interval: Duration,
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
            start: Instant::now(),
        }
    }

    pub fn set(&mut self, interval: Duration) {
        self.interval = interval;
        self.start = Instant::now();
    }

    pub fn expired(&mut self) -> bool {
        self.expired_at(Instant::now())
    }

    pub fn expired_at(&mut self, now: Instant) -> bool {
        if now.duration_since(self.start) >= self.interval {
            self.start = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;
    use std::time::{Duration, Instant};

    #[test]
    fn fires_only_after_the_interval() {
        let mut timer = Timer::new();
        timer.set(Duration::from_secs(2));
        let start = Instant::now();

        assert!(!timer.expired_at(start + Duration::from_secs(1)));
        assert!(timer.expired_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn restarts_after_firing() {
        let mut timer = Timer::new();
        timer.set(Duration::from_secs(1));
        let start = Instant::now();

        assert!(timer.expired_at(start + Duration::from_secs(1)));
        assert!(!timer.expired_at(start + Duration::from_millis(1500)));
        assert!(timer.expired_at(start + Duration::from_millis(2100)));
    }

    #[test]
    fn zero_interval_always_fires() {
        let mut timer = Timer::new();
        assert!(timer.expired());
        assert!(timer.expired());
    }
}
