//! Monotonic microsecond clock for interaction file names.

use interlog_application::InteractionClock;
use interlog_domain::InteractionFileName;
use std::time::Instant;

/// Clock anchored to wall time once, then advanced by [`Instant`].
///
/// Readings never go backwards within a process, even if the system clock is
/// adjusted. Anchoring to wall time keeps stamps from separate runs writing to
/// the same directory from restarting at zero.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor_micros: u64,
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        let wall = chrono::Utc::now().timestamp_micros();
        Self::anchored_at(u64::try_from(wall).unwrap_or(0))
    }

    /// Create a clock whose first reading starts at `anchor_micros`.
    pub fn anchored_at(anchor_micros: u64) -> Self {
        Self {
            anchor_micros,
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionClock for MonotonicClock {
    fn now_micros(&self) -> u64 {
        let elapsed = self.anchor.elapsed();
        let elapsed = InteractionFileName::from_parts(elapsed.as_secs(), elapsed.subsec_nanos());
        self.anchor_micros.saturating_add(elapsed.micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_readings_are_non_decreasing() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now_micros();
        for _ in 0..1_000 {
            let current = clock.now_micros();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_starts_at_anchor() {
        let clock = MonotonicClock::anchored_at(5_000_000);
        let reading = clock.now_micros();
        assert!(reading >= 5_000_000);
        assert!(reading < 5_000_000 + 60_000_000);
    }

    #[test]
    fn test_advances_with_time() {
        let clock = MonotonicClock::anchored_at(0);
        let before = clock.now_micros();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.now_micros() >= before + 2_000);
    }

    #[test]
    fn test_wall_anchor_is_recent() {
        // 2020-01-01T00:00:00Z in microseconds
        let clock = MonotonicClock::new();
        assert!(clock.now_micros() > 1_577_836_800_000_000);
    }
}
