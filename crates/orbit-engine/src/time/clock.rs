use std::time::Instant;

/// Monotonic elapsed-time source started once per run.
///
/// There is no `reset`: the shader time uniform must never run backwards.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    /// Seconds elapsed between start and `now`. Instants before start read as zero.
    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_counts_from_start() {
        let t0 = Instant::now();
        let clock = Clock::starting_at(t0);
        assert_eq!(clock.elapsed_at(t0), 0.0);
        assert!((clock.elapsed_at(t0 + Duration::from_millis(1500)) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn instants_before_start_saturate_to_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let clock = Clock::starting_at(t0);
        assert_eq!(clock.elapsed_at(t0 - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn elapsed_is_monotonic_for_increasing_samples() {
        let t0 = Instant::now();
        let clock = Clock::starting_at(t0);
        let mut last = 0.0;
        for ms in [0u64, 16, 33, 33, 50, 1000] {
            let e = clock.elapsed_at(t0 + Duration::from_millis(ms));
            assert!(e >= last);
            last = e;
        }
    }
}
