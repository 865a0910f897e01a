use chrono::Local;

/// Current wall-clock time in milliseconds since the epoch.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// One stopwatch session. There is exactly one per process, owned by the
/// application root.
///
/// While running, elapsed time is recomputed from a synthetic origin on
/// every sample rather than accumulated tick-over-tick, so a late or missed
/// tick self-corrects on the next one.
#[derive(Debug, Clone, Default)]
pub struct TimerSession {
    elapsed_ms: u64,
    /// Synthetic origin timestamp; `Some` while running.
    origin_ms: Option<i64>,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopped session restored to a previously persisted elapsed time.
    pub fn with_elapsed(ms: u64) -> Self {
        Self {
            elapsed_ms: ms,
            origin_ms: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.origin_ms.is_some()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Begin or resume the session. The origin sits `elapsed` before `now`,
    /// so prior accumulation carries over across stop/start cycles.
    pub fn start(&mut self, now: i64) {
        self.origin_ms = Some(now - self.elapsed_ms as i64);
    }

    /// Recompute elapsed time from the origin. Idempotent per instant:
    /// sampling the same moment twice lands on the same value. A no-op
    /// while stopped.
    pub fn sample(&mut self, now: i64) -> u64 {
        if let Some(origin) = self.origin_ms {
            self.elapsed_ms = now.saturating_sub(origin).max(0) as u64;
        }
        self.elapsed_ms
    }

    /// Take a final sample and cease running.
    pub fn stop(&mut self, now: i64) {
        self.sample(now);
        self.origin_ms = None;
    }

    /// Force elapsed time back to zero.
    pub fn reset(&mut self) {
        self.origin_ms = None;
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_stopped_at_zero() {
        let session = TimerSession::new();
        assert!(!session.is_running());
        assert_eq!(session.elapsed_ms(), 0);
    }

    #[test]
    fn test_start_and_sample() {
        let mut session = TimerSession::new();
        session.start(1_000);
        assert!(session.is_running());
        assert_eq!(session.sample(6_000), 5_000);
    }

    #[test]
    fn test_resume_accumulates_prior_elapsed() {
        let mut session = TimerSession::new();
        session.start(1_000);
        session.stop(6_000);
        assert_eq!(session.elapsed_ms(), 5_000);
        assert!(!session.is_running());

        // resuming at t=10s keeps the 5s already on the clock
        session.start(10_000);
        assert_eq!(session.sample(12_000), 7_000);
    }

    #[test]
    fn test_sample_is_idempotent_per_instant() {
        let mut session = TimerSession::new();
        session.start(0);
        assert_eq!(session.sample(3_000), 3_000);
        assert_eq!(session.sample(3_000), 3_000);
        // a delayed sample lands on the wall-clock truth, not an accumulation
        assert_eq!(session.sample(9_000), 9_000);
    }

    #[test]
    fn test_sample_while_stopped_is_a_no_op() {
        let mut session = TimerSession::with_elapsed(4_000);
        assert_eq!(session.sample(99_000), 4_000);
    }

    #[test]
    fn test_reset() {
        let mut session = TimerSession::new();
        session.start(0);
        session.sample(5_000);
        session.reset();
        assert!(!session.is_running());
        assert_eq!(session.elapsed_ms(), 0);
    }
}
