//! Sampling-interval policy.
//!
//! A DHT sensor must not be strobed faster than its datasheet minimum
//! (1 s for the DHT11, 2 s for the DHT22).  The main loop reads the two
//! channels independently each cycle, so the driver caches the last
//! transaction outcome and reuses it while it is still inside the minimum
//! interval.  The loop itself stays on its fixed 2000 ms period regardless
//! of the reported minimum.

/// Whether an attempt made at `last_attempt_ms` is still fresh at `now_ms`.
pub fn should_reuse_cached(last_attempt_ms: u64, now_ms: u64, min_interval_ms: u64) -> bool {
    now_ms.saturating_sub(last_attempt_ms) < min_interval_ms
}

/// Timestamped cache of the last transaction outcome.
///
/// Failed attempts are recorded too: a botched transfer still occupied the
/// line, so the back-to-back second channel read of the same cycle must
/// reuse the failure instead of re-strobing the sensor inside the minimum
/// interval.
pub struct OutcomeCache<T: Copy> {
    last: Option<(u64, T)>,
}

impl<T: Copy> OutcomeCache<T> {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// The cached outcome, if one exists and is still fresh at `now_ms`.
    pub fn fresh(&self, now_ms: u64, min_interval_ms: u64) -> Option<T> {
        self.last
            .and_then(|(at, outcome)| should_reuse_cached(at, now_ms, min_interval_ms).then_some(outcome))
    }

    /// Record the outcome of an attempt, successful or not.
    pub fn record(&mut self, now_ms: u64, outcome: T) {
        self.last = Some((now_ms, outcome));
    }
}
