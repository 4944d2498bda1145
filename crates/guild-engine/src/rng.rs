use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Raised when a bound passed to the deterministic RNG is non-positive
/// (spec.md section 4.1). This is the only error the RNG can produce; it
/// is never swallowed (spec.md section 7, "RNG misuse").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngError {
    pub method: &'static str,
    pub bound: i64,
}

impl std::fmt::Display for RngError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid argument to {}: bound {} must be positive",
            self.method, self.bound
        )
    }
}
impl std::error::Error for RngError {}

/// One recorded draw, for an optional trace sink (spec.md section 4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub index: u64,
    pub method: &'static str,
    pub bound: i64,
    pub value: i64,
}

/// A draw-index-recording sink. Installed only for tests/debugging; the
/// engine's behavior is unchanged whether one is present or not.
pub trait TraceSink {
    fn record(&mut self, draw: &Draw);
}

/// Seeded, splittable, deterministic source of randomness with a
/// monotonic draw counter.
///
/// `draws` increments exactly once per successful call, never more and
/// never less — the reducer and every pipeline sub-model rely on this to
/// keep replay hashes stable across refactors (spec.md "RNG as a
/// global-like resource"). Wall-clock, environment, and platform
/// randomness must never enter a core code path; this is the only
/// permitted source.
pub struct Rng {
    inner: SmallRng,
    draws: u64,
    trace: Option<Box<dyn TraceSink>>,
}

impl Rng {
    /// Seeds a fresh generator. The seed is the replay-equivalence anchor
    /// (spec.md section 4.2): two `Rng`s built from the same seed that
    /// each consume the same sequence of draws produce identical output.
    pub fn seeded(seed: u32) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(u64::from(seed)),
            draws: 0,
            trace: None,
        }
    }

    pub fn install_trace(&mut self, sink: Box<dyn TraceSink>) {
        self.trace = Some(sink);
    }

    /// Number of successful draws since construction. A determinism-
    /// contract signal: tests assert this after a scripted command
    /// sequence to catch accidental extra/missing draws.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn record(&mut self, method: &'static str, bound: i64, value: i64) {
        self.draws += 1;
        if let Some(sink) = self.trace.as_mut() {
            sink.record(&Draw {
                index: self.draws,
                method,
                bound,
                value,
            });
        }
    }

    /// Uniform integer in `[0, bound)`.
    pub fn next_int(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError {
                method: "next_int",
                bound,
            });
        }
        let value = (self.inner.next_u64() % bound as u64) as i64;
        self.record("next_int", bound, value);
        Ok(value)
    }

    /// Uniform 64-bit integer in `[0, bound)`.
    pub fn next_long(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError {
                method: "next_long",
                bound,
            });
        }
        let value = (self.inner.next_u64() % bound as u64) as i64;
        self.record("next_long", bound, value);
        Ok(value)
    }

    /// Fair coin flip.
    pub fn next_boolean(&mut self) -> bool {
        let value = self.inner.next_u32() & 1;
        self.record("next_boolean", 2, value as i64);
        value == 1
    }

    /// Uniform double in `[0, 1)`, expressed as an integer-backed draw so
    /// the counter semantics match every other method.
    pub fn next_double(&mut self) -> f64 {
        let raw = self.inner.next_u64() >> 11; // 53 significant bits
        let value = (raw as f64) * (1.0 / ((1u64 << 53) as f64));
        self.record("next_double", 0, raw as i64);
        value
    }

    /// Inclusive-exclusive range helper used throughout the pipeline:
    /// `low + next_int(high - low)`.
    pub fn range(&mut self, low: i64, high: i64) -> Result<i64, RngError> {
        debug_assert!(high > low);
        Ok(low + self.next_int(high - low)?)
    }

    /// Percent-chance roll: `next_int(100) < percent`.
    pub fn chance_percent(&mut self, percent: i64) -> Result<bool, RngError> {
        Ok(self.next_int(100)? < percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_bound() {
        let mut rng = Rng::seeded(1);
        assert!(rng.next_int(0).is_err());
        assert!(rng.next_int(-5).is_err());
    }

    #[test]
    fn draw_counter_increments_once_per_call() {
        let mut rng = Rng::seeded(42);
        assert_eq!(rng.draws(), 0);
        let _ = rng.next_int(10).unwrap();
        assert_eq!(rng.draws(), 1);
        let _ = rng.next_boolean();
        assert_eq!(rng.draws(), 2);
        let _ = rng.next_double();
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::seeded(100);
        let mut b = Rng::seeded(100);
        for _ in 0..20 {
            assert_eq!(a.next_int(1000).unwrap(), b.next_int(1000).unwrap());
        }
        assert_eq!(a.draws(), b.draws());
    }

    #[test]
    fn chance_percent_bounds() {
        let mut rng = Rng::seeded(7);
        for _ in 0..50 {
            let _ = rng.chance_percent(50).unwrap();
        }
        assert_eq!(rng.draws(), 50);
    }
}
