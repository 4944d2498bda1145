use crate::rng::Rng;
use crate::rng::RngError;
use guild_core::THREAT_STABILITY_THRESHOLDS;

/// `3 if stability>=80; 2 if >=60; 1 if >=40; else 0` (spec.md section
/// 4.5.2).
pub fn threat_level(stability: i64) -> i64 {
    for &(threshold, level) in THREAT_STABILITY_THRESHOLDS.iter() {
        if stability >= threshold {
            return level;
        }
    }
    0
}

/// `1 + threat_level + uniform(0 or 1)` (spec.md section 4.5.2).
pub fn sample_base_difficulty(stability: i64, rng: &mut Rng) -> Result<i64, RngError> {
    let jitter = rng.next_int(2)?;
    Ok(1 + threat_level(stability) + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_stepwise() {
        assert_eq!(threat_level(90), 3);
        assert_eq!(threat_level(70), 2);
        assert_eq!(threat_level(50), 1);
        assert_eq!(threat_level(10), 0);
    }
}
