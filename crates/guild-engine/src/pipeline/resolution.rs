use crate::enums::Outcome;
use crate::enums::Quality;
use crate::rng::Rng;
use crate::rng::RngError;
use crate::state::Hero;
use guild_core::HISTORY_POWER_DIVISOR;
use guild_core::MISSING_CHANCE_PERCENT;
use guild_core::PARTIAL_CHANCE_FIXED;
use guild_core::QUALITY_DAMAGED_THRESHOLD;
use guild_core::QUALITY_OK_THRESHOLD;
use guild_core::SUCCESS_BONUS_TROPHY_MAX;
use guild_core::SUCCESS_CHANCE_MAX;
use guild_core::SUCCESS_CHANCE_MIN;
use guild_core::SUCCESS_CHANCE_OFFSET;
use guild_core::SUCCESS_CHANCE_SCALE;

/// `(rank_ordinal+1) + class_bonus + history_completed/10`, or `1` for a
/// missing hero (spec.md section 4.5, Phase 5, step 1).
pub fn hero_power(hero: Option<&Hero>) -> i64 {
    match hero {
        Some(hero) => {
            hero.rank.level() + hero.class_bonus() + hero.history_completed / HISTORY_POWER_DIVISOR
        }
        None => 1,
    }
}

/// Percent chances for SUCCESS/PARTIAL/FAIL, guaranteed to sum to 100 by
/// the constants invariant (spec.md section 4.5.3).
pub struct ChanceTable {
    pub success: i64,
    pub partial: i64,
    pub fail: i64,
}

/// `p_success = clamp((hero_power - difficulty + 5) * 20, 5, 85)`,
/// `p_partial = 14`, `p_fail = 100 - p_success - p_partial` (spec.md
/// section 4.5, Phase 5, step 2).
pub fn chance_table(hero_power: i64, difficulty: i64) -> ChanceTable {
    let success = ((hero_power - difficulty + SUCCESS_CHANCE_OFFSET) * SUCCESS_CHANCE_SCALE)
        .clamp(SUCCESS_CHANCE_MIN, SUCCESS_CHANCE_MAX);
    let partial = PARTIAL_CHANCE_FIXED;
    ChanceTable {
        success,
        partial,
        fail: 100 - success - partial,
    }
}

/// Rolls the outcome band, then applies the FAIL -> DEATH reclassification
/// (spec.md section 4.5, Phase 5, step 3; see `crate::enums::Outcome` for
/// the direction of this substitution).
pub fn roll_outcome(table: &ChanceTable, rng: &mut Rng) -> Result<Outcome, RngError> {
    let roll = rng.next_int(100)?;
    let banded = if roll < table.success {
        Outcome::Success
    } else if roll < table.success + table.partial {
        Outcome::Partial
    } else {
        Outcome::Fail
    };
    if banded == Outcome::Fail && rng.chance_percent(MISSING_CHANCE_PERCENT)? {
        return Ok(Outcome::Death);
    }
    Ok(banded)
}

/// `<70` OK, `<90` DAMAGED, else NONE (spec.md section 4.5, Phase 5, step
/// 4).
pub fn roll_quality(rng: &mut Rng) -> Result<Quality, RngError> {
    let roll = rng.next_int(100)?;
    Ok(if roll < QUALITY_OK_THRESHOLD {
        Quality::Ok
    } else if roll < QUALITY_DAMAGED_THRESHOLD {
        Quality::Damaged
    } else {
        Quality::None
    })
}

/// Base trophy count from outcome: SUCCESS samples `1 + uniform(0..=2)`,
/// PARTIAL is always `1`, FAIL/DEATH are always `0` (spec.md section 4.5,
/// Phase 5, step 5).
pub fn roll_trophies(outcome: Outcome, rng: &mut Rng) -> Result<i64, RngError> {
    match outcome {
        Outcome::Success => Ok(1 + rng.next_int(SUCCESS_BONUS_TROPHY_MAX + 1)?),
        Outcome::Partial => Ok(1),
        Outcome::Fail | Outcome::Death => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_table_sums_to_one_hundred() {
        let table = chance_table(10, 2);
        assert_eq!(table.success + table.partial + table.fail, 100);
    }

    #[test]
    fn success_chance_is_clamped() {
        assert_eq!(chance_table(100, 0).success, SUCCESS_CHANCE_MAX);
        assert_eq!(chance_table(0, 100).success, SUCCESS_CHANCE_MIN);
    }

    #[test]
    fn fail_or_death_never_yields_trophies() {
        let mut rng = Rng::seeded(3);
        assert_eq!(roll_trophies(Outcome::Fail, &mut rng).unwrap(), 0);
        assert_eq!(roll_trophies(Outcome::Death, &mut rng).unwrap(), 0);
    }
}
