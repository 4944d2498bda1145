use crate::enums::SalvagePolicy;
use crate::rng::Rng;
use crate::rng::RngError;
use guild_core::THEFT_CHANCE_DIVISOR_GUILD;
use guild_core::THEFT_CHANCE_DIVISOR_HERO;
use guild_core::THEFT_CHANCE_DIVISOR_SPLIT;
use guild_core::THEFT_REPORTED_FRACTION_BP;
use guild_core::floor_bp;

/// Theft trigger chance (0..100) as a function of greed and salvage
/// policy (spec.md section 4.5, Phase 5, step 6): a guild-favoring policy
/// leaves less on the table to skim from, so it suppresses the chance.
fn chance_percent(greed: i64, salvage: SalvagePolicy) -> i64 {
    let divisor = match salvage {
        SalvagePolicy::Guild => THEFT_CHANCE_DIVISOR_GUILD,
        SalvagePolicy::Split => THEFT_CHANCE_DIVISOR_SPLIT,
        SalvagePolicy::Hero => THEFT_CHANCE_DIVISOR_HERO,
    };
    greed / divisor
}

pub struct TheftRoll {
    pub suspected: bool,
    pub reported_trophies: i64,
}

/// DEATH skips theft entirely and is never passed in here (spec.md
/// section 4.5, Phase 5, step 6). A zero-trophy haul has nothing to
/// steal.
pub fn roll(
    expected_trophies: i64,
    greed: i64,
    salvage: SalvagePolicy,
    rng: &mut Rng,
) -> Result<TheftRoll, RngError> {
    if expected_trophies <= 0 {
        return Ok(TheftRoll {
            suspected: false,
            reported_trophies: expected_trophies,
        });
    }
    if rng.chance_percent(chance_percent(greed, salvage))? {
        Ok(TheftRoll {
            suspected: true,
            reported_trophies: floor_bp(expected_trophies, THEFT_REPORTED_FRACTION_BP),
        })
    } else {
        Ok(TheftRoll {
            suspected: false,
            reported_trophies: expected_trophies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_trophies_never_triggers_theft() {
        let mut rng = Rng::seeded(5);
        let result = roll(0, 100, SalvagePolicy::Hero, &mut rng).unwrap();
        assert!(!result.suspected);
        assert_eq!(result.reported_trophies, 0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn suspected_theft_halves_the_report() {
        assert_eq!(floor_bp(4, THEFT_REPORTED_FRACTION_BP), 2);
    }
}
