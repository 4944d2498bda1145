use crate::enums::SalvagePolicy;
use crate::state::Hero;
use guild_core::ATTRACTIVENESS_FEE_DIVISOR;
use guild_core::ATTRACTIVENESS_SALVAGE_GUILD_GREED_DIVISOR;
use guild_core::ATTRACTIVENESS_SALVAGE_HERO_DIFFICULTY_GREED_DIVISOR;
use guild_core::ATTRACTIVENESS_SALVAGE_SPLIT_DIFFICULTY_GREED_DIVISOR;
use guild_core::COMFORT_PER_RANK_LEVEL;
use guild_core::Copper;
use guild_core::RISK_PENALTY_SLOPE;

/// The salvage-policy term of the attractiveness score (spec.md section
/// 4.5, Phase 4): a small negative for GUILD scaled by greed, a positive
/// for HERO scaled by difficulty and greed, a moderate value for SPLIT.
pub(crate) fn salvage_component(salvage: SalvagePolicy, difficulty: i64, greed: i64) -> i64 {
    match salvage {
        SalvagePolicy::Guild => -(greed) / ATTRACTIVENESS_SALVAGE_GUILD_GREED_DIVISOR,
        SalvagePolicy::Hero => (difficulty * greed) / ATTRACTIVENESS_SALVAGE_HERO_DIFFICULTY_GREED_DIVISOR,
        SalvagePolicy::Split => (difficulty * greed) / ATTRACTIVENESS_SALVAGE_SPLIT_DIFFICULTY_GREED_DIVISOR,
    }
}

/// `(difficulty - comfort) * 15 + (50 - courage)/10` once difficulty
/// exceeds the hero's comfort zone, else zero (spec.md section 4.5, Phase
/// 4, given literally).
pub(crate) fn risk_penalty(difficulty: i64, rank_level: i64, courage: i64) -> i64 {
    let comfort = (rank_level + 1) * COMFORT_PER_RANK_LEVEL;
    if difficulty > comfort {
        (difficulty - comfort) * RISK_PENALTY_SLOPE + (50 - courage) / 10
    } else {
        0
    }
}

/// `fee/10 + salvage_component - risk_penalty` (spec.md section 4.5,
/// Phase 4). A hero declines pickup when this is negative.
pub fn score(fee: Copper, salvage: SalvagePolicy, difficulty: i64, hero: &Hero) -> i64 {
    fee.get() / ATTRACTIVENESS_FEE_DIVISOR + salvage_component(salvage, difficulty, hero.greed)
        - risk_penalty(difficulty, hero.rank.level(), hero.courage)
}

/// Categorizes a negative score for `HeroDeclined`'s reason field
/// (spec.md section 4.5, Phase 4: reason in {"low_profit","too_risky",
/// "bad_terms"}) by picking whichever component pulls the score down the
/// most, rather than a fixed priority order.
pub fn decline_reason(fee: Copper, salvage: SalvagePolicy, difficulty: i64, hero: &Hero) -> &'static str {
    let total = score(fee, salvage, difficulty, hero);
    let risk_pull = risk_penalty(difficulty, hero.rank.level(), hero.courage);
    let terms_pull = (-salvage_component(salvage, difficulty, hero.greed)).max(0);
    let profit_pull = (-total).max(0).saturating_sub(risk_pull).saturating_sub(terms_pull);

    if risk_pull >= terms_pull && risk_pull >= profit_pull {
        "too_risky"
    } else if terms_pull >= profit_pull {
        "bad_terms"
    } else {
        "low_profit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::HeroClass;
    use crate::enums::HeroStatus;
    use crate::enums::Rank;
    use guild_core::Id;

    fn hero(greed: i64, courage: i64, rank: Rank) -> Hero {
        Hero {
            id: Id::new(1),
            name: "test".into(),
            rank,
            class: HeroClass::Warrior,
            greed,
            honesty: 50,
            courage,
            status: HeroStatus::Available,
            history_completed: 0,
        }
    }

    #[test]
    fn easy_low_difficulty_contract_has_no_risk_penalty() {
        let h = hero(50, 50, Rank::F);
        assert_eq!(risk_penalty(1, h.rank.level(), h.courage), 0);
    }

    #[test]
    fn guild_salvage_is_never_positive() {
        assert!(salvage_component(SalvagePolicy::Guild, 5, 80) <= 0);
    }
}
