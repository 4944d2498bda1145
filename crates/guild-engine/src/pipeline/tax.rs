use crate::enums::Rank;
use guild_core::Copper;
use guild_core::TAX_BASE_AMOUNT_COPPER;
use guild_core::TAX_RANK_MULTIPLIER;

/// `TAX_BASE_AMOUNT * rank_multiplier` (spec.md section 4.5, Phase 7).
pub fn amount_due(rank: Rank) -> Copper {
    Copper(TAX_BASE_AMOUNT_COPPER * TAX_RANK_MULTIPLIER[rank.ordinal()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_rank() {
        assert_eq!(amount_due(Rank::F).get(), 1000);
        assert_eq!(amount_due(Rank::S).get(), 24_000);
    }
}
