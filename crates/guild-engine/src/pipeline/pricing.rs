use crate::enums::Rank;
use crate::rng::Rng;
use crate::rng::RngError;
use guild_core::Copper;
use guild_core::PAYOUT_A_RANK_ORDINAL;
use guild_core::PAYOUT_A_TAIL_CHANCE_PERCENT;
use guild_core::PAYOUT_A_TAIL_GOLD;
use guild_core::PAYOUT_BANDS_GOLD;

/// Samples a suggested payout in copper for a freshly generated draft
/// (spec.md section 4.5.1). Rank A heavy-tails into an extended band with
/// `PAYOUT_A_TAIL_CHANCE_PERCENT` probability.
pub fn sample_payout_copper(rank: Rank, rng: &mut Rng) -> Result<Copper, RngError> {
    let ordinal = rank.ordinal();
    let (low, high) = if ordinal == PAYOUT_A_RANK_ORDINAL
        && rng.chance_percent(PAYOUT_A_TAIL_CHANCE_PERCENT)?
    {
        PAYOUT_A_TAIL_GOLD
    } else {
        PAYOUT_BANDS_GOLD[ordinal]
    };
    let gold = rng.range(low, high + 1)?;
    Ok(Copper::from_gold(gold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_tier_payout_stays_in_band() {
        let mut rng = Rng::seeded(100);
        for _ in 0..50 {
            let copper = sample_payout_copper(Rank::F, &mut rng).unwrap();
            assert!(copper.get() >= 0 && copper.get() <= 100);
        }
    }
}
