use crate::enums::SalvagePolicy;
use crate::state::Economy;
use guild_core::Copper;

/// Guild's share of reported trophies under a salvage policy (spec.md
/// section 4.5.4): GUILD keeps all, HERO keeps all (guild gets none),
/// SPLIT floors to half.
pub fn guild_trophy_share(salvage: SalvagePolicy, reported_trophies: i64) -> i64 {
    match salvage {
        SalvagePolicy::Guild => reported_trophies,
        SalvagePolicy::Hero => 0,
        SalvagePolicy::Split => reported_trophies / 2,
    }
}

/// Pays `fee` out of escrow and the treasury on a SUCCESS/PARTIAL close
/// (spec.md section 4.5.4: "pay fee from reserved+money to the hero").
pub fn pay_fee(economy: &mut Economy, fee: Copper) {
    economy.reserved_copper -= fee;
    economy.money_copper -= fee;
}

/// Releases escrow without paying out, on a FAIL/DEATH close (spec.md
/// section 4.5.4).
pub fn release_escrow(economy: &mut Economy, fee: Copper) {
    economy.reserved_copper -= fee;
}

/// `money += client_deposit; reserved += client_deposit` on `PostContract`
/// (spec.md section 4.5.4: "client prepays into escrow").
pub fn escrow_deposit(economy: &mut Economy, client_deposit: Copper) {
    economy.money_copper += client_deposit;
    economy.reserved_copper += client_deposit;
}

/// Inverse of `escrow_deposit`, on cancelling a posted contract.
pub fn refund_deposit(economy: &mut Economy, client_deposit: Copper) {
    economy.money_copper -= client_deposit;
    economy.reserved_copper -= client_deposit;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_floors_odd_counts() {
        assert_eq!(guild_trophy_share(SalvagePolicy::Split, 5), 2);
    }

    #[test]
    fn hero_salvage_takes_nothing_for_guild() {
        assert_eq!(guild_trophy_share(SalvagePolicy::Hero, 9), 0);
    }
}
