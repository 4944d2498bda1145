use crate::enums::ProofPolicy;
use crate::enums::Rank;
use guild_core::GUILD_RANK_THRESHOLDS;

/// The guild's standing: rank, reputation, and how strictly it requires
/// proof-of-completion before auto-closing a contract (spec.md section 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Guild {
    pub rank: Rank,
    pub reputation: i64,
    pub completed_contracts_total: i64,
    pub proof_policy: ProofPolicy,
}

impl Guild {
    pub fn new() -> Self {
        Self {
            rank: Rank::F,
            reputation: 50,
            completed_contracts_total: 0,
            proof_policy: ProofPolicy::Fast,
        }
    }

    /// Contracts still needed to reach the next rank, or `0` at rank S
    /// (already maxed — spec.md's `contracts_for_next_rank` field).
    pub fn contracts_for_next_rank(&self) -> i64 {
        match GUILD_RANK_THRESHOLDS.get(self.rank.ordinal()) {
            Some(&threshold) => (threshold - self.completed_contracts_total).max(0),
            None => 0,
        }
    }

    /// True if `completed_contracts_total` has crossed the threshold for
    /// the current rank and a rank-up should fire.
    pub fn ready_to_rank_up(&self) -> bool {
        self.rank != Rank::S && self.contracts_for_next_rank() == 0
    }
}

impl Default for Guild {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rank_f() {
        let guild = Guild::new();
        assert_eq!(guild.rank, Rank::F);
        assert_eq!(guild.contracts_for_next_rank(), GUILD_RANK_THRESHOLDS[0]);
    }

    #[test]
    fn s_rank_needs_nothing_more() {
        let guild = Guild {
            rank: Rank::S,
            ..Guild::new()
        };
        assert_eq!(guild.contracts_for_next_rank(), 0);
        assert!(!guild.ready_to_rank_up());
    }
}
