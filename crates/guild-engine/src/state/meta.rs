use crate::state::contracts::ActiveContract;
use crate::state::contracts::ContractDraft;
use crate::state::heroes::Hero;
use guild_core::Copper;
use guild_core::IdCounter;

/// Non-gameplay bookkeeping: save format, determinism anchors, id
/// issuance, and tax scheduling (spec.md section 3).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Meta {
    pub save_version: i64,
    /// Fixed at creation; never mutated after `GameState::new`.
    pub seed: u32,
    pub day_index: i64,
    /// Monotonic logical clock; increments exactly once per accepted
    /// command (spec.md GLOSSARY: "Revision").
    pub revision: u64,
    pub next_contract_id: IdCounter<ContractDraft>,
    pub next_hero_id: IdCounter<Hero>,
    pub next_active_id: IdCounter<ActiveContract>,
    pub tax_due_day: i64,
    pub tax_amount_due: Copper,
    pub tax_penalty: Copper,
    /// 0..3; reaching `TAX_MAX_MISSED` triggers `GuildShutdown`.
    pub tax_missed_count: i64,
}

/// The save format version this crate reads and writes. Deserializing a
/// state with a different `save_version` fails with
/// `SerdeError::IncompatibleVersion` (spec.md section 4.2).
pub const SAVE_VERSION: i64 = 1;

impl Meta {
    pub fn new(seed: u32) -> Self {
        Self {
            save_version: SAVE_VERSION,
            seed,
            day_index: 0,
            revision: 0,
            next_contract_id: IdCounter::new(),
            next_hero_id: IdCounter::new(),
            next_active_id: IdCounter::new(),
            tax_due_day: guild_core::TAX_INTERVAL_DAYS,
            tax_amount_due: Copper::ZERO,
            tax_penalty: Copper::ZERO,
            tax_missed_count: 0,
        }
    }
}
