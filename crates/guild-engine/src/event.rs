use crate::enums::AutoResolveBucket;
use crate::enums::Outcome;
use crate::enums::ProofPolicy;
use crate::enums::Quality;
use crate::invariants::InvariantId;
use crate::state::ActiveContract;
use crate::state::BoardContract;
use crate::state::ContractDraft;
use crate::state::Hero;
use crate::validate::RejectionReason;
use guild_core::Copper;
use guild_core::Id;
use serde::Serialize;

/// A day-end summary carried by `DayEnded` (spec.md section 4.5, Phase 8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: i64,
    pub revision: u64,
    pub money_copper: Copper,
    pub trophies_stock: i64,
    pub stability: i64,
    pub reputation: i64,
    pub inbox_count: usize,
    pub board_count: usize,
    pub active_count: usize,
    pub returns_count: usize,
}

/// The payload of an event, independent of its position in the journal.
/// Every variant documented in spec.md sections 4, 4.5, and 7.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventKind {
    /// A command failed validation; the single event of a rejected step.
    CommandRejected {
        reason: RejectionReason,
        cmd_type: &'static str,
        detail: String,
    },
    /// One violation surfaced by the invariant verifier.
    InvariantViolated {
        id: InvariantId,
        details: String,
    },

    DayStarted,
    InboxGenerated {
        draft_ids: Vec<Id<ContractDraft>>,
    },
    HeroesArrived {
        hero_ids: Vec<Id<Hero>>,
    },
    ContractAutoResolved {
        draft_id: Id<ContractDraft>,
        bucket: AutoResolveBucket,
    },
    StabilityUpdated {
        old: i64,
        new: i64,
    },
    HeroDeclined {
        hero_id: Id<Hero>,
        board_id: Id<BoardContract>,
        reason: &'static str,
    },
    ContractTaken {
        active_id: Id<ActiveContract>,
        board_id: Id<BoardContract>,
        hero_ids: Vec<Id<Hero>>,
    },
    WipAdvanced {
        active_id: Id<ActiveContract>,
        days_remaining: i64,
    },
    ContractResolved {
        active_id: Id<ActiveContract>,
        board_id: Id<BoardContract>,
        outcome: Outcome,
        quality: Quality,
        trophies_count: i64,
        requires_player_close: bool,
    },
    TrophyTheftSuspected {
        active_id: Id<ActiveContract>,
        expected_trophies: i64,
        reported_trophies: i64,
    },
    HeroDied {
        hero_id: Id<Hero>,
    },
    ReturnClosed {
        active_id: Id<ActiveContract>,
        board_id: Id<BoardContract>,
    },
    GuildRankUp {
        old_level: i64,
        new_level: i64,
    },
    TaxDue {
        amount: Copper,
        due_day: i64,
    },
    TaxMissed {
        missed_count: i64,
        penalty: Copper,
    },
    GuildShutdown {
        reason: &'static str,
    },
    DayEnded {
        snapshot: DaySnapshot,
    },

    ContractPosted {
        board_id: Id<BoardContract>,
    },
    ContractCreated {
        board_id: Id<BoardContract>,
    },
    ContractUpdated {
        contract_id: Id<BoardContract>,
    },
    ContractCancelled {
        contract_id: Id<BoardContract>,
    },
    ProofPolicySet {
        policy: ProofPolicy,
    },
    TrophiesSold {
        amount: i64,
        proceeds: Copper,
    },
    TaxPaid {
        amount: Copper,
    },
}

/// An emitted event. `seq` is assigned by the sequence context, never by
/// the handler that calls `emit` (spec.md section 4.4: "seq is derived
/// from final emission order").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub day: i64,
    pub revision: u64,
    pub cmd_id: i64,
    pub seq: u64,
    pub kind: EventKind,
}

impl Event {
    pub fn is_day_ended(&self) -> bool {
        matches!(self.kind, EventKind::DayEnded { .. })
    }
}
