use crate::enums::ActiveStatus;
use crate::enums::BoardStatus;
use crate::enums::SalvagePolicy;
use crate::state::heroes::Hero;
use guild_core::Copper;
use guild_core::Id;
use guild_core::Unique;

/// An unposted contract awaiting a decision (spec.md section 3,
/// GLOSSARY "Draft"). Lives in `Contracts::inbox` until posted, cancelled,
/// or swept by Phase 3 auto-resolution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContractDraft {
    pub id: Id<ContractDraft>,
    pub created_day: i64,
    pub next_auto_resolve_day: i64,
    pub title: String,
    pub rank_suggested: crate::enums::Rank,
    pub fee_offered: Copper,
    pub salvage: SalvagePolicy,
    pub base_difficulty: i64,
    pub client_deposit: Copper,
}

impl Unique<ContractDraft> for ContractDraft {
    fn id(&self) -> Id<ContractDraft> {
        self.id
    }
}

/// The public surface of a posted contract (spec.md GLOSSARY "Board").
/// Born `Open`, becomes `Locked` when picked up, `Completed` when its one
/// in-flight child fully closes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoardContract {
    /// Inherited from the draft it was posted from, not a new counter
    /// (spec.md section 3).
    pub id: Id<BoardContract>,
    pub posted_day: i64,
    pub title: String,
    pub rank: crate::enums::Rank,
    pub fee: Copper,
    pub salvage: SalvagePolicy,
    pub base_difficulty: i64,
    pub status: BoardStatus,
    pub client_deposit: Copper,
}

impl Unique<BoardContract> for BoardContract {
    fn id(&self) -> Id<BoardContract> {
        self.id
    }
}

/// An in-progress engagement between one or more heroes and a posted
/// contract (spec.md GLOSSARY "Active contract").
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActiveContract {
    pub id: Id<ActiveContract>,
    pub board_contract_id: Id<BoardContract>,
    pub taken_day: i64,
    pub days_remaining: i64,
    pub hero_ids: Vec<Id<Hero>>,
    pub status: ActiveStatus,
}

impl Unique<ActiveContract> for ActiveContract {
    fn id(&self) -> Id<ActiveContract> {
        self.id
    }
}

/// The record of a resolved contract, journaled regardless of auto- or
/// manual-close (spec.md GLOSSARY "Return packet").
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReturnPacket {
    pub active_contract_id: Id<ActiveContract>,
    pub board_contract_id: Id<BoardContract>,
    pub hero_ids: Vec<Id<Hero>>,
    pub resolved_day: i64,
    pub outcome: crate::enums::Outcome,
    pub trophies_count: i64,
    pub trophies_quality: crate::enums::Quality,
    pub reason_tags: Vec<String>,
    pub requires_player_close: bool,
    pub suspected_theft: bool,
}

/// The four contract collections, each kept ordered by id ascending
/// (spec.md section 3: "a sequence ordered by id").
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Contracts {
    pub inbox: Vec<ContractDraft>,
    pub board: Vec<BoardContract>,
    pub active: Vec<ActiveContract>,
    pub returns: Vec<ReturnPacket>,
}

impl Contracts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self, id: Id<ContractDraft>) -> Option<&ContractDraft> {
        self.inbox.iter().find(|d| d.id == id)
    }
    pub fn draft_mut(&mut self, id: Id<ContractDraft>) -> Option<&mut ContractDraft> {
        self.inbox.iter_mut().find(|d| d.id == id)
    }
    pub fn board(&self, id: Id<BoardContract>) -> Option<&BoardContract> {
        self.board.iter().find(|b| b.id == id)
    }
    pub fn board_mut(&mut self, id: Id<BoardContract>) -> Option<&mut BoardContract> {
        self.board.iter_mut().find(|b| b.id == id)
    }
    pub fn active(&self, id: Id<ActiveContract>) -> Option<&ActiveContract> {
        self.active.iter().find(|a| a.id == id)
    }
    pub fn active_mut(&mut self, id: Id<ActiveContract>) -> Option<&mut ActiveContract> {
        self.active.iter_mut().find(|a| a.id == id)
    }
    pub fn return_for(&self, active_id: Id<ActiveContract>) -> Option<&ReturnPacket> {
        self.returns
            .iter()
            .find(|r| r.active_contract_id == active_id)
    }
    pub fn remove_draft(&mut self, id: Id<ContractDraft>) {
        self.inbox.retain(|d| d.id != id);
    }
    pub fn remove_return(&mut self, active_id: Id<ActiveContract>) {
        self.returns.retain(|r| r.active_contract_id != active_id);
    }
    pub fn remove_board(&mut self, id: Id<BoardContract>) {
        self.board.retain(|b| b.id != id);
    }
    /// Count of non-closed children of `board_id` (spec.md section 9,
    /// open question 3: the exactly-one reading of the LOCKED-board
    /// invariant).
    pub fn non_closed_child_count(&self, board_id: Id<BoardContract>) -> usize {
        self.active
            .iter()
            .filter(|a| a.board_contract_id == board_id && a.status != ActiveStatus::Closed)
            .count()
    }
}
