use crate::enums::ProofPolicy;
use crate::enums::Rank;
use crate::enums::SalvagePolicy;
use crate::state::ActiveContract;
use crate::state::BoardContract;
use crate::state::ContractDraft;
use guild_core::Copper;
use guild_core::Id;
use serde::Deserialize;
use serde::Serialize;

/// The closed set of commands an adapter may submit (spec.md section 6).
/// Every variant carries a caller-chosen `cmd_id` for audit correlation;
/// the reducer never generates or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    AdvanceDay {
        cmd_id: i64,
    },
    PostContract {
        cmd_id: i64,
        inbox_id: Id<ContractDraft>,
        fee: Copper,
        salvage: SalvagePolicy,
    },
    CloseReturn {
        cmd_id: i64,
        active_id: Id<ActiveContract>,
    },
    SellTrophies {
        cmd_id: i64,
        amount: i64,
    },
    PayTax {
        cmd_id: i64,
        amount: Copper,
    },
    SetProofPolicy {
        cmd_id: i64,
        policy: ProofPolicy,
    },
    CreateContract {
        cmd_id: i64,
        title: String,
        rank_suggested: Rank,
        base_difficulty: i64,
        fee_offered: Copper,
        salvage: SalvagePolicy,
    },
    UpdateContractTerms {
        cmd_id: i64,
        contract_id: Id<BoardContract>,
        fee: Option<Copper>,
        salvage: Option<SalvagePolicy>,
    },
    CancelContract {
        cmd_id: i64,
        contract_id: Id<BoardContract>,
    },
}

impl Command {
    pub fn cmd_id(&self) -> i64 {
        match self {
            Command::AdvanceDay { cmd_id }
            | Command::PostContract { cmd_id, .. }
            | Command::CloseReturn { cmd_id, .. }
            | Command::SellTrophies { cmd_id, .. }
            | Command::PayTax { cmd_id, .. }
            | Command::SetProofPolicy { cmd_id, .. }
            | Command::CreateContract { cmd_id, .. }
            | Command::UpdateContractTerms { cmd_id, .. }
            | Command::CancelContract { cmd_id, .. } => *cmd_id,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Command::AdvanceDay { .. } => "AdvanceDay",
            Command::PostContract { .. } => "PostContract",
            Command::CloseReturn { .. } => "CloseReturn",
            Command::SellTrophies { .. } => "SellTrophies",
            Command::PayTax { .. } => "PayTax",
            Command::SetProofPolicy { .. } => "SetProofPolicy",
            Command::CreateContract { .. } => "CreateContract",
            Command::UpdateContractTerms { .. } => "UpdateContractTerms",
            Command::CancelContract { .. } => "CancelContract",
        }
    }
}
