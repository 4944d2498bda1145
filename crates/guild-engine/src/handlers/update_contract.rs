use crate::enums::SalvagePolicy;
use crate::event::EventKind;
use crate::sequence::SequenceContext;
use crate::state::BoardContract;
use crate::state::GameState;
use guild_core::Copper;
use guild_core::Id;

/// Patches a board contract's fee and/or salvage policy in place, leaving
/// any field not supplied unchanged (spec.md section 4.5.4,
/// `UpdateContractTerms`).
pub fn update_contract_terms(
    state: &mut GameState,
    contract_id: Id<BoardContract>,
    fee: Option<Copper>,
    salvage: Option<SalvagePolicy>,
    ctx: &mut SequenceContext,
) {
    if let Some(board) = state.contracts.board_mut(contract_id) {
        if let Some(fee) = fee {
            board.fee = fee;
        }
        if let Some(salvage) = salvage {
            board.salvage = salvage;
        }
    }
    ctx.emit(EventKind::ContractUpdated { contract_id });
}
