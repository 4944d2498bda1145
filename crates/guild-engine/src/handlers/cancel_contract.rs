use crate::event::EventKind;
use crate::pipeline::settlement;
use crate::sequence::SequenceContext;
use crate::state::BoardContract;
use crate::state::GameState;
use guild_core::Id;

/// Cancels an OPEN board contract with no in-flight child, refunding any
/// client deposit out of escrow (spec.md section 4.5.4, `CancelContract`).
pub fn cancel_contract(state: &mut GameState, contract_id: Id<BoardContract>, ctx: &mut SequenceContext) {
    if let Some(board) = state.contracts.board(contract_id).cloned() {
        settlement::refund_deposit(&mut state.economy, board.client_deposit);
    }
    state.contracts.remove_board(contract_id);
    ctx.emit(EventKind::ContractCancelled { contract_id });
}
