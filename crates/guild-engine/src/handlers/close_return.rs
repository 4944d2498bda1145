use crate::pipeline::close;
use crate::sequence::SequenceContext;
use crate::state::ActiveContract;
use crate::state::GameState;
use guild_core::Id;

/// Manually closes a `RETURN_READY` packet (spec.md section 4.5.4,
/// `CloseReturn`). Delegates to the same settlement logic Phase 5's
/// auto-close branch uses, so both paths leave the same trail.
pub fn close_return(state: &mut GameState, active_id: Id<ActiveContract>, ctx: &mut SequenceContext) {
    let packet = state
        .contracts
        .return_for(active_id)
        .expect("validated to exist")
        .clone();
    let board = state
        .contracts
        .board(packet.board_contract_id)
        .expect("validated to exist")
        .clone();
    close::finalize_close(
        state,
        ctx,
        close::Close {
            active_id,
            board_id: board.id,
            hero_ids: packet.hero_ids,
            outcome: packet.outcome,
            fee: board.fee,
            salvage: board.salvage,
            reported_trophies: packet.trophies_count,
        },
    );
}
