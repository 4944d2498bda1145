use crate::enums::BoardStatus;
use crate::enums::SalvagePolicy;
use crate::event::EventKind;
use crate::pipeline::settlement;
use crate::sequence::SequenceContext;
use crate::state::BoardContract;
use crate::state::ContractDraft;
use crate::state::GameState;
use guild_core::Copper;
use guild_core::Id;

/// Moves a validated inbox draft onto the board, collecting the client's
/// deposit into escrow (spec.md section 4.5.4, `PostContract`).
pub fn post_contract(
    state: &mut GameState,
    inbox_id: Id<ContractDraft>,
    fee: Copper,
    salvage: SalvagePolicy,
    ctx: &mut SequenceContext,
) {
    let draft = state
        .contracts
        .draft(inbox_id)
        .expect("validated to exist")
        .clone();
    state.contracts.remove_draft(inbox_id);

    let board_id = draft.id.cast();
    settlement::escrow_deposit(&mut state.economy, draft.client_deposit);
    state.contracts.board.push(BoardContract {
        id: board_id,
        posted_day: state.meta.day_index,
        title: draft.title,
        rank: draft.rank_suggested,
        fee,
        salvage,
        base_difficulty: draft.base_difficulty,
        status: BoardStatus::Open,
        client_deposit: draft.client_deposit,
    });
    state.contracts.board.sort_by_key(|b| b.id);
    ctx.emit(EventKind::ContractPosted { board_id });
}
