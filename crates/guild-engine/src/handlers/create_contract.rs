use crate::enums::BoardStatus;
use crate::enums::Rank;
use crate::enums::SalvagePolicy;
use crate::event::EventKind;
use crate::sequence::SequenceContext;
use crate::state::BoardContract;
use crate::state::GameState;
use guild_core::Copper;

/// Staff-authored contracts skip the inbox/auto-resolve cycle entirely and
/// land on the board OPEN already, funded with no client deposit. Resolved
/// per DESIGN.md: `UpdateContractTerms` and `CancelContract` both address a
/// board contract id, so creation has to target the board directly rather
/// than the inbox (spec.md section 4.5.4, `CreateContract`).
pub fn create_contract(
    state: &mut GameState,
    title: String,
    rank_suggested: Rank,
    base_difficulty: i64,
    fee_offered: Copper,
    salvage: SalvagePolicy,
    ctx: &mut SequenceContext,
) {
    let board_id = state.meta.next_contract_id.issue().cast();
    state.contracts.board.push(BoardContract {
        id: board_id,
        posted_day: state.meta.day_index,
        title,
        rank: rank_suggested,
        fee: fee_offered,
        salvage,
        base_difficulty,
        status: BoardStatus::Open,
        client_deposit: Copper::ZERO,
    });
    state.contracts.board.sort_by_key(|b| b.id);
    ctx.emit(EventKind::ContractCreated { board_id });
}
