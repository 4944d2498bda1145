use crate::enums::ActiveStatus;
use crate::enums::BoardStatus;
use crate::enums::HeroStatus;
use crate::enums::Outcome;
use crate::enums::SalvagePolicy;
use crate::event::EventKind;
use crate::pipeline::settlement;
use crate::sequence::SequenceContext;
use crate::state::ActiveContract;
use crate::state::BoardContract;
use crate::state::GameState;
use crate::state::Hero;
use guild_core::Copper;
use guild_core::Id;
use guild_core::REPUTATION_GAIN_SUCCESS;
use guild_core::REPUTATION_LOSS_FAIL;

/// Everything `finalize_close` needs to settle a contract, whether it got
/// here via the auto-close branch of Phase 5 or a later `CloseReturn`
/// command (spec.md section 4.5, Phase 5, step 10).
pub struct Close {
    pub active_id: Id<ActiveContract>,
    pub board_id: Id<BoardContract>,
    pub hero_ids: Vec<Id<Hero>>,
    pub outcome: Outcome,
    pub fee: Copper,
    pub salvage: SalvagePolicy,
    pub reported_trophies: i64,
}

/// Settles economy, hero lifecycle, board/active status, guild
/// progression, and the return packet for a contract that is closing
/// right now — shared by Phase 5's auto-close path and the `CloseReturn`
/// handler's manual-close path, so both produce identical effects
/// (spec.md section 4.5.4 and section 8: "auto-close vs manual-close").
pub fn finalize_close(state: &mut GameState, ctx: &mut SequenceContext, close: Close) {
    match close.outcome {
        Outcome::Success | Outcome::Partial => settlement::pay_fee(&mut state.economy, close.fee),
        Outcome::Fail | Outcome::Death => settlement::release_escrow(&mut state.economy, close.fee),
    }
    let guild_share = settlement::guild_trophy_share(close.salvage, close.reported_trophies);
    state.economy.trophies_stock += guild_share;

    for &hero_id in &close.hero_ids {
        if close.outcome == Outcome::Death {
            state.heroes.remove(hero_id);
            ctx.emit(EventKind::HeroDied { hero_id });
        } else if let Some(hero) = state.heroes.hero_mut(hero_id) {
            hero.status = HeroStatus::Available;
            hero.history_completed += 1;
        }
    }

    if let Some(active) = state.contracts.active_mut(close.active_id) {
        active.status = ActiveStatus::Closed;
    }
    if state.contracts.non_closed_child_count(close.board_id) == 0 {
        if let Some(board) = state.contracts.board_mut(close.board_id) {
            board.status = BoardStatus::Completed;
        }
    }
    state.contracts.remove_return(close.active_id);

    state.guild.completed_contracts_total += 1;
    let reputation_delta = match close.outcome {
        Outcome::Success => REPUTATION_GAIN_SUCCESS,
        Outcome::Fail | Outcome::Death => -REPUTATION_LOSS_FAIL,
        Outcome::Partial => 0,
    };
    state.guild.reputation = (state.guild.reputation + reputation_delta).clamp(0, 100);

    if state.guild.ready_to_rank_up() {
        let old_level = state.guild.rank.level();
        if let Some(next) = state.guild.rank.next() {
            state.guild.rank = next;
            log::info!("guild ranked up to {}", next);
            ctx.emit(EventKind::GuildRankUp {
                old_level,
                new_level: next.level(),
            });
        }
    }

    ctx.emit(EventKind::ReturnClosed {
        active_id: close.active_id,
        board_id: close.board_id,
    });
}
