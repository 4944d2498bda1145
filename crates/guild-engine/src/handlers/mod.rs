pub mod cancel_contract;
pub mod close_return;
pub mod create_contract;
pub mod pay_tax;
pub mod post_contract;
pub mod sell_trophies;
pub mod set_policy;
pub mod update_contract;

use crate::command::Command;
use crate::sequence::SequenceContext;
use crate::state::GameState;

/// Dispatches every command except `AdvanceDay`, which the day-advance
/// pipeline handles on its own (spec.md section 4.4, step 4).
pub fn dispatch(state: &mut GameState, cmd: &Command, ctx: &mut SequenceContext) {
    match cmd {
        Command::AdvanceDay { .. } => {
            unreachable!("AdvanceDay is handled by the day-advance pipeline")
        }
        Command::PostContract {
            inbox_id,
            fee,
            salvage,
            ..
        } => post_contract::post_contract(state, *inbox_id, *fee, *salvage, ctx),
        Command::CloseReturn { active_id, .. } => {
            close_return::close_return(state, *active_id, ctx)
        }
        Command::SellTrophies { amount, .. } => {
            sell_trophies::sell_trophies(state, *amount, ctx)
        }
        Command::PayTax { amount, .. } => pay_tax::pay_tax(state, *amount, ctx),
        Command::SetProofPolicy { policy, .. } => {
            set_policy::set_proof_policy(state, *policy, ctx)
        }
        Command::CreateContract {
            title,
            rank_suggested,
            base_difficulty,
            fee_offered,
            salvage,
            ..
        } => create_contract::create_contract(
            state,
            title.clone(),
            *rank_suggested,
            *base_difficulty,
            *fee_offered,
            *salvage,
            ctx,
        ),
        Command::UpdateContractTerms {
            contract_id,
            fee,
            salvage,
            ..
        } => update_contract::update_contract_terms(state, *contract_id, *fee, *salvage, ctx),
        Command::CancelContract { contract_id, .. } => {
            cancel_contract::cancel_contract(state, *contract_id, ctx)
        }
    }
}
