use guild_core::Copper;
use guild_core::Id;
use guild_engine::enums::ActiveStatus;
use guild_engine::enums::BoardStatus;
use guild_engine::enums::Rank;
use guild_engine::enums::SalvagePolicy;
use guild_engine::state::ActiveContract;
use guild_engine::state::BoardContract;
use guild_engine::state::Contracts;
use guild_engine::Command;
use guild_engine::EventKind;
use guild_engine::GameState;
use guild_engine::InvariantId;
use guild_engine::Rng;

/// spec.md section 8, scenario 6: a LOCKED board whose only child is
/// closed (with its return packet already removed) surfaces an
/// `InvariantViolated` event spliced in before `DayEnded`.
#[test]
fn locked_board_with_no_in_flight_child_is_flagged_before_day_ended() {
    let mut state = GameState::new(1);
    state.contracts = Contracts {
        board: vec![BoardContract {
            id: Id::new(1),
            posted_day: 0,
            title: "t".into(),
            rank: Rank::F,
            fee: Copper(50),
            salvage: SalvagePolicy::Guild,
            base_difficulty: 1,
            status: BoardStatus::Locked,
            client_deposit: Copper::ZERO,
        }],
        active: vec![ActiveContract {
            id: Id::new(1),
            board_contract_id: Id::new(1),
            taken_day: 0,
            days_remaining: 0,
            hero_ids: vec![],
            status: ActiveStatus::Closed,
        }],
        ..Contracts::new()
    };
    state.meta.next_contract_id.issue();
    state.meta.next_active_id.issue();

    let mut rng = Rng::seeded(1);
    let (_after, events) =
        guild_engine::step(state, Command::AdvanceDay { cmd_id: 1 }, &mut rng).unwrap();

    let violation_index = events
        .iter()
        .position(|e| {
            matches!(
                &e.kind,
                EventKind::InvariantViolated { id, .. }
                    if *id == InvariantId::ContractsLockedBoardHasNonClosedActive
            )
        })
        .expect("expected a LOCKED-board invariant violation");
    let day_ended_index = events
        .iter()
        .position(|e| e.is_day_ended())
        .expect("AdvanceDay always emits DayEnded");
    assert!(violation_index < day_ended_index);
}
