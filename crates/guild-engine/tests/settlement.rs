use guild_core::Copper;
use guild_core::Id;
use guild_engine::enums::ActiveStatus;
use guild_engine::enums::BoardStatus;
use guild_engine::enums::Outcome;
use guild_engine::enums::Quality;
use guild_engine::enums::Rank;
use guild_engine::enums::SalvagePolicy;
use guild_engine::state::ActiveContract;
use guild_engine::state::BoardContract;
use guild_engine::state::Contracts;
use guild_engine::state::ReturnPacket;
use guild_engine::Command;
use guild_engine::GameState;
use guild_engine::Rng;

/// spec.md section 8, scenario 5: a manual `CloseReturn` on a PARTIAL
/// outcome pays the fee out of both money and escrow and banks the
/// reported trophies.
#[test]
fn manual_close_settles_money_reserved_and_trophies() {
    let mut state = GameState::new(1);
    state.economy.reserved_copper = Copper(50);
    let reported_trophies = 3;
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
            status: ActiveStatus::ReturnReady,
        }],
        returns: vec![ReturnPacket {
            active_contract_id: Id::new(1),
            board_contract_id: Id::new(1),
            hero_ids: vec![],
            resolved_day: 0,
            outcome: Outcome::Partial,
            trophies_count: reported_trophies,
            trophies_quality: Quality::Ok,
            reason_tags: Vec::new(),
            requires_player_close: true,
            suspected_theft: false,
        }],
        ..Contracts::new()
    };
    state.meta.next_contract_id.issue();
    state.meta.next_active_id.issue();

    let m0 = state.economy.money_copper;
    let r0 = state.economy.reserved_copper;
    let t0 = state.economy.trophies_stock;

    let mut rng = Rng::seeded(1);
    let (after, _events) = guild_engine::step(
        state,
        Command::CloseReturn {
            cmd_id: 1,
            active_id: Id::new(1),
        },
        &mut rng,
    )
    .unwrap();

    assert_eq!(after.economy.money_copper, m0 - Copper(50));
    assert_eq!(after.economy.reserved_copper, r0 - Copper(50));
    assert_eq!(after.economy.trophies_stock, t0 + reported_trophies);
    assert_eq!(
        after.contracts.active(Id::new(1)).unwrap().status,
        ActiveStatus::Closed
    );
}
