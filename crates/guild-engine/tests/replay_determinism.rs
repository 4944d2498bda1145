use guild_engine::Command;
use guild_engine::GameState;
use guild_engine::Rng;

/// spec.md section 8, scenario 2: two runs from identical seeds and the
/// same command sequence must hash identically and consume identical
/// draw counts.
#[test]
fn identical_seeds_replay_to_identical_hashes() {
    let run = || {
        let state = GameState::new(42);
        let mut rng = Rng::seeded(100);
        let (after, events) = guild_engine::step(state, Command::AdvanceDay { cmd_id: 1 }, &mut rng).unwrap();
        (
            guild_engine::hash_state(&after),
            guild_engine::hash_events(&events),
            rng.draws(),
        )
    };

    let a = run();
    let b = run();
    assert_eq!(a, b);
}

#[test]
fn f_tier_inbox_generation_yields_two_drafts() {
    let state = GameState::new(42);
    let mut rng = Rng::seeded(100);
    let (after, _events) = guild_engine::step(state, Command::AdvanceDay { cmd_id: 1 }, &mut rng).unwrap();

    assert_eq!(after.contracts.inbox.len(), 2);
    for draft in &after.contracts.inbox {
        assert!(draft.fee_offered.get() >= 0);
        if draft.client_deposit.get() != 0 {
            let expected = draft.fee_offered.mul_bp(5000);
            assert_eq!(draft.client_deposit, expected);
        }
    }
}
