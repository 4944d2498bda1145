use guild_core::Copper;
use guild_core::Id;
use guild_engine::Command;
use guild_engine::EventKind;
use guild_engine::GameState;
use guild_engine::Rng;
use guild_engine::RejectionReason;
use guild_engine::SalvagePolicy;

/// spec.md section 8, scenario 1: a negative fee is rejected without
/// touching state.
#[test]
fn negative_fee_is_rejected_and_state_is_untouched() {
    let state = GameState::new(42);
    let mut rng = Rng::seeded(100);
    let before = state.clone();

    let (after, events) = guild_engine::step(
        state,
        Command::PostContract {
            cmd_id: 1,
            inbox_id: Id::new(1),
            fee: Copper(-5),
            salvage: SalvagePolicy::Guild,
        },
        &mut rng,
    )
    .unwrap();

    assert_eq!(after, before);
    assert_eq!(after.meta.revision, 0);
    assert_eq!(events.len(), 1);
    match &events[0].kind {
        EventKind::CommandRejected { reason, cmd_type, .. } => {
            assert_eq!(*reason, RejectionReason::InvalidArgument);
            assert_eq!(*cmd_type, "PostContract");
        }
        other => panic!("expected CommandRejected, got {other:?}"),
    }
}
