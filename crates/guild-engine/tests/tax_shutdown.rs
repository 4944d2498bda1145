use guild_engine::Command;
use guild_engine::EventKind;
use guild_engine::GameState;
use guild_engine::Rng;

/// spec.md section 8, scenario 3: missing tax payments three times in a
/// row shuts the guild down, `TaxMissed{missed_count=3}` immediately
/// followed by `GuildShutdown`.
#[test]
fn three_missed_tax_payments_trigger_shutdown() {
    let mut state = GameState::new(42);
    let mut rng = Rng::seeded(100);

    let mut missed_at_three: Option<Vec<EventKind>> = None;
    for day in 1i64..=40 {
        let (next, events) = guild_engine::step(state, Command::AdvanceDay { cmd_id: day }, &mut rng).unwrap();
        state = next;
        if events.iter().any(|e| {
            matches!(
                e.kind,
                EventKind::TaxMissed { missed_count, .. } if missed_count == 3
            )
        }) {
            missed_at_three = Some(events.into_iter().map(|e| e.kind).collect());
            break;
        }
    }

    let events = missed_at_three.expect("guild never missed tax three times in 40 days");
    let missed_index = events
        .iter()
        .position(|k| matches!(k, EventKind::TaxMissed { missed_count: 3, .. }))
        .unwrap();
    let shutdown_index = events
        .iter()
        .position(|k| matches!(k, EventKind::GuildShutdown { .. }))
        .expect("GuildShutdown must follow the third TaxMissed");
    assert!(shutdown_index > missed_index);
}
