use crate::command::Command;
use crate::event::Event;
use crate::event::EventKind;
use crate::handlers;
use crate::invariants::verify_invariants;
use crate::pipeline;
use crate::rng::Rng;
use crate::rng::RngError;
use crate::sequence::SequenceContext;
use crate::state::GameState;
use crate::validate::validate;

/// The sole mutation boundary (spec.md section 4.4). On rejection the
/// state is returned unchanged alongside the single `CommandRejected`
/// event; on acceptance it returns the new state and every event the
/// command produced, sequence numbers renumbered from 1.
///
/// `AdvanceDay` increments `day_index` before anything else runs, so that
/// `DayStarted` and every subsequent event this step emits carries the
/// day that is actually advancing, not the one that just ended.
pub fn step(state: GameState, cmd: Command, rng: &mut Rng) -> Result<(GameState, Vec<Event>), RngError> {
    if let Err(rejection) = validate(&state, &cmd) {
        log::debug!("rejected {} ({:?}): {}", cmd.type_name(), rejection.reason, rejection.detail);
        let mut ctx = SequenceContext::new(state.meta.day_index, state.meta.revision, cmd.cmd_id());
        ctx.emit(EventKind::CommandRejected {
            reason: rejection.reason,
            cmd_type: cmd.type_name(),
            detail: rejection.detail,
        });
        ctx.renumber_from_1();
        return Ok((state, ctx.into_events()));
    }

    let mut state = state;
    state.meta.revision += 1;
    if matches!(cmd, Command::AdvanceDay { .. }) {
        state.meta.day_index += 1;
    }
    let mut ctx = SequenceContext::new(state.meta.day_index, state.meta.revision, cmd.cmd_id());

    let mut state = match cmd {
        Command::AdvanceDay { .. } => pipeline::advance_day(state, rng, &mut ctx)?,
        other => {
            handlers::dispatch(&mut state, &other, &mut ctx);
            state
        }
    };

    let violations = verify_invariants(&state);
    if !violations.is_empty() {
        let group = violations
            .into_iter()
            .map(|v| EventKind::InvariantViolated {
                id: v.id,
                details: v.details,
            })
            .collect();
        ctx.insert_before_day_ended(group);
    }
    ctx.renumber_from_1();

    Ok((state, ctx.into_events()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_command_leaves_state_untouched_and_emits_one_event() {
        let state = GameState::new(1);
        let mut rng = Rng::seeded(1);
        let before = state.clone();
        let (after, events) = step(
            state,
            Command::CloseReturn {
                cmd_id: 1,
                active_id: guild_core::Id::new(1),
            },
            &mut rng,
        )
        .unwrap();
        assert_eq!(after, before);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].seq, 1);
        assert!(matches!(events[0].kind, EventKind::CommandRejected { .. }));
    }

    #[test]
    fn advance_day_bumps_day_index_and_revision() {
        let state = GameState::new(1);
        let mut rng = Rng::seeded(1);
        let (after, events) = step(state, Command::AdvanceDay { cmd_id: 1 }, &mut rng).unwrap();
        assert_eq!(after.meta.day_index, 1);
        assert_eq!(after.meta.revision, 1);
        assert!(events.iter().any(|e| e.is_day_ended()));
        assert_eq!(events.first().unwrap().day, 1);
    }
}
