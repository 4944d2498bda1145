use crate::event::Event;
use crate::event::EventKind;

/// The only thing a handler or pipeline phase is allowed to append events
/// through. Handlers never construct `seq` themselves (spec.md section
/// 4.4, step 3); this context assigns a placeholder value at `emit` time
/// and the reducer renumbers everything once, at the very end.
pub struct SequenceContext {
    day: i64,
    revision: u64,
    cmd_id: i64,
    events: Vec<Event>,
}

impl SequenceContext {
    pub fn new(day: i64, revision: u64, cmd_id: i64) -> Self {
        Self {
            day,
            revision,
            cmd_id,
            events: Vec::new(),
        }
    }

    /// Appends one event at the end, with a placeholder `seq` to be fixed
    /// up by `renumber_from_1`.
    pub fn emit(&mut self, kind: EventKind) {
        self.events.push(Event {
            day: self.day,
            revision: self.revision,
            cmd_id: self.cmd_id,
            seq: 0,
            kind,
        });
    }

    /// Inserts `group` immediately before the trailing `DayEnded`, or at
    /// the end if the last event isn't one (spec.md section 4.4, step 3:
    /// used to splice in invariant-violation events without ever putting
    /// anything after `DayEnded`).
    pub fn insert_before_day_ended(&mut self, group: Vec<EventKind>) {
        let insert_at = match self.events.last() {
            Some(last) if last.is_day_ended() => self.events.len() - 1,
            _ => self.events.len(),
        };
        let wrapped = group.into_iter().map(|kind| Event {
            day: self.day,
            revision: self.revision,
            cmd_id: self.cmd_id,
            seq: 0,
            kind,
        });
        self.events.splice(insert_at..insert_at, wrapped);
    }

    /// Rewrites every `seq` to reflect final emission order, 1-based and
    /// contiguous (spec.md section 4.4, step 3 and section 5: "sequence
    /// numbers start at 1 and are strictly monotonic within a step").
    pub fn renumber_from_1(&mut self) {
        for (i, event) in self.events.iter_mut().enumerate() {
            event.seq = (i + 1) as u64;
        }
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_before_day_ended_keeps_day_ended_last() {
        let mut ctx = SequenceContext::new(1, 1, 99);
        ctx.emit(EventKind::DayStarted);
        ctx.emit(EventKind::DayEnded {
            snapshot: crate::event::DaySnapshot {
                day: 1,
                revision: 1,
                money_copper: guild_core::Copper::ZERO,
                trophies_stock: 0,
                stability: 70,
                reputation: 50,
                inbox_count: 0,
                board_count: 0,
                active_count: 0,
                returns_count: 0,
            },
        });
        ctx.insert_before_day_ended(vec![EventKind::InvariantViolated {
            id: crate::invariants::InvariantId::RegionStabilityRange,
            details: "x".into(),
        }]);
        ctx.renumber_from_1();
        let events = ctx.into_events();
        assert_eq!(events.len(), 3);
        assert!(events.last().unwrap().is_day_ended());
        assert_eq!(events[0].seq, 1);
        assert_eq!(events[2].seq, 3);
    }

    #[test]
    fn appends_at_end_when_no_day_ended() {
        let mut ctx = SequenceContext::new(1, 1, 1);
        ctx.emit(EventKind::DayStarted);
        ctx.insert_before_day_ended(vec![EventKind::InvariantViolated {
            id: crate::invariants::InvariantId::RegionStabilityRange,
            details: "x".into(),
        }]);
        ctx.renumber_from_1();
        assert_eq!(ctx.into_events().len(), 2);
    }
}
