//! Deterministic JSON-shaped encoding (spec.md section 4.2).
//!
//! Hand-rolled rather than routed through `serde_json::to_string` on a
//! derived `Serialize` impl: `serde_json::Map`'s default key order is
//! insertion order only with the `preserve_order` feature on, and we'd
//! rather own the exact field order than depend on a feature flag nobody
//! downstream is forced to enable. Every function below emits keys in a
//! fixed order per object type, exactly as spec.md section 4.2 requires.

use crate::event::Event;
use crate::event::EventKind;
use crate::state::GameState;
use guild_core::Copper;
use guild_core::Id;
use std::fmt::Write as _;

fn escape(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn kv_str(out: &mut String, key: &str, value: &str, trailing_comma: bool) {
    escape(key, out);
    out.push(':');
    escape(value, out);
    if trailing_comma {
        out.push(',');
    }
}

fn kv_int(out: &mut String, key: &str, value: i64, trailing_comma: bool) {
    escape(key, out);
    let _ = write!(out, ":{}", value);
    if trailing_comma {
        out.push(',');
    }
}

fn kv_u64(out: &mut String, key: &str, value: u64, trailing_comma: bool) {
    escape(key, out);
    let _ = write!(out, ":{}", value);
    if trailing_comma {
        out.push(',');
    }
}

fn kv_bool(out: &mut String, key: &str, value: bool, trailing_comma: bool) {
    escape(key, out);
    let _ = write!(out, ":{}", value);
    if trailing_comma {
        out.push(',');
    }
}

fn kv_copper(out: &mut String, key: &str, value: Copper, trailing_comma: bool) {
    kv_int(out, key, value.get(), trailing_comma);
}

fn kv_id<T>(out: &mut String, key: &str, value: Id<T>, trailing_comma: bool) {
    kv_u64(out, key, value.get(), trailing_comma);
}

fn kv_raw(out: &mut String, key: &str, raw: &str, trailing_comma: bool) {
    escape(key, out);
    out.push(':');
    out.push_str(raw);
    if trailing_comma {
        out.push(',');
    }
}

fn array_of<T>(items: &[T], mut encode_one: impl FnMut(&T, &mut String)) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_one(item, &mut out);
    }
    out.push(']');
    out
}

fn id_array<T>(ids: &[Id<T>]) -> String {
    let mut out = String::from("[");
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", id.get());
    }
    out.push(']');
    out
}

fn string_array(items: &[String]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        escape(item, &mut out);
    }
    out.push(']');
    out
}

/// Encodes the full `GameState` (spec.md section 4.2: "arrivals_today is
/// omitted on save").
pub fn canonical_state(state: &GameState) -> String {
    let mut out = String::from("{");
    kv_raw(&mut out, "meta", &meta_json(state), true);
    kv_raw(&mut out, "guild", &guild_json(state), true);
    kv_raw(&mut out, "region", &region_json(state), true);
    kv_raw(&mut out, "economy", &economy_json(state), true);
    kv_raw(&mut out, "contracts", &contracts_json(state), true);
    kv_raw(&mut out, "heroes", &heroes_json(state), false);
    out.push('}');
    out
}

fn meta_json(state: &GameState) -> String {
    let meta = &state.meta;
    let mut out = String::from("{");
    kv_int(&mut out, "save_version", meta.save_version, true);
    kv_u64(&mut out, "seed", u64::from(meta.seed), true);
    kv_int(&mut out, "day_index", meta.day_index, true);
    kv_u64(&mut out, "revision", meta.revision, true);
    kv_u64(&mut out, "next_contract_id", meta.next_contract_id.peek(), true);
    kv_u64(&mut out, "next_hero_id", meta.next_hero_id.peek(), true);
    kv_u64(&mut out, "next_active_id", meta.next_active_id.peek(), true);
    kv_int(&mut out, "tax_due_day", meta.tax_due_day, true);
    kv_copper(&mut out, "tax_amount_due", meta.tax_amount_due, true);
    kv_copper(&mut out, "tax_penalty", meta.tax_penalty, true);
    kv_int(&mut out, "tax_missed_count", meta.tax_missed_count, false);
    out.push('}');
    out
}

fn guild_json(state: &GameState) -> String {
    let guild = &state.guild;
    let mut out = String::from("{");
    kv_int(&mut out, "rank", guild.rank.level(), true);
    kv_int(&mut out, "reputation", guild.reputation, true);
    kv_int(
        &mut out,
        "completed_contracts_total",
        guild.completed_contracts_total,
        true,
    );
    kv_int(
        &mut out,
        "contracts_for_next_rank",
        guild.contracts_for_next_rank(),
        true,
    );
    kv_str(&mut out, "proof_policy", proof_policy_str(guild.proof_policy), false);
    out.push('}');
    out
}

fn region_json(state: &GameState) -> String {
    let mut out = String::from("{");
    kv_int(&mut out, "stability", state.region.stability, false);
    out.push('}');
    out
}

fn economy_json(state: &GameState) -> String {
    let economy = &state.economy;
    let mut out = String::from("{");
    kv_copper(&mut out, "money_copper", economy.money_copper, true);
    kv_copper(&mut out, "reserved_copper", economy.reserved_copper, true);
    kv_int(&mut out, "trophies_stock", economy.trophies_stock, false);
    out.push('}');
    out
}

fn contracts_json(state: &GameState) -> String {
    let contracts = &state.contracts;
    let mut out = String::from("{");
    kv_raw(
        &mut out,
        "inbox",
        &array_of(&contracts.inbox, |d, out| {
            let mut obj = String::from("{");
            kv_id(&mut obj, "id", d.id, true);
            kv_int(&mut obj, "created_day", d.created_day, true);
            kv_int(&mut obj, "next_auto_resolve_day", d.next_auto_resolve_day, true);
            kv_str(&mut obj, "title", &d.title, true);
            kv_int(&mut obj, "rank_suggested", d.rank_suggested.level(), true);
            kv_copper(&mut obj, "fee_offered", d.fee_offered, true);
            kv_str(&mut obj, "salvage", salvage_str(d.salvage), true);
            kv_int(&mut obj, "base_difficulty", d.base_difficulty, true);
            kv_copper(&mut obj, "client_deposit", d.client_deposit, false);
            obj.push('}');
            out.push_str(&obj);
        }),
        true,
    );
    kv_raw(
        &mut out,
        "board",
        &array_of(&contracts.board, |b, out| {
            let mut obj = String::from("{");
            kv_id(&mut obj, "id", b.id, true);
            kv_int(&mut obj, "posted_day", b.posted_day, true);
            kv_str(&mut obj, "title", &b.title, true);
            kv_int(&mut obj, "rank", b.rank.level(), true);
            kv_copper(&mut obj, "fee", b.fee, true);
            kv_str(&mut obj, "salvage", salvage_str(b.salvage), true);
            kv_int(&mut obj, "base_difficulty", b.base_difficulty, true);
            kv_str(&mut obj, "status", board_status_str(b.status), true);
            kv_copper(&mut obj, "client_deposit", b.client_deposit, false);
            obj.push('}');
            out.push_str(&obj);
        }),
        true,
    );
    kv_raw(
        &mut out,
        "active",
        &array_of(&contracts.active, |a, out| {
            let mut obj = String::from("{");
            kv_id(&mut obj, "id", a.id, true);
            kv_id(&mut obj, "board_contract_id", a.board_contract_id, true);
            kv_int(&mut obj, "taken_day", a.taken_day, true);
            kv_int(&mut obj, "days_remaining", a.days_remaining, true);
            kv_raw(&mut obj, "hero_ids", &id_array(&a.hero_ids), true);
            kv_str(&mut obj, "status", active_status_str(a.status), false);
            obj.push('}');
            out.push_str(&obj);
        }),
        true,
    );
    kv_raw(
        &mut out,
        "returns",
        &array_of(&contracts.returns, |r, out| {
            let mut obj = String::from("{");
            kv_id(&mut obj, "active_contract_id", r.active_contract_id, true);
            kv_id(&mut obj, "board_contract_id", r.board_contract_id, true);
            kv_raw(&mut obj, "hero_ids", &id_array(&r.hero_ids), true);
            kv_int(&mut obj, "resolved_day", r.resolved_day, true);
            kv_str(&mut obj, "outcome", outcome_str(r.outcome), true);
            kv_int(&mut obj, "trophies_count", r.trophies_count, true);
            kv_str(&mut obj, "trophies_quality", quality_str(r.trophies_quality), true);
            kv_raw(&mut obj, "reason_tags", &string_array(&r.reason_tags), true);
            kv_bool(&mut obj, "requires_player_close", r.requires_player_close, true);
            kv_bool(&mut obj, "suspected_theft", r.suspected_theft, false);
            obj.push('}');
            out.push_str(&obj);
        }),
        false,
    );
    out.push('}');
    out
}

fn heroes_json(state: &GameState) -> String {
    let mut out = String::from("{");
    kv_raw(
        &mut out,
        "roster",
        &array_of(&state.heroes.roster, |h, out| {
            let mut obj = String::from("{");
            kv_id(&mut obj, "id", h.id, true);
            kv_str(&mut obj, "name", &h.name, true);
            kv_int(&mut obj, "rank", h.rank.level(), true);
            kv_str(&mut obj, "class", class_str(h.class), true);
            kv_int(&mut obj, "greed", h.greed, true);
            kv_int(&mut obj, "honesty", h.honesty, true);
            kv_int(&mut obj, "courage", h.courage, true);
            kv_str(&mut obj, "status", hero_status_str(h.status), true);
            kv_int(&mut obj, "history_completed", h.history_completed, false);
            obj.push('}');
            out.push_str(&obj);
        }),
        false,
    );
    // arrivals_today intentionally omitted (spec.md section 4.2).
    out.push('}');
    out
}

fn proof_policy_str(p: crate::enums::ProofPolicy) -> &'static str {
    match p {
        crate::enums::ProofPolicy::Fast => "FAST",
        crate::enums::ProofPolicy::Strict => "STRICT",
    }
}
fn salvage_str(s: crate::enums::SalvagePolicy) -> &'static str {
    match s {
        crate::enums::SalvagePolicy::Guild => "GUILD",
        crate::enums::SalvagePolicy::Hero => "HERO",
        crate::enums::SalvagePolicy::Split => "SPLIT",
    }
}
fn board_status_str(s: crate::enums::BoardStatus) -> &'static str {
    match s {
        crate::enums::BoardStatus::Open => "OPEN",
        crate::enums::BoardStatus::Locked => "LOCKED",
        crate::enums::BoardStatus::Completed => "COMPLETED",
    }
}
fn active_status_str(s: crate::enums::ActiveStatus) -> &'static str {
    match s {
        crate::enums::ActiveStatus::Wip => "WIP",
        crate::enums::ActiveStatus::ReturnReady => "RETURN_READY",
        crate::enums::ActiveStatus::Closed => "CLOSED",
    }
}
fn outcome_str(o: crate::enums::Outcome) -> &'static str {
    match o {
        crate::enums::Outcome::Success => "SUCCESS",
        crate::enums::Outcome::Partial => "PARTIAL",
        crate::enums::Outcome::Fail => "FAIL",
        crate::enums::Outcome::Death => "DEATH",
    }
}
fn quality_str(q: crate::enums::Quality) -> &'static str {
    match q {
        crate::enums::Quality::Ok => "OK",
        crate::enums::Quality::Damaged => "DAMAGED",
        crate::enums::Quality::None => "NONE",
    }
}
fn class_str(c: crate::enums::HeroClass) -> &'static str {
    match c {
        crate::enums::HeroClass::Warrior => "WARRIOR",
        crate::enums::HeroClass::Mage => "MAGE",
        crate::enums::HeroClass::Heal => "HEAL",
    }
}
fn hero_status_str(s: crate::enums::HeroStatus) -> &'static str {
    match s {
        crate::enums::HeroStatus::Available => "AVAILABLE",
        crate::enums::HeroStatus::OnMission => "ON_MISSION",
    }
}
fn auto_resolve_bucket_str(b: crate::enums::AutoResolveBucket) -> &'static str {
    match b {
        crate::enums::AutoResolveBucket::Good => "GOOD",
        crate::enums::AutoResolveBucket::Neutral => "NEUTRAL",
        crate::enums::AutoResolveBucket::Bad => "BAD",
    }
}

fn rejection_reason_str(r: crate::validate::RejectionReason) -> &'static str {
    match r {
        crate::validate::RejectionReason::NotFound => "NOT_FOUND",
        crate::validate::RejectionReason::InvalidArgument => "INVALID_ARGUMENT",
        crate::validate::RejectionReason::InvalidState => "INVALID_STATE",
    }
}

/// Encodes a single event's variable-shaped payload as a `data` object,
/// with the envelope fields (`day`, `revision`, `cmd_id`, `seq`, `kind`)
/// fixed across every variant (spec.md section 6).
fn event_json(event: &Event) -> String {
    let mut out = String::from("{");
    kv_int(&mut out, "day", event.day, true);
    kv_u64(&mut out, "revision", event.revision, true);
    kv_int(&mut out, "cmd_id", event.cmd_id, true);
    kv_u64(&mut out, "seq", event.seq, true);
    kv_str(&mut out, "kind", event_kind_name(&event.kind), true);
    kv_raw(&mut out, "data", &event_data_json(&event.kind), false);
    out.push('}');
    out
}

fn event_kind_name(kind: &EventKind) -> &'static str {
    match kind {
        EventKind::CommandRejected { .. } => "CommandRejected",
        EventKind::InvariantViolated { .. } => "InvariantViolated",
        EventKind::DayStarted => "DayStarted",
        EventKind::InboxGenerated { .. } => "InboxGenerated",
        EventKind::HeroesArrived { .. } => "HeroesArrived",
        EventKind::ContractAutoResolved { .. } => "ContractAutoResolved",
        EventKind::StabilityUpdated { .. } => "StabilityUpdated",
        EventKind::HeroDeclined { .. } => "HeroDeclined",
        EventKind::ContractTaken { .. } => "ContractTaken",
        EventKind::WipAdvanced { .. } => "WipAdvanced",
        EventKind::ContractResolved { .. } => "ContractResolved",
        EventKind::TrophyTheftSuspected { .. } => "TrophyTheftSuspected",
        EventKind::HeroDied { .. } => "HeroDied",
        EventKind::ReturnClosed { .. } => "ReturnClosed",
        EventKind::GuildRankUp { .. } => "GuildRankUp",
        EventKind::TaxDue { .. } => "TaxDue",
        EventKind::TaxMissed { .. } => "TaxMissed",
        EventKind::GuildShutdown { .. } => "GuildShutdown",
        EventKind::DayEnded { .. } => "DayEnded",
        EventKind::ContractPosted { .. } => "ContractPosted",
        EventKind::ContractCreated { .. } => "ContractCreated",
        EventKind::ContractUpdated { .. } => "ContractUpdated",
        EventKind::ContractCancelled { .. } => "ContractCancelled",
        EventKind::ProofPolicySet { .. } => "ProofPolicySet",
        EventKind::TrophiesSold { .. } => "TrophiesSold",
        EventKind::TaxPaid { .. } => "TaxPaid",
    }
}

fn event_data_json(kind: &EventKind) -> String {
    let mut out = String::from("{");
    match kind {
        EventKind::CommandRejected {
            reason,
            cmd_type,
            detail,
        } => {
            kv_str(&mut out, "reason", rejection_reason_str(*reason), true);
            kv_str(&mut out, "cmd_type", cmd_type, true);
            kv_str(&mut out, "detail", detail, false);
        }
        EventKind::InvariantViolated { id, details } => {
            kv_str(&mut out, "id", &format!("{:?}", id), true);
            kv_str(&mut out, "details", details, false);
        }
        EventKind::DayStarted => {}
        EventKind::InboxGenerated { draft_ids } => {
            kv_raw(&mut out, "draft_ids", &id_array(draft_ids), false);
        }
        EventKind::HeroesArrived { hero_ids } => {
            kv_raw(&mut out, "hero_ids", &id_array(hero_ids), false);
        }
        EventKind::ContractAutoResolved { draft_id, bucket } => {
            kv_id(&mut out, "draft_id", *draft_id, true);
            kv_str(&mut out, "bucket", auto_resolve_bucket_str(*bucket), false);
        }
        EventKind::StabilityUpdated { old, new } => {
            kv_int(&mut out, "old", *old, true);
            kv_int(&mut out, "new", *new, false);
        }
        EventKind::HeroDeclined {
            hero_id,
            board_id,
            reason,
        } => {
            kv_id(&mut out, "hero_id", *hero_id, true);
            kv_id(&mut out, "board_id", *board_id, true);
            kv_str(&mut out, "reason", reason, false);
        }
        EventKind::ContractTaken {
            active_id,
            board_id,
            hero_ids,
        } => {
            kv_id(&mut out, "active_id", *active_id, true);
            kv_id(&mut out, "board_id", *board_id, true);
            kv_raw(&mut out, "hero_ids", &id_array(hero_ids), false);
        }
        EventKind::WipAdvanced {
            active_id,
            days_remaining,
        } => {
            kv_id(&mut out, "active_id", *active_id, true);
            kv_int(&mut out, "days_remaining", *days_remaining, false);
        }
        EventKind::ContractResolved {
            active_id,
            board_id,
            outcome,
            quality,
            trophies_count,
            requires_player_close,
        } => {
            kv_id(&mut out, "active_id", *active_id, true);
            kv_id(&mut out, "board_id", *board_id, true);
            kv_str(&mut out, "outcome", outcome_str(*outcome), true);
            kv_str(&mut out, "quality", quality_str(*quality), true);
            kv_int(&mut out, "trophies_count", *trophies_count, true);
            kv_bool(&mut out, "requires_player_close", *requires_player_close, false);
        }
        EventKind::TrophyTheftSuspected {
            active_id,
            expected_trophies,
            reported_trophies,
        } => {
            kv_id(&mut out, "active_id", *active_id, true);
            kv_int(&mut out, "expected_trophies", *expected_trophies, true);
            kv_int(&mut out, "reported_trophies", *reported_trophies, false);
        }
        EventKind::HeroDied { hero_id } => {
            kv_id(&mut out, "hero_id", *hero_id, false);
        }
        EventKind::ReturnClosed { active_id, board_id } => {
            kv_id(&mut out, "active_id", *active_id, true);
            kv_id(&mut out, "board_id", *board_id, false);
        }
        EventKind::GuildRankUp { old_level, new_level } => {
            kv_int(&mut out, "old_level", *old_level, true);
            kv_int(&mut out, "new_level", *new_level, false);
        }
        EventKind::TaxDue { amount, due_day } => {
            kv_copper(&mut out, "amount", *amount, true);
            kv_int(&mut out, "due_day", *due_day, false);
        }
        EventKind::TaxMissed {
            missed_count,
            penalty,
        } => {
            kv_int(&mut out, "missed_count", *missed_count, true);
            kv_copper(&mut out, "penalty", *penalty, false);
        }
        EventKind::GuildShutdown { reason } => {
            kv_str(&mut out, "reason", reason, false);
        }
        EventKind::DayEnded { snapshot } => {
            kv_int(&mut out, "day", snapshot.day, true);
            kv_u64(&mut out, "revision", snapshot.revision, true);
            kv_copper(&mut out, "money_copper", snapshot.money_copper, true);
            kv_int(&mut out, "trophies_stock", snapshot.trophies_stock, true);
            kv_int(&mut out, "stability", snapshot.stability, true);
            kv_int(&mut out, "reputation", snapshot.reputation, true);
            kv_int(&mut out, "inbox_count", snapshot.inbox_count as i64, true);
            kv_int(&mut out, "board_count", snapshot.board_count as i64, true);
            kv_int(&mut out, "active_count", snapshot.active_count as i64, true);
            kv_int(&mut out, "returns_count", snapshot.returns_count as i64, false);
        }
        EventKind::ContractPosted { board_id } => {
            kv_id(&mut out, "board_id", *board_id, false);
        }
        EventKind::ContractCreated { board_id } => {
            kv_id(&mut out, "board_id", *board_id, false);
        }
        EventKind::ContractUpdated { contract_id } => {
            kv_id(&mut out, "contract_id", *contract_id, false);
        }
        EventKind::ContractCancelled { contract_id } => {
            kv_id(&mut out, "contract_id", *contract_id, false);
        }
        EventKind::ProofPolicySet { policy } => {
            kv_str(&mut out, "policy", proof_policy_str(*policy), false);
        }
        EventKind::TrophiesSold { amount, proceeds } => {
            kv_int(&mut out, "amount", *amount, true);
            kv_copper(&mut out, "proceeds", *proceeds, false);
        }
        EventKind::TaxPaid { amount } => {
            kv_copper(&mut out, "amount", *amount, false);
        }
    }
    out.push('}');
    out
}

/// Encodes a full event list, preserving emission order (spec.md section
/// 4.2: "events retaining their emission order").
pub fn canonical_events(events: &[Event]) -> String {
    array_of(events, |event, out| out.push_str(&event_json(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn fresh_state_encodes_without_arrivals_today() {
        let state = GameState::new(42);
        let json = canonical_state(&state);
        assert!(!json.contains("arrivals_today"));
        assert!(json.starts_with("{\"meta\":"));
    }

    #[test]
    fn encoding_is_stable_across_calls() {
        let state = GameState::new(7);
        assert_eq!(canonical_state(&state), canonical_state(&state));
    }

    #[test]
    fn empty_event_list_encodes_as_empty_array() {
        assert_eq!(canonical_events(&[]), "[]");
    }
}
