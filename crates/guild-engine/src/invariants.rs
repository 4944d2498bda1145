use crate::enums::ActiveStatus;
use crate::enums::BoardStatus;
use crate::enums::HeroStatus;
use crate::state::GameState;
use serde::Serialize;

/// Closed enumeration of everything the verifier can report (spec.md
/// section 4.6: "identifiers are drawn from a closed enumeration").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum InvariantId {
    IdsContractCounterMonotonic,
    IdsHeroCounterMonotonic,
    IdsActiveCounterMonotonic,
    ContractsLockedBoardHasNonClosedActive,
    ContractsReturnReadyHasReturnPacket,
    ContractsReturnPacketReferencesExistingActive,
    ContractsWipDaysRemainingRange,
    ContractsActiveDaysRemainingNonnegative,
    ContractsClientDepositLeFee,
    HeroesOnMissionInExactlyOneUnit,
    HeroesWipReferenceHasOnMissionStatus,
    EconomyMoneyNonnegative,
    EconomyTrophiesNonnegative,
    EconomyReservedNonnegative,
    EconomyAvailableNonnegative,
    RegionStabilityRange,
    GuildReputationRange,
}

/// One detected inconsistency: a stable id plus a human-readable detail
/// built only from observed values (spec.md section 4.6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub id: InvariantId,
    pub details: String,
}

fn violation(id: InvariantId, details: impl Into<String>) -> Violation {
    Violation {
        id,
        details: details.into(),
    }
}

/// Maps state to a deterministically ordered list of violations. Never
/// reads the RNG, never mutates `state` (spec.md section 4.6). Called
/// once per step, after the handler or pipeline has produced a candidate
/// next state (spec.md section 4.4, step 5).
pub fn verify_invariants(state: &GameState) -> Vec<Violation> {
    let mut out = Vec::new();

    check_id_counters(state, &mut out);
    check_contracts(state, &mut out);
    check_heroes(state, &mut out);
    check_economy(state, &mut out);
    check_region(state, &mut out);
    check_guild(state, &mut out);

    out
}

fn check_id_counters(state: &GameState, out: &mut Vec<Violation>) {
    for draft in &state.contracts.inbox {
        if !state.meta.next_contract_id.has_issued(draft.id) {
            out.push(violation(
                InvariantId::IdsContractCounterMonotonic,
                format!("draft id {} was never issued by next_contract_id", draft.id),
            ));
        }
    }
    for board in &state.contracts.board {
        if !state.meta.next_contract_id.has_issued(board.id.cast()) {
            out.push(violation(
                InvariantId::IdsContractCounterMonotonic,
                format!("board id {} was never issued by next_contract_id", board.id),
            ));
        }
    }
    for hero in &state.heroes.roster {
        if !state.meta.next_hero_id.has_issued(hero.id) {
            out.push(violation(
                InvariantId::IdsHeroCounterMonotonic,
                format!("hero id {} was never issued by next_hero_id", hero.id),
            ));
        }
    }
    for active in &state.contracts.active {
        if !state.meta.next_active_id.has_issued(active.id) {
            out.push(violation(
                InvariantId::IdsActiveCounterMonotonic,
                format!("active id {} was never issued by next_active_id", active.id),
            ));
        }
    }
}

fn check_contracts(state: &GameState, out: &mut Vec<Violation>) {
    for board in &state.contracts.board {
        if board.status == BoardStatus::Locked {
            let count = state.contracts.non_closed_child_count(board.id);
            if count != 1 {
                out.push(violation(
                    InvariantId::ContractsLockedBoardHasNonClosedActive,
                    format!(
                        "board {} is LOCKED but has {} non-closed active children (expected exactly 1)",
                        board.id, count
                    ),
                ));
            }
        }
        if board.client_deposit > board.fee {
            out.push(violation(
                InvariantId::ContractsClientDepositLeFee,
                format!(
                    "board {} has client_deposit {} exceeding fee {}",
                    board.id, board.client_deposit, board.fee
                ),
            ));
        }
    }

    for active in &state.contracts.active {
        if active.days_remaining < 0 {
            out.push(violation(
                InvariantId::ContractsActiveDaysRemainingNonnegative,
                format!(
                    "active {} has negative days_remaining {}",
                    active.id, active.days_remaining
                ),
            ));
        }
        if active.status == ActiveStatus::Wip && !(1..=2).contains(&active.days_remaining) {
            out.push(violation(
                InvariantId::ContractsWipDaysRemainingRange,
                format!(
                    "WIP active {} has days_remaining {} outside {{1,2}}",
                    active.id, active.days_remaining
                ),
            ));
        }
        if active.status == ActiveStatus::ReturnReady && state.contracts.return_for(active.id).is_none() {
            out.push(violation(
                InvariantId::ContractsReturnReadyHasReturnPacket,
                format!("active {} is RETURN_READY but has no return packet", active.id),
            ));
        }
    }

    for packet in &state.contracts.returns {
        if state.contracts.active(packet.active_contract_id).is_none() {
            out.push(violation(
                InvariantId::ContractsReturnPacketReferencesExistingActive,
                format!(
                    "return packet references active {} which no longer exists",
                    packet.active_contract_id
                ),
            ));
        }
    }
}

fn check_heroes(state: &GameState, out: &mut Vec<Violation>) {
    for hero in &state.heroes.roster {
        if hero.status != HeroStatus::OnMission {
            continue;
        }
        let wip_count = state
            .contracts
            .active
            .iter()
            .filter(|a| a.status == ActiveStatus::Wip && a.hero_ids.contains(&hero.id))
            .count();
        let return_ready_count = state
            .contracts
            .active
            .iter()
            .filter(|a| a.status == ActiveStatus::ReturnReady && a.hero_ids.contains(&hero.id))
            .count();
        let in_flight = wip_count + return_ready_count;
        if in_flight != 1 {
            out.push(violation(
                InvariantId::HeroesOnMissionInExactlyOneUnit,
                format!(
                    "hero {} is ON_MISSION but referenced by {} in-flight units (expected exactly 1)",
                    hero.id, in_flight
                ),
            ));
        }
    }

    for active in &state.contracts.active {
        if active.status != ActiveStatus::Wip {
            continue;
        }
        for &hero_id in &active.hero_ids {
            match state.heroes.hero(hero_id) {
                Some(hero) if hero.status == HeroStatus::OnMission => {}
                Some(hero) => out.push(violation(
                    InvariantId::HeroesWipReferenceHasOnMissionStatus,
                    format!(
                        "hero {} is referenced by WIP active {} but has status {:?}",
                        hero_id, active.id, hero.status
                    ),
                )),
                None => out.push(violation(
                    InvariantId::HeroesWipReferenceHasOnMissionStatus,
                    format!(
                        "WIP active {} references hero {} who is no longer on the roster",
                        active.id, hero_id
                    ),
                )),
            }
        }
    }
}

fn check_economy(state: &GameState, out: &mut Vec<Violation>) {
    let economy = &state.economy;
    if economy.money_copper.is_negative() {
        out.push(violation(
            InvariantId::EconomyMoneyNonnegative,
            format!("money_copper is {}", economy.money_copper),
        ));
    }
    if economy.trophies_stock < 0 {
        out.push(violation(
            InvariantId::EconomyTrophiesNonnegative,
            format!("trophies_stock is {}", economy.trophies_stock),
        ));
    }
    if economy.reserved_copper.is_negative() {
        out.push(violation(
            InvariantId::EconomyReservedNonnegative,
            format!("reserved_copper is {}", economy.reserved_copper),
        ));
    }
    if economy.available().is_negative() {
        out.push(violation(
            InvariantId::EconomyAvailableNonnegative,
            format!(
                "money_copper {} is less than reserved_copper {}",
                economy.money_copper, economy.reserved_copper
            ),
        ));
    }
}

fn check_region(state: &GameState, out: &mut Vec<Violation>) {
    if !(0..=100).contains(&state.region.stability) {
        out.push(violation(
            InvariantId::RegionStabilityRange,
            format!("stability is {}", state.region.stability),
        ));
    }
}

fn check_guild(state: &GameState, out: &mut Vec<Violation>) {
    if !(0..=100).contains(&state.guild.reputation) {
        out.push(violation(
            InvariantId::GuildReputationRange,
            format!("reputation is {}", state.guild.reputation),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActiveContract;
    use crate::state::BoardContract;
    use crate::state::Contracts;
    use crate::enums::SalvagePolicy;
    use guild_core::Copper;
    use guild_core::Id;

    #[test]
    fn locked_board_with_no_in_flight_child_is_flagged() {
        let mut state = GameState::new(42);
        state.contracts = Contracts {
            board: vec![BoardContract {
                id: Id::new(1),
                posted_day: 0,
                title: "t".into(),
                rank: crate::enums::Rank::F,
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

        let violations = verify_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| v.id == InvariantId::ContractsLockedBoardHasNonClosedActive));
    }

    #[test]
    fn fresh_state_has_no_violations() {
        let state = GameState::new(7);
        assert!(verify_invariants(&state).is_empty());
    }
}
