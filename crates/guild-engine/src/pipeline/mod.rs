//! The nine-phase day-advance pipeline (spec.md section 4.5). Phase order
//! is fixed and is part of the replay hash; within a phase, collections
//! are walked in ascending-id order.

pub mod attractiveness;
pub mod close;
pub mod pricing;
pub mod resolution;
pub mod settlement;
pub mod tax;
pub mod theft;
pub mod threat;

use crate::enums::ActiveStatus;
use crate::enums::AutoResolveBucket;
use crate::enums::BoardStatus;
use crate::enums::HeroClass;
use crate::enums::HeroStatus;
use crate::enums::Outcome;
use crate::event::DaySnapshot;
use crate::event::EventKind;
use crate::rng::Rng;
use crate::rng::RngError;
use crate::sequence::SequenceContext;
use crate::state::ActiveContract;
use crate::state::ContractDraft;
use crate::state::GameState;
use crate::state::Hero;
use crate::state::ReturnPacket;
use guild_core::ACTIVE_CONTRACT_DAYS;
use guild_core::AUTO_RESOLVE_DAYS;
use guild_core::CLIENT_PAYS_CHANCE_PERCENT;
use guild_core::CLIENT_PAYS_FRACTION_BP;
use guild_core::HERO_MULTIPLIER_BASE;
use guild_core::RANK_MULTIPLIER_BASE;
use guild_core::STABILITY_PENALTY_BAD_AUTO_RESOLVE;
use guild_core::TAX_INTERVAL_DAYS;
use guild_core::TAX_MAX_MISSED;
use guild_core::TAX_PENALTY_PERCENT;

/// Inbox and hero arrival counts both scale as `base * inbox_multiplier`,
/// where the multiplier is `1` at rank F and climbs one step per rank
/// (spec.md section 4.5, Phase 1 and Phase 2).
fn inbox_multiplier(rank: crate::enums::Rank) -> i64 {
    rank.ordinal() as i64 + 1
}

/// Runs the full day tick and returns the new state (spec.md section 4.5:
/// "a single day tick is a nine-phase pipeline ... applied atomically").
pub fn advance_day(mut state: GameState, rng: &mut Rng, ctx: &mut SequenceContext) -> Result<GameState, RngError> {
    phase0_day_start(&mut state, ctx);
    phase1_inbox_generation(&mut state, rng, ctx)?;
    phase2_hero_arrivals(&mut state, rng, ctx)?;
    phase3_inbox_auto_resolve(&mut state, rng, ctx)?;
    phase4_pickup(&mut state, ctx);
    let (successes, failures) = phase5_wip_progression(&mut state, rng, ctx)?;
    phase6_stability_update(&mut state, successes, failures, ctx);
    phase7_tax_evaluation(&mut state, ctx);
    phase8_day_end(&mut state, ctx);
    Ok(state)
}

/// `day_index` is incremented by the reducer before this pipeline runs,
/// so that every event's `day` field (including `DayStarted`) reflects
/// the day that is actually advancing (spec.md section 4.5, Phase 0).
fn phase0_day_start(state: &mut GameState, ctx: &mut SequenceContext) {
    state.heroes.arrivals_today.clear();
    ctx.emit(EventKind::DayStarted);
}

fn phase1_inbox_generation(state: &mut GameState, rng: &mut Rng, ctx: &mut SequenceContext) -> Result<(), RngError> {
    let n_inbox = RANK_MULTIPLIER_BASE * inbox_multiplier(state.guild.rank);
    let mut generated = Vec::with_capacity(n_inbox as usize);
    for _ in 0..n_inbox {
        let fee_offered = pricing::sample_payout_copper(state.guild.rank, rng)?;
        let client_pays = rng.chance_percent(CLIENT_PAYS_CHANCE_PERCENT)?;
        let client_deposit = if client_pays {
            fee_offered.mul_bp(CLIENT_PAYS_FRACTION_BP)
        } else {
            guild_core::Copper::ZERO
        };
        let base_difficulty = threat::sample_base_difficulty(state.region.stability, rng)?;
        let id = state.meta.next_contract_id.issue();
        let draft = ContractDraft {
            id,
            created_day: state.meta.day_index,
            next_auto_resolve_day: state.meta.day_index + AUTO_RESOLVE_DAYS,
            title: format!("Contract #{id}"),
            rank_suggested: state.guild.rank,
            fee_offered,
            salvage: crate::enums::SalvagePolicy::Guild,
            base_difficulty,
            client_deposit,
        };
        generated.push(draft.id);
        state.contracts.inbox.push(draft);
    }
    ctx.emit(EventKind::InboxGenerated { draft_ids: generated });
    Ok(())
}

fn phase2_hero_arrivals(state: &mut GameState, rng: &mut Rng, ctx: &mut SequenceContext) -> Result<(), RngError> {
    let n_heroes = HERO_MULTIPLIER_BASE * inbox_multiplier(state.guild.rank);
    let mut arrived = Vec::with_capacity(n_heroes as usize);
    for _ in 0..n_heroes {
        let class_roll = rng.next_int(3)?;
        let class = match class_roll {
            0 => HeroClass::Warrior,
            1 => HeroClass::Mage,
            _ => HeroClass::Heal,
        };
        let rank_level = rng.range(1, state.guild.rank.level() + 1)?;
        let rank = crate::enums::Rank::from_level(rank_level).expect("range bounded by a valid rank level");
        let greed = rng.next_int(101)?;
        let honesty = rng.next_int(101)?;
        let courage = rng.next_int(101)?;
        let id = state.meta.next_hero_id.issue();
        let hero = Hero {
            id,
            name: format!("Hero #{id}"),
            rank,
            class,
            greed,
            honesty,
            courage,
            status: HeroStatus::Available,
            history_completed: 0,
        };
        arrived.push(hero.id);
        state.heroes.roster.push(hero);
    }
    state.heroes.arrivals_today = arrived.clone();
    ctx.emit(EventKind::HeroesArrived { hero_ids: arrived });
    Ok(())
}

fn phase3_inbox_auto_resolve(state: &mut GameState, rng: &mut Rng, ctx: &mut SequenceContext) -> Result<(), RngError> {
    let due: Vec<_> = state
        .contracts
        .inbox
        .iter()
        .filter(|d| d.next_auto_resolve_day <= state.meta.day_index)
        .map(|d| d.id)
        .collect();

    let mut penalty = 0i64;
    for draft_id in due {
        let roll = rng.next_int(3)?;
        let bucket = match roll {
            0 => AutoResolveBucket::Good,
            1 => AutoResolveBucket::Neutral,
            _ => AutoResolveBucket::Bad,
        };
        ctx.emit(EventKind::ContractAutoResolved { draft_id, bucket });
        match bucket {
            AutoResolveBucket::Good => state.contracts.remove_draft(draft_id),
            AutoResolveBucket::Neutral => {
                if let Some(draft) = state.contracts.draft_mut(draft_id) {
                    draft.next_auto_resolve_day = state.meta.day_index + AUTO_RESOLVE_DAYS;
                }
            }
            AutoResolveBucket::Bad => {
                state.contracts.remove_draft(draft_id);
                penalty += STABILITY_PENALTY_BAD_AUTO_RESOLVE;
            }
        }
    }
    if penalty != 0 {
        let (old, new) = state.region.apply_delta(-penalty);
        ctx.emit(EventKind::StabilityUpdated { old, new });
    }
    Ok(())
}

fn phase4_pickup(state: &mut GameState, ctx: &mut SequenceContext) {
    let arrivals = state.heroes.arrivals_today.clone();
    for hero_id in arrivals {
        let board_id = match state
            .contracts
            .board
            .iter()
            .find(|b| b.status == BoardStatus::Open)
        {
            Some(board) => board.id,
            None => continue,
        };
        let hero = state.heroes.hero(hero_id).expect("arrival is on the roster").clone();
        let board = state.contracts.board(board_id).expect("just looked it up").clone();
        let score = attractiveness::score(board.fee, board.salvage, board.base_difficulty, &hero);
        if score < 0 {
            let reason = attractiveness::decline_reason(board.fee, board.salvage, board.base_difficulty, &hero);
            ctx.emit(EventKind::HeroDeclined {
                hero_id,
                board_id,
                reason,
            });
            continue;
        }
        let active_id = state.meta.next_active_id.issue();
        state.contracts.active.push(ActiveContract {
            id: active_id,
            board_contract_id: board_id,
            taken_day: state.meta.day_index,
            days_remaining: ACTIVE_CONTRACT_DAYS,
            hero_ids: vec![hero_id],
            status: ActiveStatus::Wip,
        });
        if let Some(board) = state.contracts.board_mut(board_id) {
            board.status = BoardStatus::Locked;
        }
        if let Some(hero) = state.heroes.hero_mut(hero_id) {
            hero.status = HeroStatus::OnMission;
        }
        ctx.emit(EventKind::ContractTaken {
            active_id,
            board_id,
            hero_ids: vec![hero_id],
        });
    }
}

/// Returns `(successes, failures)` among resolutions that auto-closed
/// this phase, feeding Phase 6's stability delta (spec.md section 4.5,
/// Phase 6).
fn phase5_wip_progression(
    state: &mut GameState,
    rng: &mut Rng,
    ctx: &mut SequenceContext,
) -> Result<(i64, i64), RngError> {
    let mut successes = 0i64;
    let mut failures = 0i64;

    let wip_ids: Vec<_> = state
        .contracts
        .active
        .iter()
        .filter(|a| a.status == ActiveStatus::Wip)
        .map(|a| a.id)
        .collect();

    for active_id in wip_ids {
        let days_remaining = {
            let active = state.contracts.active_mut(active_id).expect("id came from this vec");
            active.days_remaining -= 1;
            active.days_remaining
        };
        ctx.emit(EventKind::WipAdvanced {
            active_id,
            days_remaining,
        });
        if days_remaining > 0 {
            continue;
        }

        let active = state.contracts.active(active_id).expect("still present").clone();
        let board = state
            .contracts
            .board(active.board_contract_id)
            .expect("active always references a live board")
            .clone();
        let hero_id = active.hero_ids.first().copied();
        let hero = hero_id.and_then(|id| state.heroes.hero(id));

        let power = resolution::hero_power(hero);
        let table = resolution::chance_table(power, board.base_difficulty);
        let outcome = resolution::roll_outcome(&table, rng)?;
        let quality = resolution::roll_quality(rng)?;
        let expected_trophies = resolution::roll_trophies(outcome, rng)?;

        let mut suspected_theft = false;
        let mut reported_trophies = expected_trophies;
        if outcome != Outcome::Death {
            if let Some(hero) = hero {
                let roll = theft::roll(expected_trophies, hero.greed, board.salvage, rng)?;
                suspected_theft = roll.suspected;
                reported_trophies = roll.reported_trophies;
            }
        }

        match outcome {
            Outcome::Success => successes += 1,
            Outcome::Fail | Outcome::Death => failures += 1,
            Outcome::Partial => {}
        }

        let requires_player_close = outcome == Outcome::Partial;
        ctx.emit(EventKind::ContractResolved {
            active_id,
            board_id: board.id,
            outcome,
            quality,
            trophies_count: reported_trophies,
            requires_player_close,
        });
        if suspected_theft {
            ctx.emit(EventKind::TrophyTheftSuspected {
                active_id,
                expected_trophies,
                reported_trophies,
            });
        }

        state.contracts.returns.push(ReturnPacket {
            active_contract_id: active_id,
            board_contract_id: board.id,
            hero_ids: active.hero_ids.clone(),
            resolved_day: state.meta.day_index,
            outcome,
            trophies_count: reported_trophies,
            trophies_quality: quality,
            reason_tags: Vec::new(),
            requires_player_close,
            suspected_theft,
        });

        if requires_player_close {
            if let Some(active) = state.contracts.active_mut(active_id) {
                active.status = ActiveStatus::ReturnReady;
            }
        } else {
            close::finalize_close(
                state,
                ctx,
                close::Close {
                    active_id,
                    board_id: board.id,
                    hero_ids: active.hero_ids.clone(),
                    outcome,
                    fee: board.fee,
                    salvage: board.salvage,
                    reported_trophies,
                },
            );
        }
    }

    Ok((successes, failures))
}

fn phase6_stability_update(state: &mut GameState, successes: i64, failures: i64, ctx: &mut SequenceContext) {
    let delta = successes - failures;
    if delta != 0 {
        let (old, new) = state.region.apply_delta(delta);
        if old != new {
            ctx.emit(EventKind::StabilityUpdated { old, new });
        }
    }
}

fn phase7_tax_evaluation(state: &mut GameState, ctx: &mut SequenceContext) {
    if state.meta.day_index < state.meta.tax_due_day {
        return;
    }
    let owed = state.meta.tax_amount_due + state.meta.tax_penalty;
    if owed > guild_core::Copper::ZERO {
        state.meta.tax_missed_count += 1;
        state.meta.tax_penalty += state.meta.tax_amount_due.mul_bp(TAX_PENALTY_PERCENT * 100);
        ctx.emit(EventKind::TaxMissed {
            missed_count: state.meta.tax_missed_count,
            penalty: state.meta.tax_penalty,
        });
        if state.meta.tax_missed_count >= TAX_MAX_MISSED {
            log::warn!("guild shutting down: {} missed tax payments", state.meta.tax_missed_count);
            ctx.emit(EventKind::GuildShutdown {
                reason: "tax_evasion",
            });
        }
    }
    state.meta.tax_due_day += TAX_INTERVAL_DAYS;
    state.meta.tax_amount_due = tax::amount_due(state.guild.rank);
    ctx.emit(EventKind::TaxDue {
        amount: state.meta.tax_amount_due,
        due_day: state.meta.tax_due_day,
    });
}

fn phase8_day_end(state: &mut GameState, ctx: &mut SequenceContext) {
    let snapshot = DaySnapshot {
        day: state.meta.day_index,
        revision: state.meta.revision,
        money_copper: state.economy.money_copper,
        trophies_stock: state.economy.trophies_stock,
        stability: state.region.stability,
        reputation: state.guild.reputation,
        inbox_count: state.contracts.inbox.len(),
        board_count: state.contracts.board.len(),
        active_count: state.contracts.active.len(),
        returns_count: state.contracts.returns.len(),
    };
    ctx.emit(EventKind::DayEnded { snapshot });
}
