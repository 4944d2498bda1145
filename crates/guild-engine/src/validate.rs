use crate::command::Command;
use crate::enums::ActiveStatus;
use crate::state::GameState;
use serde::Serialize;

/// The three stable rejection categories (spec.md section 4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectionReason {
    NotFound,
    InvalidArgument,
    InvalidState,
}

/// A failed validation: reason plus a human-readable detail, carried into
/// the single `CommandRejected` event the reducer emits (spec.md section
/// 4.3).
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub detail: String,
}

impl Rejection {
    fn new(reason: RejectionReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

/// Pure pre-mutation check. Never touches the RNG and never mutates
/// `state`; the reducer calls this before anything else (spec.md section
/// 4.4, step 1).
pub fn validate(state: &GameState, cmd: &Command) -> Result<(), Rejection> {
    match cmd {
        Command::AdvanceDay { .. } => Ok(()),

        Command::PostContract {
            inbox_id, fee, ..
        } => {
            if fee.is_negative() {
                return Err(Rejection::new(
                    RejectionReason::InvalidArgument,
                    "fee must be non-negative",
                ));
            }
            if state.contracts.draft(*inbox_id).is_none() {
                return Err(Rejection::new(
                    RejectionReason::NotFound,
                    format!("no inbox draft with id {inbox_id}"),
                ));
            }
            if state.economy.available() < *fee {
                return Err(Rejection::new(
                    RejectionReason::InvalidState,
                    "insufficient available funds to post this contract",
                ));
            }
            Ok(())
        }

        Command::CloseReturn { active_id, .. } => {
            let packet = state
                .contracts
                .return_for(*active_id)
                .ok_or_else(|| Rejection::new(RejectionReason::NotFound, "no return packet for active id"))?;
            if !packet.requires_player_close {
                return Err(Rejection::new(
                    RejectionReason::InvalidState,
                    "return packet does not require a player close",
                ));
            }
            let board = state
                .contracts
                .board(packet.board_contract_id)
                .ok_or_else(|| {
                    Rejection::new(RejectionReason::NotFound, "board contract for this return is gone")
                })?;
            if state.economy.reserved_copper < board.fee || state.economy.money_copper < board.fee {
                return Err(Rejection::new(
                    RejectionReason::InvalidState,
                    "fee is not fully covered by reserved and available money",
                ));
            }
            Ok(())
        }

        Command::SellTrophies { amount, .. } => {
            if *amount > 0 && state.economy.trophies_stock < *amount {
                return Err(Rejection::new(
                    RejectionReason::InvalidArgument,
                    "not enough trophies in stock",
                ));
            }
            Ok(())
        }

        Command::PayTax { amount, .. } => {
            if *amount <= guild_core::Copper::ZERO {
                return Err(Rejection::new(
                    RejectionReason::InvalidArgument,
                    "tax payment must be positive",
                ));
            }
            if state.economy.money_copper < *amount {
                return Err(Rejection::new(
                    RejectionReason::InvalidState,
                    "insufficient money to pay tax",
                ));
            }
            Ok(())
        }

        Command::SetProofPolicy { .. } => Ok(()),

        Command::CreateContract {
            base_difficulty,
            fee_offered,
            ..
        } => {
            if *base_difficulty <= 0 {
                return Err(Rejection::new(
                    RejectionReason::InvalidArgument,
                    "base_difficulty must be positive",
                ));
            }
            if fee_offered.is_negative() {
                return Err(Rejection::new(
                    RejectionReason::InvalidArgument,
                    "fee_offered must be non-negative",
                ));
            }
            Ok(())
        }

        Command::UpdateContractTerms { contract_id, .. } => {
            if state.contracts.board(*contract_id).is_none() {
                return Err(Rejection::new(
                    RejectionReason::NotFound,
                    format!("no board contract with id {contract_id}"),
                ));
            }
            Ok(())
        }

        Command::CancelContract { contract_id, .. } => {
            let board = state.contracts.board(*contract_id).ok_or_else(|| {
                Rejection::new(RejectionReason::NotFound, format!("no board contract with id {contract_id}"))
            })?;
            if state
                .contracts
                .active
                .iter()
                .any(|a| a.board_contract_id == board.id && a.status != ActiveStatus::Closed)
            {
                return Err(Rejection::new(
                    RejectionReason::InvalidState,
                    "cannot cancel a contract with an in-flight active child",
                ));
            }
            Ok(())
        }
    }
}
