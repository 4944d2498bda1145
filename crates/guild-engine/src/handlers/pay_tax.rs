use crate::event::EventKind;
use crate::sequence::SequenceContext;
use crate::state::GameState;
use guild_core::Copper;

/// Applies a tax payment against the outstanding penalty first, then the
/// base amount due (spec.md section 4.5.4, `PayTax`).
pub fn pay_tax(state: &mut GameState, amount: Copper, ctx: &mut SequenceContext) {
    state.economy.money_copper -= amount;

    let mut remaining = amount;
    let penalty_paid = Copper(remaining.get().min(state.meta.tax_penalty.get()));
    state.meta.tax_penalty -= penalty_paid;
    remaining -= penalty_paid;

    let due_paid = Copper(remaining.get().min(state.meta.tax_amount_due.get()));
    state.meta.tax_amount_due -= due_paid;

    ctx.emit(EventKind::TaxPaid { amount });
}
