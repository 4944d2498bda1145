use crate::event::EventKind;
use crate::sequence::SequenceContext;
use crate::state::GameState;
use guild_core::Copper;
use guild_core::TROPHY_SALE_PRICE_COPPER;

/// Sells trophies off the stock for a flat per-unit price. A non-positive
/// `amount` sells the entire stock (spec.md section 9, open question 2).
pub fn sell_trophies(state: &mut GameState, amount: i64, ctx: &mut SequenceContext) {
    let sold = if amount > 0 {
        amount
    } else {
        state.economy.trophies_stock
    };
    state.economy.trophies_stock -= sold;
    let proceeds = Copper(sold * TROPHY_SALE_PRICE_COPPER);
    state.economy.money_copper += proceeds;
    ctx.emit(EventKind::TrophiesSold { amount: sold, proceeds });
}
