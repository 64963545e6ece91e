//! Stay price derivation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::server::{model::reservation::StayDates, util::money::MONEY_SCALE};

/// Total price of a stay: nightly rate times number of nights.
///
/// The result is rounded to two decimal places, midpoint away from zero. `StayDates`
/// guarantees at least one night.
pub fn total_price(nightly_rate: Decimal, stay: &StayDates) -> Decimal {
    (nightly_rate * Decimal::from(stay.nights()))
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
