//! Conversion between stored minor units and decimal amounts.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use sea_orm::DbErr;

/// Number of fraction digits carried by every monetary amount.
pub const MONEY_SCALE: u32 = 2;

/// Converts an amount stored in cents into a decimal with two fraction digits.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

/// Converts a decimal amount into cents, rounding half away from zero.
///
/// # Returns
/// - `Ok(i64)` - Amount in cents
/// - `Err(DbErr::Custom)` - Amount does not fit into an `i64` column
pub fn decimal_to_cents(amount: Decimal) -> Result<i64, DbErr> {
    let rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    (rounded * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| DbErr::Custom(format!("Amount {} is out of range", amount)))
}
