//! Conversions between decimal amounts (what people type and read) and minor
//! units (what the engine computes with).

use super::Amount;

use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Number of decimal places of the currency, i.e. 100 minor units per major unit.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Largest amount a single record may carry, in minor units.
/// Keeps every sum the engine computes far away from `i64` overflow.
pub const MAX_AMOUNT: Amount = 1_000_000_000_000;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount must be positive, got {0}")]
    NotPositive(Decimal),

    #[error("amount {0} is too large")]
    TooLarge(Decimal),
}

/// Convert a decimal amount to minor units, rounding it to the currency's
/// precision first. Only strictly positive amounts up to [`MAX_AMOUNT`] are
/// accepted.
pub fn to_minor_units(amount: Decimal) -> Result<Amount, MoneyError> {
    let mut rounded = amount.round_dp(CURRENCY_DECIMALS);
    rounded.rescale(CURRENCY_DECIMALS);

    let minor = rounded
        .mantissa()
        .to_i64()
        .filter(|minor| *minor <= MAX_AMOUNT)
        .ok_or(MoneyError::TooLarge(amount))?;

    if minor <= 0 {
        return Err(MoneyError::NotPositive(amount));
    }

    Ok(minor)
}

/// Render minor units as a decimal with the currency's precision, e.g. `-1050`
/// becomes `-10.50`.
pub fn to_major_units(amount: Amount) -> Decimal {
    Decimal::new(amount, CURRENCY_DECIMALS)
}
