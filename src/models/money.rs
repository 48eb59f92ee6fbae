use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Monetary values are rounded to 2 decimal places, half-up.
pub const CENT_PLACES: u32 = 2;

/// Currencies the platform settles in. Currently USD only; anything else is
/// rejected at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
}

impl Currency {
    pub fn from_code(code: &str) -> Result<Self, PricingError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            other => Err(PricingError::UnsupportedCurrency(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
        }
    }
}

/// A currency-tagged amount. Constructed fresh per calculation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    /// A price amount. Negative values are a caller error, not a valid state.
    pub fn price(amount: Decimal, currency: Currency) -> Result<Self, PricingError> {
        if amount < Decimal::ZERO {
            return Err(PricingError::InvalidAmount(format!(
                "price must be non-negative, got {}",
                amount
            )));
        }
        Ok(Money { amount, currency })
    }

    /// The amount rounded at the cent boundary.
    pub fn rounded(&self) -> Decimal {
        round_cents(self.amount)
    }

    /// Integer cents of the already-rounded amount.
    pub fn cents(&self) -> i64 {
        to_cents(self.rounded())
    }
}

/// Half-up rounding at the cent boundary.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Integer cents of an already cent-rounded decimal.
pub fn to_cents(rounded: Decimal) -> i64 {
    (rounded * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}
