use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::money::{to_cents, Currency};
use crate::models::passenger::PricedPassenger;

/// Integer-cent mirror of the breakdown, for callers (the gateway charge
/// path) that work in minor units. Each field is converted from its own
/// already-rounded decimal, never derived by summing other cent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdownCents {
    pub subtotal: i64,
    pub markup_amount: i64,
    pub volatility_buffer_amount: i64,
    pub gateway_fee_amount: i64,
    pub total_amount: i64,
}

/// The full monetary breakdown of one booking quote. Every money field is
/// cent-rounded; `total_amount` equals the sum of the four components exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub currency: Currency,
    pub subtotal: Decimal,
    pub markup_amount: Decimal,
    pub volatility_buffer_amount: Decimal,
    pub gateway_fee_amount: Decimal,
    pub total_amount: Decimal,
    pub passengers: Vec<PricedPassenger>,
    pub cents: PriceBreakdownCents,
}

impl PriceBreakdown {
    /// Assemble the breakdown from already cent-rounded components, filling
    /// in the cent mirror field by field.
    pub fn from_rounded(
        currency: Currency,
        subtotal: Decimal,
        markup_amount: Decimal,
        volatility_buffer_amount: Decimal,
        gateway_fee_amount: Decimal,
        total_amount: Decimal,
        passengers: Vec<PricedPassenger>,
    ) -> Self {
        let cents = PriceBreakdownCents {
            subtotal: to_cents(subtotal),
            markup_amount: to_cents(markup_amount),
            volatility_buffer_amount: to_cents(volatility_buffer_amount),
            gateway_fee_amount: to_cents(gateway_fee_amount),
            total_amount: to_cents(total_amount),
        };
        PriceBreakdown {
            currency,
            subtotal,
            markup_amount,
            volatility_buffer_amount,
            gateway_fee_amount,
            total_amount,
            passengers,
            cents,
        }
    }
}
