use rust_decimal::Decimal;

use crate::error::PricingError;
use crate::models::policy::{FeeBase, FeePolicy};

/// Apply a fee policy to a base amount. This single implementation serves
/// markup, the volatility buffer, and gateway fees; the result is unrounded.
pub fn apply(policy: &FeePolicy, base_amount: Decimal) -> Result<Decimal, PricingError> {
    policy.validate()?;
    let amount = match *policy {
        FeePolicy::None => Decimal::ZERO,
        FeePolicy::Fixed { amount } => amount,
        FeePolicy::Percentage { percent } => base_amount * percent / Decimal::ONE_HUNDRED,
        FeePolicy::Mixed { percent, fixed } => {
            base_amount * percent / Decimal::ONE_HUNDRED + fixed
        }
    };
    Ok(amount)
}

/// Compute the gateway fee against the caller-selected base. The gateway's
/// identity is not known here; mapping an identifier to a policy is a
/// settings concern.
pub fn gateway_fee(
    policy: &FeePolicy,
    fee_base: FeeBase,
    subtotal: Decimal,
    markup_amount: Decimal,
    buffer_amount: Decimal,
) -> Result<Decimal, PricingError> {
    let base = match fee_base {
        FeeBase::PreFeeTotal => subtotal + markup_amount + buffer_amount,
        FeeBase::BaseOnly => subtotal,
    };
    apply(policy, base)
}
