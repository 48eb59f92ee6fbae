use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// One closed policy shape shared by markup, volatility buffer, and gateway
/// fees, so the three never grow divergent arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeePolicy {
    None,
    Fixed { amount: Decimal },
    Percentage { percent: Decimal },
    Mixed { percent: Decimal, fixed: Decimal },
}

impl FeePolicy {
    /// Negative percentages or fixed amounts are a configuration error, never
    /// silently clamped.
    pub fn validate(&self) -> Result<(), PricingError> {
        match *self {
            FeePolicy::None => Ok(()),
            FeePolicy::Fixed { amount } => {
                if amount < Decimal::ZERO {
                    Err(PricingError::InvalidPolicy(format!(
                        "fixed amount must be non-negative, got {}",
                        amount
                    )))
                } else {
                    Ok(())
                }
            }
            FeePolicy::Percentage { percent } => {
                if percent < Decimal::ZERO {
                    Err(PricingError::InvalidPolicy(format!(
                        "percentage must be non-negative, got {}",
                        percent
                    )))
                } else {
                    Ok(())
                }
            }
            FeePolicy::Mixed { percent, fixed } => {
                if percent < Decimal::ZERO || fixed < Decimal::ZERO {
                    Err(PricingError::InvalidPolicy(format!(
                        "mixed policy must be non-negative, got {}% + {}",
                        percent, fixed
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Which amount a gateway fee is charged on. Gateways charge on the amount
/// actually transferred, which may or may not include markup and buffer
/// depending on merchant-of-record configuration, so the caller always picks
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeBase {
    /// Subtotal + markup + volatility buffer.
    PreFeeTotal,
    /// The raw per-person price sum, ignoring markup and buffer.
    BaseOnly,
}
