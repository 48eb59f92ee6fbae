use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::account::UserRole;
use crate::models::policy::FeePolicy;

/// Read-only pricing configuration snapshot.
///
/// Callers fetch this once per request (from env, database, or wherever the
/// deployment keeps it) and hand it to the engine; the engine itself performs
/// no I/O. The gateway fee defaults live here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Markup percentage for clients and admins.
    pub default_markup_percent: Decimal,
    /// Markup percentage for agents; falls back to the default when unset.
    pub agent_markup_percent: Option<Decimal>,
    /// Guardrails clamping the resolved markup percentage.
    pub markup_percent_floor: Option<Decimal>,
    pub markup_percent_ceiling: Option<Decimal>,
    /// Volatility buffer percentage; 0 disables the buffer.
    pub volatility_buffer_percent: Decimal,
    /// Gateway fee terms applied unless the gateway is fee-free.
    pub gateway_fee_percent: Decimal,
    pub gateway_fee_fixed: Decimal,
    /// Gateway identifiers that carry no processing fee.
    pub fee_free_gateways: Vec<String>,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            default_markup_percent: dec!(10),
            agent_markup_percent: None,
            markup_percent_floor: None,
            markup_percent_ceiling: None,
            volatility_buffer_percent: Decimal::ZERO,
            gateway_fee_percent: dec!(2.9),
            gateway_fee_fixed: dec!(0.30),
            fee_free_gateways: vec!["zelle".to_string()],
        }
    }
}

impl PricingSettings {
    /// Create settings from environment variables or use defaults.
    /// Malformed values fall back rather than failing checkout.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_markup_percent: std::env::var("PRICING_DEFAULT_MARKUP_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_markup_percent),
            agent_markup_percent: std::env::var("PRICING_AGENT_MARKUP_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok()),
            markup_percent_floor: std::env::var("PRICING_MARKUP_PERCENT_FLOOR")
                .ok()
                .and_then(|s| s.parse().ok()),
            markup_percent_ceiling: std::env::var("PRICING_MARKUP_PERCENT_CEILING")
                .ok()
                .and_then(|s| s.parse().ok()),
            volatility_buffer_percent: std::env::var("PRICING_VOLATILITY_BUFFER_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.volatility_buffer_percent),
            gateway_fee_percent: std::env::var("PRICING_GATEWAY_FEE_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gateway_fee_percent),
            gateway_fee_fixed: std::env::var("PRICING_GATEWAY_FEE_FIXED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gateway_fee_fixed),
            fee_free_gateways: std::env::var("PRICING_FEE_FREE_GATEWAYS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|g| g.trim().to_ascii_lowercase())
                        .filter(|g| !g.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.fee_free_gateways),
        }
    }

    /// The markup percentage for a role. Agents fall back to the default
    /// percentage when no agent percentage is configured; a missing setting
    /// never blocks checkout. Guardrails are applied last.
    pub fn resolve_markup_percent(&self, role: UserRole) -> Decimal {
        let mut percent = match role {
            UserRole::Agent => self
                .agent_markup_percent
                .unwrap_or(self.default_markup_percent),
            UserRole::Client | UserRole::Admin => self.default_markup_percent,
        };
        if let Some(floor) = self.markup_percent_floor {
            percent = percent.max(floor);
        }
        if let Some(ceiling) = self.markup_percent_ceiling {
            percent = percent.min(ceiling);
        }
        percent
    }

    /// The resolved markup as a policy the engine can apply.
    pub fn markup_policy_for(&self, role: UserRole) -> FeePolicy {
        FeePolicy::Percentage {
            percent: self.resolve_markup_percent(role),
        }
    }

    /// The volatility buffer as a policy; disabled when the percentage is 0.
    pub fn volatility_buffer_policy(&self) -> FeePolicy {
        if self.volatility_buffer_percent.is_zero() {
            FeePolicy::None
        } else {
            FeePolicy::Percentage {
                percent: self.volatility_buffer_percent,
            }
        }
    }

    /// Map a gateway identifier to its fee policy. Fee-free gateways get
    /// `FeePolicy::None`; everything else pays the configured terms.
    pub fn gateway_fee_policy(&self, gateway: &str) -> FeePolicy {
        let gateway = gateway.trim().to_ascii_lowercase();
        if self.fee_free_gateways.iter().any(|g| *g == gateway) {
            FeePolicy::None
        } else {
            FeePolicy::Mixed {
                percent: self.gateway_fee_percent,
                fixed: self.gateway_fee_fixed,
            }
        }
    }
}
