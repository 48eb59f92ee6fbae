use thiserror::Error;

/// Everything the pricing engine can reject. Kinds are machine-checkable;
/// the web layer owns any user-facing wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("invalid date of birth: {0}")]
    InvalidDate(String),

    #[error("invalid fee policy: {0}")]
    InvalidPolicy(String),
}
