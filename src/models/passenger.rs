use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Per-request fare input. Never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub date_of_birth: NaiveDate,
}

impl Passenger {
    pub fn new(date_of_birth: NaiveDate) -> Self {
        Passenger { date_of_birth }
    }

    /// Parse a `YYYY-MM-DD` date of birth as supplied by the booking form.
    pub fn parse(date_of_birth: &str) -> Result<Self, PricingError> {
        NaiveDate::parse_from_str(date_of_birth.trim(), "%Y-%m-%d")
            .map(Passenger::new)
            .map_err(|_| {
                PricingError::InvalidDate(format!("cannot parse '{}'", date_of_birth))
            })
    }
}

/// Fare age bands. Derived per calculation from the date of birth, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Adult,
    Child,
    Infant,
}

impl AgeCategory {
    /// Fraction of the adult fare this band pays.
    pub fn multiplier(&self) -> Decimal {
        match self {
            AgeCategory::Adult => dec!(1.00),
            AgeCategory::Child => dec!(0.75),
            AgeCategory::Infant => dec!(0.10),
        }
    }
}

/// One passenger's line in the breakdown. `price` stays unrounded until the
/// aggregate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedPassenger {
    pub category: AgeCategory,
    pub multiplier: Decimal,
    pub price: Decimal,
}
