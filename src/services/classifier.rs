use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::PricingError;
use crate::models::passenger::{AgeCategory, Passenger, PricedPassenger};

/// Birthday not yet reached this year means the year doesn't count.
const INFANT_BELOW_YEARS: i32 = 2;
const CHILD_BELOW_YEARS: i32 = 12;

/// Classify a passenger by whole-year age at the reference date.
///
/// Referentially transparent: the same `(date_of_birth, reference_date)` pair
/// always yields the same category.
pub fn classify(
    date_of_birth: NaiveDate,
    reference_date: NaiveDate,
) -> Result<AgeCategory, PricingError> {
    if date_of_birth > reference_date {
        return Err(PricingError::InvalidDate(format!(
            "date of birth {} is after {}",
            date_of_birth, reference_date
        )));
    }

    let mut age = reference_date.year() - date_of_birth.year();
    if (reference_date.month(), reference_date.day())
        < (date_of_birth.month(), date_of_birth.day())
    {
        age -= 1;
    }

    let category = if age < INFANT_BELOW_YEARS {
        AgeCategory::Infant
    } else if age < CHILD_BELOW_YEARS {
        AgeCategory::Child
    } else {
        AgeCategory::Adult
    };
    Ok(category)
}

/// Price one passenger against the base per-person fare. The result is left
/// unrounded; rounding happens once at the aggregate step.
pub fn price_passenger(
    base_price_per_person: Decimal,
    passenger: &Passenger,
    reference_date: NaiveDate,
) -> Result<PricedPassenger, PricingError> {
    let category = classify(passenger.date_of_birth, reference_date)?;
    let multiplier = category.multiplier();
    Ok(PricedPassenger {
        category,
        multiplier,
        price: base_price_per_person * multiplier,
    })
}
