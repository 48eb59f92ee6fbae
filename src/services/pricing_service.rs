use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::models::breakdown::PriceBreakdown;
use crate::models::money::{round_cents, Currency, Money};
use crate::models::passenger::{AgeCategory, Passenger, PricedPassenger};
use crate::models::policy::{FeeBase, FeePolicy};
use crate::services::{classifier, fee_calculator};

/// Everything one breakdown computation needs, assembled by the caller.
///
/// `fee_base` has no default on purpose: which base the gateway charges on is
/// a merchant-of-record decision and every call site must state it.
/// `reference_date` anchors age classification so the same quote prices
/// identically on the preview and the charge path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingQuote {
    pub base_price_per_person: Decimal,
    pub currency: String,
    pub passengers: Vec<Passenger>,
    pub reference_date: NaiveDate,
    pub markup_policy: FeePolicy,
    pub buffer_policy: FeePolicy,
    pub gateway_fee_policy: FeePolicy,
    pub fee_base: FeeBase,
}

pub struct PricingService;

impl PricingService {
    /// Compute the full monetary breakdown for a booking quote.
    ///
    /// The checkout preview and the final charge path both call this with
    /// identical inputs; the breakdown they see must match to the cent.
    pub fn compute(quote: &PricingQuote) -> Result<PriceBreakdown, PricingError> {
        let currency = Currency::from_code(&quote.currency)?;
        let base = Money::price(quote.base_price_per_person, currency)?;

        let passengers = Self::price_passengers(quote, base.amount)?;
        let subtotal = round_cents(passengers.iter().map(|p| p.price).sum());
        debug!("pricing subtotal: {} {}", subtotal, currency.code());

        let markup_amount = round_cents(fee_calculator::apply(&quote.markup_policy, subtotal)?);
        debug!("markup {:?} -> {}", quote.markup_policy, markup_amount);

        let buffer_amount = round_cents(fee_calculator::apply(
            &quote.buffer_policy,
            subtotal + markup_amount,
        )?);
        debug!("volatility buffer {:?} -> {}", quote.buffer_policy, buffer_amount);

        let gateway_fee_amount = round_cents(fee_calculator::gateway_fee(
            &quote.gateway_fee_policy,
            quote.fee_base,
            subtotal,
            markup_amount,
            buffer_amount,
        )?);
        debug!(
            "gateway fee {:?} on {:?} -> {}",
            quote.gateway_fee_policy, quote.fee_base, gateway_fee_amount
        );

        // Components are already cent-rounded, so the sum is cent-exact.
        let total_amount =
            round_cents(subtotal + markup_amount + buffer_amount + gateway_fee_amount);
        debug!("total: {} {}", total_amount, currency.code());

        Ok(PriceBreakdown::from_rounded(
            currency,
            subtotal,
            markup_amount,
            buffer_amount,
            gateway_fee_amount,
            total_amount,
            passengers,
        ))
    }

    /// Price every passenger against the base fare. An empty passenger list
    /// means a passenger-count-only call; it prices as a single adult.
    fn price_passengers(
        quote: &PricingQuote,
        base_price: Decimal,
    ) -> Result<Vec<PricedPassenger>, PricingError> {
        if quote.passengers.is_empty() {
            return Ok(vec![PricedPassenger {
                category: AgeCategory::Adult,
                multiplier: AgeCategory::Adult.multiplier(),
                price: base_price,
            }]);
        }
        quote
            .passengers
            .iter()
            .map(|p| classifier::price_passenger(base_price, p, quote.reference_date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quote(base: Decimal) -> PricingQuote {
        PricingQuote {
            base_price_per_person: base,
            currency: "USD".to_string(),
            passengers: vec![],
            reference_date: date(2026, 8, 23),
            markup_policy: FeePolicy::None,
            buffer_policy: FeePolicy::None,
            gateway_fee_policy: FeePolicy::None,
            fee_base: FeeBase::PreFeeTotal,
        }
    }

    #[test]
    fn test_chained_percentages() {
        // 10% markup, 3% buffer, 2.9% gateway fee on the pre-fee total.
        let quote = PricingQuote {
            markup_policy: FeePolicy::Percentage { percent: dec!(10) },
            buffer_policy: FeePolicy::Percentage { percent: dec!(3) },
            gateway_fee_policy: FeePolicy::Percentage { percent: dec!(2.9) },
            ..quote(dec!(100.00))
        };
        let breakdown = PricingService::compute(&quote).unwrap();
        assert_eq!(breakdown.subtotal, dec!(100.00));
        assert_eq!(breakdown.markup_amount, dec!(10.00));
        // 3% of 110.00
        assert_eq!(breakdown.volatility_buffer_amount, dec!(3.30));
        // 2.9% of 113.30 = 3.2857, half-up to 3.29
        assert_eq!(breakdown.gateway_fee_amount, dec!(3.29));
        assert_eq!(breakdown.total_amount, dec!(116.59));
        assert_eq!(breakdown.cents.total_amount, 11659);
    }

    #[test]
    fn test_fixed_markup_with_mixed_fee() {
        let quote = PricingQuote {
            markup_policy: FeePolicy::Fixed { amount: dec!(5) },
            gateway_fee_policy: FeePolicy::Mixed { percent: dec!(2), fixed: dec!(0.30) },
            ..quote(dec!(50.00))
        };
        let breakdown = PricingService::compute(&quote).unwrap();
        assert_eq!(breakdown.subtotal, dec!(50.00));
        assert_eq!(breakdown.markup_amount, dec!(5.00));
        assert_eq!(breakdown.volatility_buffer_amount, dec!(0.00));
        // 2% of 55.00 + 0.30
        assert_eq!(breakdown.gateway_fee_amount, dec!(1.40));
        assert_eq!(breakdown.total_amount, dec!(56.40));
    }

    #[test]
    fn test_base_only_fee_ignores_markup() {
        let quote = PricingQuote {
            markup_policy: FeePolicy::Fixed { amount: dec!(10) },
            gateway_fee_policy: FeePolicy::Percentage { percent: dec!(5) },
            fee_base: FeeBase::BaseOnly,
            ..quote(dec!(100.00))
        };
        let breakdown = PricingService::compute(&quote).unwrap();
        // Fee on 100.00, not 110.00.
        assert_eq!(breakdown.gateway_fee_amount, dec!(5.00));
        assert_eq!(breakdown.total_amount, dec!(115.00));
    }

    #[test]
    fn test_negative_base_price_rejected() {
        let quote = PricingQuote {
            markup_policy: FeePolicy::Percentage { percent: dec!(10) },
            ..quote(dec!(-1.00))
        };
        let err = PricingService::compute(&quote).unwrap_err();
        assert!(matches!(err, PricingError::InvalidAmount(_)));
    }

    #[test]
    fn test_unsupported_currency_rejected() {
        let quote = PricingQuote {
            currency: "EUR".to_string(),
            ..quote(dec!(100.00))
        };
        let err = PricingService::compute(&quote).unwrap_err();
        assert_eq!(err, PricingError::UnsupportedCurrency("EUR".to_string()));
    }

    #[test]
    fn test_validation_precedes_classification() {
        // A bad currency fails even when a passenger date is also bad.
        let quote = PricingQuote {
            currency: "EUR".to_string(),
            passengers: vec![Passenger::new(date(2030, 1, 1))],
            ..quote(dec!(100.00))
        };
        let err = PricingService::compute(&quote).unwrap_err();
        assert!(matches!(err, PricingError::UnsupportedCurrency(_)));
    }

    #[test]
    fn test_future_date_of_birth_rejected() {
        let quote = PricingQuote {
            passengers: vec![Passenger::new(date(2030, 1, 1))],
            ..quote(dec!(100.00))
        };
        let err = PricingService::compute(&quote).unwrap_err();
        assert!(matches!(err, PricingError::InvalidDate(_)));
    }

    #[test]
    fn test_no_policies_total_equals_subtotal() {
        let breakdown = PricingService::compute(&quote(dec!(250.00))).unwrap();
        assert_eq!(breakdown.total_amount, breakdown.subtotal);
        assert_eq!(breakdown.total_amount, dec!(250.00));
    }

    #[test]
    fn test_empty_passengers_prices_single_adult() {
        let breakdown = PricingService::compute(&quote(dec!(100.00))).unwrap();
        assert_eq!(breakdown.passengers.len(), 1);
        assert_eq!(breakdown.passengers[0].category, AgeCategory::Adult);
        assert_eq!(breakdown.subtotal, dec!(100.00));
    }

    #[test]
    fn test_mixed_family_subtotal() {
        // Adult + child + infant on a $500 fare: 500 + 375 + 50.
        let quote = PricingQuote {
            passengers: vec![
                Passenger::new(date(1990, 6, 15)),
                Passenger::new(date(2020, 1, 1)),
                Passenger::new(date(2025, 6, 1)),
            ],
            ..quote(dec!(500.00))
        };
        let breakdown = PricingService::compute(&quote).unwrap();
        assert_eq!(breakdown.subtotal, dec!(925.00));
        assert_eq!(breakdown.passengers[2].price, dec!(50.000));
    }

    #[test]
    fn test_additivity_invariant() {
        let quote = PricingQuote {
            passengers: vec![
                Passenger::new(date(1985, 3, 2)),
                Passenger::new(date(2019, 11, 30)),
            ],
            markup_policy: FeePolicy::Percentage { percent: dec!(7.5) },
            buffer_policy: FeePolicy::Percentage { percent: dec!(1.25) },
            gateway_fee_policy: FeePolicy::Mixed { percent: dec!(2.9), fixed: dec!(0.30) },
            ..quote(dec!(123.45))
        };
        let b = PricingService::compute(&quote).unwrap();
        assert_eq!(
            b.total_amount,
            b.subtotal + b.markup_amount + b.volatility_buffer_amount + b.gateway_fee_amount
        );
        assert_eq!(b.cents.total_amount, crate::models::money::to_cents(b.total_amount));
    }

    #[test]
    fn test_deterministic_recomputation() {
        let quote = PricingQuote {
            passengers: vec![Passenger::new(date(2000, 1, 1))],
            markup_policy: FeePolicy::Percentage { percent: dec!(10) },
            buffer_policy: FeePolicy::Percentage { percent: dec!(3) },
            gateway_fee_policy: FeePolicy::Mixed { percent: dec!(2.9), fixed: dec!(0.30) },
            ..quote(dec!(321.99))
        };
        let first = PricingService::compute(&quote).unwrap();
        let second = PricingService::compute(&quote).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_monotonic_in_fee_percent() {
        let base = quote(dec!(200.00));
        let mut totals = Vec::new();
        for percent in [dec!(0), dec!(2.9), dec!(5.4), dec!(10)] {
            let quote = PricingQuote {
                gateway_fee_policy: FeePolicy::Percentage { percent },
                ..base.clone()
            };
            totals.push(PricingService::compute(&quote).unwrap().total_amount);
        }
        for pair in totals.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
