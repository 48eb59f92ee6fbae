//! Booking pricing engine for the FarePath travel platform.
//!
//! Pure computation only: the caller supplies a base fare, passengers, the
//! resolved fee policies, and a settings snapshot; the engine returns a
//! cent-exact [`PriceBreakdown`]. The checkout preview and the charge path
//! must call [`PricingService::compute`] with identical inputs so the amount
//! previewed is the amount charged.

pub mod error;
pub mod models;
pub mod services;

pub use error::PricingError;
pub use models::account::UserRole;
pub use models::breakdown::{PriceBreakdown, PriceBreakdownCents};
pub use models::money::{Currency, Money};
pub use models::passenger::{AgeCategory, Passenger, PricedPassenger};
pub use models::policy::{FeeBase, FeePolicy};
pub use services::pricing_service::{PricingQuote, PricingService};
pub use services::settings::PricingSettings;
