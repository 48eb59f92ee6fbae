pub mod account;
pub mod breakdown;
pub mod money;
pub mod passenger;
pub mod policy;
