pub mod classifier;
pub mod fee_calculator;
pub mod pricing_service;
pub mod settings;
