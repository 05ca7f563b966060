pub mod market_service;
pub mod valuation_service;
pub mod value_format;
