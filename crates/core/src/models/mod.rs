pub mod asset;
pub mod history;
pub mod lot;
pub mod price;
pub mod valuation;
