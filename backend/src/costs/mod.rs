//! Rate Card and Schema Documentation
//!
//! This module provides:
//! - Rate configuration (`RateCard`, `PartyRates`, `PackageRates`)
//! - Self-documenting schema for every rate (`schema_docs`)
//!
//! Rate documentation lives in `schema_docs.rs` and is printed by the
//! CLI command `trip-planner rate-schema`.

pub mod rates;
pub mod schema_docs;

// Re-exports
pub use rates::{PackageRates, PartyRates, RateCard, RateCardError};
pub use schema_docs::{
    get_rate_schema, rate_schema, RateCategory, RateElement, RateExample, RateSchemaDoc,
    RateSchemaDocumented,
};
