//! Entity cleaners for raw university records.
//!
//! Every raw entity table passes through exactly one [`EntityCleaner`], which
//! applies deterministic repair rules and returns the cleaned frame with a
//! [`CleanReport`](dwh_model::CleanReport) describing every dropped or
//! repaired row.
//!
//! # Example
//!
//! ```ignore
//! use dwh_clean::clean_entity;
//! use dwh_model::Entity;
//!
//! let outcome = clean_entity(Entity::Student, &raw_students)?;
//! assert!(outcome.report.is_balanced());
//! ```

mod cleaner_trait;
mod cleaners;
pub mod datetime;
mod error;
pub mod imputation;
pub mod mappings;

pub use cleaner_trait::{
    CleanOutcome, CleanerRegistry, EntityCleaner, clean_entity, default_registry,
};
pub use error::{CleanError, Result};
