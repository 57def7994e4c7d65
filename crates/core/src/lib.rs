//! Ascent Core - Domain entities, rule engines, and the application store.
//!
//! This crate contains the core business logic for Ascent, a local-first
//! goal tracker. It is database-agnostic and defines repository traits that
//! are implemented by the `storage-sqlite` crate.

pub mod achievements;
pub mod categories;
pub mod errors;
pub mod events;
pub mod goals;
pub mod logs;
pub mod milestones;
pub mod portability;
pub mod store;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
