//! SQLite storage implementation for Ascent.
//!
//! This crate provides all database-related functionality using Diesel
//! with SQLite. It implements the repository traits defined in
//! `ascent-core` and contains:
//! - Database connection pooling and management
//! - Embedded migrations
//! - Repository implementations for every collection
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel dependencies
//! exist; `ascent-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod achievements;
pub mod categories;
pub mod goals;
pub mod logs;
pub mod milestones;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from ascent-core for convenience
pub use ascent_core::errors::{DatabaseError, Error, Result};
