//! SQLite storage implementation for progress logs.

mod model;
mod repository;

pub use model::ProgressLogDB;
pub use repository::ProgressLogRepository;
