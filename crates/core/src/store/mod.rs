//! Store module - the application state store and its rule engines.

mod app_store;
#[cfg(test)]
mod app_store_tests;
mod store_model;

pub use app_store::AppStore;
pub use store_model::{CategoryGoalCount, StoreStats};
