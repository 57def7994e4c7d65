//! Categories module - domain models and traits.

mod categories_model;
mod categories_traits;

pub use categories_model::{Category, NewCategory};
pub use categories_traits::CategoryRepositoryTrait;
