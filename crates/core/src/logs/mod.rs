//! Progress logs module - domain models and traits.

mod logs_model;
mod logs_traits;

pub use logs_model::{NewProgressLog, ProgressLog};
pub use logs_traits::ProgressLogRepositoryTrait;
