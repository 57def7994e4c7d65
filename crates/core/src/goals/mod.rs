//! Goals module - domain models, completion rule, and traits.

mod goals_model;
mod goals_traits;

pub use goals_model::{Goal, GoalUpdate, NewGoal};
pub use goals_traits::GoalRepositoryTrait;
