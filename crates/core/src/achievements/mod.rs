//! Achievements module - badge catalog, domain models, and traits.

mod achievements_model;
mod achievements_traits;

pub use achievements_model::{Achievement, AchievementId, BadgeDefinition};
pub use achievements_traits::AchievementRepositoryTrait;
