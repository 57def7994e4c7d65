use crate::achievements::Achievement;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for achievement repository operations.
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn load_achievements(&self) -> Result<Vec<Achievement>>;
    /// Insert-or-replace keyed by `id`, making unlocks idempotent.
    async fn put_achievement(&self, achievement: Achievement) -> Result<Achievement>;
    async fn delete_achievement(&self, achievement_id: String) -> Result<usize>;
    async fn delete_all_achievements(&self) -> Result<usize>;
}
