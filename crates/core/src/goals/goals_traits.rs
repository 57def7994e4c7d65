use crate::errors::Result;
use crate::goals::Goal;
use async_trait::async_trait;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    /// Insert-or-replace keyed by `id`. Timestamps are persisted verbatim.
    async fn put_goal(&self, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
    async fn delete_all_goals(&self) -> Result<usize>;
}
