use crate::errors::Result;
use crate::milestones::Milestone;
use async_trait::async_trait;

/// Trait for milestone repository operations.
#[async_trait]
pub trait MilestoneRepositoryTrait: Send + Sync {
    fn load_milestones(&self) -> Result<Vec<Milestone>>;
    /// Insert-or-replace keyed by `id`. Timestamps are persisted verbatim.
    async fn put_milestone(&self, milestone: Milestone) -> Result<Milestone>;
    async fn delete_milestone(&self, milestone_id: String) -> Result<usize>;
    async fn delete_all_milestones(&self) -> Result<usize>;
}
