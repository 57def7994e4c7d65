use crate::errors::Result;
use crate::logs::ProgressLog;
use async_trait::async_trait;

/// Trait for progress log repository operations.
#[async_trait]
pub trait ProgressLogRepositoryTrait: Send + Sync {
    fn load_logs(&self) -> Result<Vec<ProgressLog>>;
    /// Insert-or-replace keyed by `id`.
    async fn put_log(&self, log: ProgressLog) -> Result<ProgressLog>;
    async fn delete_log(&self, log_id: String) -> Result<usize>;
    async fn delete_all_logs(&self) -> Result<usize>;
}
