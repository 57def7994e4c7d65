use crate::categories::Category;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn load_categories(&self) -> Result<Vec<Category>>;
    /// Insert-or-replace keyed by `id`. Timestamps are persisted verbatim.
    async fn put_category(&self, category: Category) -> Result<Category>;
    async fn delete_category(&self, category_id: String) -> Result<usize>;
    async fn delete_all_categories(&self) -> Result<usize>;
}
