//! Derived read models served from the store snapshot.

use serde::{Deserialize, Serialize};

/// Goal count for one category, used by the overview chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGoalCount {
    pub category_id: String,
    pub name: String,
    pub count: usize,
}

/// Aggregate statistics over the current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_goals: usize,
    /// Goals flagged complete or whose numeric target is met.
    pub completed_goals: usize,
    /// Rounded percentage; zero when there are no goals.
    pub completion_rate: u32,
    /// Categories with at least one goal, in category order.
    pub goals_per_category: Vec<CategoryGoalCount>,
}
