//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::achievements::AchievementId;

/// Domain events emitted by the store after successful mutations.
///
/// These events represent facts about domain data changes. Runtime
/// adapters translate them into platform-specific actions (toast
/// notifications, badge animations, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A badge was newly unlocked by the achievement rule sweep.
    AchievementUnlocked {
        id: AchievementId,
        title: String,
        description: String,
    },
}

impl DomainEvent {
    /// Creates an AchievementUnlocked event.
    pub fn achievement_unlocked(id: AchievementId, title: String, description: String) -> Self {
        Self::AchievementUnlocked {
            id,
            title,
            description,
        }
    }
}
