//! Achievement domain models and the fixed badge catalog.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Identifier for an unlockable badge, drawn from a fixed catalog.
///
/// Unlike every other entity, achievement ids are never caller-generated.
/// Only `FirstGoal`, `FirstMilestone` and `FirstCompletion` have unlock
/// predicates wired into the rule sweep; the remaining badges are declared
/// in the catalog but never programmatically unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    #[serde(rename = "first-goal")]
    FirstGoal,
    #[serde(rename = "first-milestone")]
    FirstMilestone,
    #[serde(rename = "first-completion")]
    FirstCompletion,
    #[serde(rename = "streak-7")]
    Streak7,
    #[serde(rename = "big-spender")]
    BigSpender,
    #[serde(rename = "master")]
    Master,
    #[serde(rename = "early-bird")]
    EarlyBird,
    #[serde(rename = "weekend-warrior")]
    WeekendWarrior,
}

/// Static badge metadata: display title, description, and symbolic icon
/// name (resolved to a glyph at the presentation boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl AchievementId {
    /// Every badge in the catalog, in display order.
    pub const ALL: [AchievementId; 8] = [
        AchievementId::FirstGoal,
        AchievementId::FirstMilestone,
        AchievementId::FirstCompletion,
        AchievementId::Streak7,
        AchievementId::BigSpender,
        AchievementId::Master,
        AchievementId::EarlyBird,
        AchievementId::WeekendWarrior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstGoal => "first-goal",
            AchievementId::FirstMilestone => "first-milestone",
            AchievementId::FirstCompletion => "first-completion",
            AchievementId::Streak7 => "streak-7",
            AchievementId::BigSpender => "big-spender",
            AchievementId::Master => "master",
            AchievementId::EarlyBird => "early-bird",
            AchievementId::WeekendWarrior => "weekend-warrior",
        }
    }

    /// Resolves this id to its catalog entry.
    pub fn definition(&self) -> BadgeDefinition {
        match self {
            AchievementId::FirstGoal => BadgeDefinition {
                title: "Visionary",
                description: "Created your first goal for 2026",
                icon: "Target",
            },
            AchievementId::FirstMilestone => BadgeDefinition {
                title: "Baby Steps",
                description: "Completed your first milestone",
                icon: "Footprints",
            },
            AchievementId::FirstCompletion => BadgeDefinition {
                title: "Achiever",
                description: "Completed your first goal!",
                icon: "Trophy",
            },
            AchievementId::Streak7 => BadgeDefinition {
                title: "Unstoppable",
                description: "Logged progress 7 days in a row",
                icon: "Zap",
            },
            AchievementId::BigSpender => BadgeDefinition {
                title: "Investor",
                description: "Tracked a financial goal",
                icon: "Award",
            },
            AchievementId::Master => BadgeDefinition {
                title: "Legend",
                description: "Completed 10 goals",
                icon: "Crown",
            },
            AchievementId::EarlyBird => BadgeDefinition {
                title: "Early Bird",
                description: "Completed a task before 8 AM",
                icon: "Star",
            },
            AchievementId::WeekendWarrior => BadgeDefinition {
                title: "Warrior",
                description: "Logged progress on a weekend",
                icon: "Zap",
            },
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AchievementId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown achievement id: {}",
                    s
                )))
            })
    }
}

/// Domain model representing an unlocked badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: NaiveDateTime,
}

impl Achievement {
    /// Materializes an unlocked badge from its catalog entry.
    pub fn unlock(id: AchievementId, unlocked_at: NaiveDateTime) -> Self {
        let definition = id.definition();
        Achievement {
            id,
            title: definition.title.to_string(),
            description: definition.description.to_string(),
            icon: definition.icon.to_string(),
            unlocked_at,
        }
    }
}
