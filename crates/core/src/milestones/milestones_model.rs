//! Milestone domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a discrete completable step of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub goal_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub goal_id: String,
}

impl NewMilestone {
    /// Validates the new milestone data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Milestone title cannot be empty".to_string(),
            )));
        }
        if self.goal_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Milestone goal cannot be empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Promotes the input into a full record, stamping timestamps.
    pub fn into_milestone(self, id: String, now: NaiveDateTime) -> Milestone {
        Milestone {
            id,
            title: self.title,
            is_completed: false,
            goal_id: self.goal_id,
            created_at: now,
            updated_at: now,
        }
    }
}
