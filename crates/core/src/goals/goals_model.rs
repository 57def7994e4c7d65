//! Goal domain models and the completion rule.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::milestones::Milestone;

/// Domain model representing a trackable ambition.
///
/// A goal is in one of two progress modes: *numeric* when `target_value`
/// is set, or *milestone-based* when it is tracked via its milestones.
/// A goal with neither reports zero progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category_id: String,
    pub current_value: f64,
    pub target_value: Option<f64>,
    /// Display unit for numeric goals (e.g. "km", "books").
    pub unit: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Goal {
    /// Applies the completion rule to this goal.
    ///
    /// Forces `is_completed` to true when the numeric target is reached,
    /// or when the goal owns at least one milestone and all of them are
    /// complete. Never forces the flag back to false: completion is
    /// monotonic, and there is no automatic un-completion.
    pub fn apply_completion_rule(&mut self, milestones: &[Milestone]) {
        if self
            .target_value
            .is_some_and(|target| self.current_value >= target)
        {
            self.is_completed = true;
        } else {
            let mut owned = milestones.iter().filter(|m| m.goal_id == self.id);
            let mut any = false;
            let all_completed = owned.all(|m| {
                any = true;
                m.is_completed
            });
            if any && all_completed {
                self.is_completed = true;
            }
        }
    }

    /// Returns whether the goal counts as completed for reporting:
    /// either flagged complete, or its numeric target is met.
    pub fn counts_as_completed(&self) -> bool {
        self.is_completed
            || self
                .target_value
                .is_some_and(|target| self.current_value >= target)
    }

    /// Progress of this goal as a percentage in `0.0..=100.0`.
    ///
    /// Numeric goals report `current / target`, capped at 100. Milestone
    /// goals report the completed fraction of their milestones. Untracked
    /// goals report zero.
    pub fn progress_percent(&self, milestones: &[Milestone]) -> f64 {
        if let Some(target) = self.target_value {
            if target > 0.0 {
                return ((self.current_value / target) * 100.0).min(100.0);
            }
            return 0.0;
        }
        let owned: Vec<&Milestone> = milestones.iter().filter(|m| m.goal_id == self.id).collect();
        if owned.is_empty() {
            return 0.0;
        }
        let completed = owned.iter().filter(|m| m.is_completed).count();
        (completed as f64 / owned.len() as f64) * 100.0
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub current_value: f64,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDateTime>,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.category_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal category cannot be empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Promotes the input into a full record, stamping timestamps.
    pub fn into_goal(self, id: String, now: NaiveDateTime) -> Goal {
        Goal {
            id,
            title: self.title,
            description: self.description,
            category_id: self.category_id,
            current_value: self.current_value,
            target_value: self.target_value,
            unit: self.unit,
            deadline: self.deadline,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial patch for updating an existing goal.
///
/// Only fields that are `Some` are merged into the stored record. The
/// patch is set-only: absent fields stay untouched, so a populated
/// optional field (`description`, `target_value`, `unit`, `deadline`)
/// cannot be cleared back to empty through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub current_value: Option<f64>,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub is_completed: Option<bool>,
}

impl GoalUpdate {
    /// A patch that only sets the completion flag.
    pub fn completed() -> Self {
        GoalUpdate {
            is_completed: Some(true),
            ..Default::default()
        }
    }

    /// Merges this patch into `goal`, leaving absent fields untouched.
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(description) = &self.description {
            goal.description = Some(description.clone());
        }
        if let Some(category_id) = &self.category_id {
            goal.category_id = category_id.clone();
        }
        if let Some(current_value) = self.current_value {
            goal.current_value = current_value;
        }
        if let Some(target_value) = self.target_value {
            goal.target_value = Some(target_value);
        }
        if let Some(unit) = &self.unit {
            goal.unit = Some(unit.clone());
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = Some(deadline);
        }
        if let Some(is_completed) = self.is_completed {
            goal.is_completed = is_completed;
        }
    }
}
