//! Progress log domain models.
//!
//! Logs are an append-only journal of numeric progress entries. The rule
//! engines never read them; they exist for history views and the streak
//! badges reserved in the catalog.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single logged progress entry against a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    pub id: String,
    pub goal_id: String,
    pub value: f64,
    pub note: Option<String>,
    pub date: NaiveDateTime,
}

/// Input model for logging progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub goal_id: String,
    pub value: f64,
    pub note: Option<String>,
}

impl NewProgressLog {
    /// Promotes the input into a full record, stamping the entry date.
    pub fn into_log(self, id: String, date: NaiveDateTime) -> ProgressLog {
        ProgressLog {
            id,
            goal_id: self.goal_id,
            value: self.value,
            note: self.note,
            date,
        }
    }
}
