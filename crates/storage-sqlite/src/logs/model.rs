//! Database models for progress logs.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ascent_core::logs::ProgressLog;

/// Database model for progress log entries.
#[derive(
    Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::progress_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProgressLogDB {
    pub id: String,
    pub goal_id: String,
    pub value: f64,
    pub note: Option<String>,
    pub date: NaiveDateTime,
    pub synced: i32,
}

impl From<ProgressLogDB> for ProgressLog {
    fn from(db: ProgressLogDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            value: db.value,
            note: db.note,
            date: db.date,
        }
    }
}

impl From<ProgressLog> for ProgressLogDB {
    fn from(domain: ProgressLog) -> Self {
        Self {
            id: domain.id,
            goal_id: domain.goal_id,
            value: domain.value,
            note: domain.note,
            date: domain.date,
            synced: 0,
        }
    }
}
