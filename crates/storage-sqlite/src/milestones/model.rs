//! Database models for milestones.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ascent_core::milestones::Milestone;

/// Database model for milestones.
#[derive(
    Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDB {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub goal_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub synced: i32,
}

impl From<MilestoneDB> for Milestone {
    fn from(db: MilestoneDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            is_completed: db.is_completed,
            goal_id: db.goal_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Milestone> for MilestoneDB {
    fn from(domain: Milestone) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            is_completed: domain.is_completed,
            goal_id: domain.goal_id,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
            synced: 0,
        }
    }
}
