//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ascent_core::goals::Goal;

/// Database model for goals.
#[derive(
    Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category_id: String,
    pub current_value: f64,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub synced: i32,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            category_id: db.category_id,
            current_value: db.current_value,
            target_value: db.target_value,
            unit: db.unit,
            deadline: db.deadline,
            is_completed: db.is_completed,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            category_id: domain.category_id,
            current_value: domain.current_value,
            target_value: domain.target_value,
            unit: domain.unit,
            deadline: domain.deadline,
            is_completed: domain.is_completed,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
            synced: 0,
        }
    }
}
