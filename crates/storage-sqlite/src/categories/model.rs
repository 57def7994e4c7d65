//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ascent_core::categories::Category;

/// Database model for categories.
///
/// `synced` is a pending-sync marker (0 = local-only) reserved for a
/// future remote-sync feature; nothing in this crate reads it.
#[derive(
    Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub synced: i32,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            icon: db.icon,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Category> for CategoryDB {
    fn from(domain: Category) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            icon: domain.icon,
            color: domain.color,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
            synced: 0,
        }
    }
}
