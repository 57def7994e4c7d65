//! Database models for achievements.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ascent_core::achievements::{Achievement, AchievementId};
use ascent_core::Error;

/// Database model for unlocked achievements. The badge id is stored as
/// its kebab-case catalog string.
#[derive(
    Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AchievementDB {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: NaiveDateTime,
    pub synced: i32,
}

impl TryFrom<AchievementDB> for Achievement {
    type Error = Error;

    fn try_from(db: AchievementDB) -> Result<Self, Error> {
        Ok(Self {
            id: AchievementId::from_str(&db.id)?,
            title: db.title,
            description: db.description,
            icon: db.icon,
            unlocked_at: db.unlocked_at,
        })
    }
}

impl From<Achievement> for AchievementDB {
    fn from(domain: Achievement) -> Self {
        Self {
            id: domain.id.as_str().to_string(),
            title: domain.title,
            description: domain.description,
            icon: domain.icon,
            unlocked_at: domain.unlocked_at,
            synced: 0,
        }
    }
}
