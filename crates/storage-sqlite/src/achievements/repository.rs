use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use ascent_core::achievements::{Achievement, AchievementRepositoryTrait};
use ascent_core::Result;

use super::model::AchievementDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::achievements;
use crate::schema::achievements::dsl::*;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn load_achievements(&self) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = achievements
            .load::<AchievementDB>(&mut conn)
            .into_core()?;
        rows.into_iter().map(Achievement::try_from).collect()
    }

    async fn put_achievement(&self, achievement: Achievement) -> Result<Achievement> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Achievement> {
                let row: AchievementDB = achievement.into();
                diesel::replace_into(achievements::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Achievement::try_from(row)
            })
            .await
    }

    async fn delete_achievement(&self, achievement_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(achievements.find(achievement_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete_all_achievements(&self) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(achievements::table)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
