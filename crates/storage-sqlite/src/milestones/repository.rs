use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use ascent_core::milestones::{Milestone, MilestoneRepositoryTrait};
use ascent_core::Result;

use super::model::MilestoneDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::milestones;
use crate::schema::milestones::dsl::*;

pub struct MilestoneRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MilestoneRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MilestoneRepository { pool, writer }
    }
}

#[async_trait]
impl MilestoneRepositoryTrait for MilestoneRepository {
    fn load_milestones(&self) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = milestones
            .load::<MilestoneDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn put_milestone(&self, milestone: Milestone) -> Result<Milestone> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Milestone> {
                let row: MilestoneDB = milestone.into();
                diesel::replace_into(milestones::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Milestone::from(row))
            })
            .await
    }

    async fn delete_milestone(&self, milestone_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(milestones.find(milestone_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete_all_milestones(&self) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(milestones::table)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
