use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use ascent_core::logs::{ProgressLog, ProgressLogRepositoryTrait};
use ascent_core::Result;

use super::model::ProgressLogDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::progress_logs;
use crate::schema::progress_logs::dsl::*;

pub struct ProgressLogRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProgressLogRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProgressLogRepository { pool, writer }
    }
}

#[async_trait]
impl ProgressLogRepositoryTrait for ProgressLogRepository {
    fn load_logs(&self) -> Result<Vec<ProgressLog>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = progress_logs
            .load::<ProgressLogDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(ProgressLog::from).collect())
    }

    async fn put_log(&self, log: ProgressLog) -> Result<ProgressLog> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ProgressLog> {
                let row: ProgressLogDB = log.into();
                diesel::replace_into(progress_logs::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(ProgressLog::from(row))
            })
            .await
    }

    async fn delete_log(&self, log_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(progress_logs.find(log_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete_all_logs(&self) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(progress_logs::table)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
