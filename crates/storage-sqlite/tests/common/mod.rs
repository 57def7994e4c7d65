use std::sync::Arc;

use tempfile::TempDir;

use ascent_core::events::MockDomainEventSink;
use ascent_core::store::AppStore;
use ascent_storage_sqlite::achievements::AchievementRepository;
use ascent_storage_sqlite::categories::CategoryRepository;
use ascent_storage_sqlite::goals::GoalRepository;
use ascent_storage_sqlite::logs::ProgressLogRepository;
use ascent_storage_sqlite::milestones::MilestoneRepository;
use ascent_storage_sqlite::{create_pool, init, run_migrations, spawn_writer, DbPool};

pub struct TestEnv {
    pub store: AppStore,
    pub sink: MockDomainEventSink,
    pub pool: Arc<DbPool>,
    // Keeps the database file alive for the duration of the test.
    _dir: TempDir,
}

/// Builds a store over a fresh migrated database in a temp directory.
pub fn setup_store() -> TestEnv {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = init(dir.path().to_str().unwrap()).expect("failed to init database");
    let pool = create_pool(&db_path).expect("failed to create pool");
    run_migrations(&pool).expect("failed to run migrations");

    let sink = MockDomainEventSink::new();
    let store = build_store(&pool, &sink);

    TestEnv {
        store,
        sink,
        pool,
        _dir: dir,
    }
}

/// Builds a second store over the same database, as a fresh process
/// restart would.
pub fn build_store(pool: &Arc<DbPool>, sink: &MockDomainEventSink) -> AppStore {
    let writer = spawn_writer(pool.clone());
    AppStore::new(
        Arc::new(CategoryRepository::new(pool.clone(), writer.clone())),
        Arc::new(GoalRepository::new(pool.clone(), writer.clone())),
        Arc::new(MilestoneRepository::new(pool.clone(), writer.clone())),
        Arc::new(AchievementRepository::new(pool.clone(), writer.clone())),
        Arc::new(ProgressLogRepository::new(pool.clone(), writer.clone())),
        Arc::new(sink.clone()),
    )
}
