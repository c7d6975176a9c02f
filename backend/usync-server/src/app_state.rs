use usync_db::UserRepository;
use usync_directory::DirectoryClient;
use usync_sync::UserSyncService;

use sqlx::SqlitePool;

/// Handles shared by every request. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub directory: DirectoryClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, directory: DirectoryClient) -> Self {
        Self { pool, directory }
    }

    /// A fresh orchestrator for one request
    pub fn sync_service(&self) -> UserSyncService<UserRepository, DirectoryClient> {
        UserSyncService::new(
            UserRepository::new(self.pool.clone()),
            self.directory.clone(),
        )
    }
}
