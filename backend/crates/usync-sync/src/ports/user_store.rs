use usync_core::{NewUser, UserRecord};
use usync_db::{Result as DbErrorResult, UserRepository};

use async_trait::async_trait;

/// Local record store as seen by the orchestrator
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `DbError::DuplicateEmail` when the email is taken
    async fn insert(
        &self,
        new_user: &NewUser,
        remote_id: Option<i64>,
    ) -> DbErrorResult<UserRecord>;

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>>;

    async fn attach_remote_id(&self, id: i64, remote_id: i64) -> DbErrorResult<()>;

    /// Fails with `DbError::NotFound` when no row has this id
    async fn delete_by_id(&self, id: i64) -> DbErrorResult<()>;

    /// Fails with `DbError::NotFound` when no row carries this remote id
    async fn delete_by_remote_id(&self, remote_id: i64) -> DbErrorResult<UserRecord>;
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(
        &self,
        new_user: &NewUser,
        remote_id: Option<i64>,
    ) -> DbErrorResult<UserRecord> {
        UserRepository::insert(self, new_user, remote_id).await
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        UserRepository::find_by_email(self, email).await
    }

    async fn attach_remote_id(&self, id: i64, remote_id: i64) -> DbErrorResult<()> {
        UserRepository::attach_remote_id(self, id, remote_id).await
    }

    async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        UserRepository::delete_by_id(self, id).await
    }

    async fn delete_by_remote_id(&self, remote_id: i64) -> DbErrorResult<UserRecord> {
        UserRepository::delete_by_remote_id(self, remote_id).await
    }
}
