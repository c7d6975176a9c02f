use usync_core::NewUser;
use usync_directory::{DirectoryClient, RemoteOutcome};

use async_trait::async_trait;

/// Remote user directory as seen by the orchestrator
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, new_user: &NewUser) -> RemoteOutcome;

    async fn fetch_user(&self, id: i64) -> RemoteOutcome;

    async fn delete_user(&self, id: i64) -> RemoteOutcome;
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn create_user(&self, new_user: &NewUser) -> RemoteOutcome {
        DirectoryClient::create_user(self, new_user).await
    }

    async fn fetch_user(&self, id: i64) -> RemoteOutcome {
        DirectoryClient::fetch_user(self, id).await
    }

    async fn delete_user(&self, id: i64) -> RemoteOutcome {
        DirectoryClient::delete_user(self, id).await
    }
}
