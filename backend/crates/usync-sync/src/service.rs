use crate::{SyncError, SyncResult, UserDirectory, UserStore};

use usync_core::{ErrorLocation, NewUser, RemoteUser, UserRecord};
use usync_db::DbError;
use usync_directory::remote_id_of;

use std::panic::Location;

use serde_json::Value;

/// One synchronisation operation's view of the store and the directory.
///
/// Built per operation from explicitly injected handles and dropped when the
/// operation finishes.
pub struct UserSyncService<S, D> {
    store: S,
    directory: D,
}

impl<S: UserStore, D: UserDirectory> UserSyncService<S, D> {
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Insert locally, then create remotely; undo the local insert if the
    /// directory refuses. Returns the directory's payload.
    pub async fn create(&self, new_user: &NewUser) -> SyncResult<Value> {
        new_user.validate()?;

        // Duplicate email stops here, before any remote call
        let record = self.store.insert(new_user, None).await?;

        let payload = match self.directory.create_user(new_user).await {
            Ok(payload) => payload,
            Err(failure) => {
                log::warn!(
                    "Remote create for {} failed with {}; removing local record {}",
                    new_user.email,
                    failure.status_code,
                    record.id
                );
                if let Err(e) = self.store.delete_by_id(record.id).await {
                    log::error!(
                        "Compensating delete of local record {} failed: {}",
                        record.id,
                        e
                    );
                }
                return Err(failure.into());
            }
        };

        match remote_id_of(&payload) {
            Some(remote_id) => {
                if let Err(e) = self.store.attach_remote_id(record.id, remote_id).await {
                    log::warn!(
                        "Could not attach remote id {} to local record {}: {}",
                        remote_id,
                        record.id,
                        e
                    );
                }
            }
            None => log::warn!(
                "Remote create payload for {} has no usable id; local record {} stays unconfirmed",
                new_user.email,
                record.id
            ),
        }

        log::info!("Created user {} (local id {})", new_user.email, record.id);

        Ok(payload)
    }

    /// Reads never touch the local store.
    pub async fn read(&self, id: i64) -> SyncResult<Value> {
        Ok(self.directory.fetch_user(id).await?)
    }

    /// Delete locally, then remotely. A remote failure does not restore the
    /// local record.
    pub async fn delete(&self, id: i64) -> SyncResult<UserRecord> {
        // Not found locally means no remote call
        let record = self.store.delete_by_remote_id(id).await?;

        if let Err(failure) = self.directory.delete_user(id).await {
            log::warn!(
                "Remote delete of user {} failed with {}; local record {} stays deleted",
                id,
                failure.status_code,
                record.id
            );
            return Err(failure.into());
        }

        log::info!("Deleted user {} (local id {})", id, record.id);

        Ok(record)
    }

    /// Record a user fetched from the directory in the local store.
    ///
    /// An email that is already present keeps its row, which takes over the
    /// fetched remote id so later deletes by that id reach it.
    pub async fn mirror(&self, remote_user: &RemoteUser) -> SyncResult<UserRecord> {
        let new_user = remote_user.to_new_user();
        new_user.validate()?;
        let remote_id = remote_user.remote_id();

        match self.store.insert(&new_user, Some(remote_id)).await {
            Ok(record) => Ok(record),
            Err(DbError::DuplicateEmail { .. }) => {
                let mut existing = self
                    .store
                    .find_by_email(&new_user.email)
                    .await?
                    .ok_or_else(|| SyncError::NotFound {
                        message: format!("{} vanished while mirroring", new_user.email),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

                if existing.remote_id != Some(remote_id) {
                    log::info!(
                        "Local record {} for {} now follows remote user {} (was {:?})",
                        existing.id,
                        existing.email,
                        remote_id,
                        existing.remote_id
                    );
                    self.store.attach_remote_id(existing.id, remote_id).await?;
                    existing.remote_id = Some(remote_id);
                }

                Ok(existing)
            }
            Err(e) => Err(e.into()),
        }
    }
}
