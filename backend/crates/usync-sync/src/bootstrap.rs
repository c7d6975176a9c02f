//! One-time startup population of the local store.

use crate::{BootstrapError, UserDirectory, UserStore, UserSyncService};

use usync_config::BootstrapConfig;
use usync_core::{ErrorLocation, RemoteUser, UserRecord};

use std::panic::Location;

#[derive(Debug, Default)]
pub struct BootstrapReport {
    pub mirrored: Vec<UserRecord>,
    pub deleted: Vec<UserRecord>,
}

/// Mirror every configured remote user, then delete the configured ids through
/// the regular delete path. The first failure aborts the run.
pub async fn run_bootstrap<S: UserStore, D: UserDirectory>(
    service: &UserSyncService<S, D>,
    config: &BootstrapConfig,
) -> Result<BootstrapReport, BootstrapError> {
    let mut report = BootstrapReport::default();

    if !config.enabled {
        log::info!("Bootstrap disabled, skipping");
        return Ok(report);
    }

    for &remote_id in &config.mirror_ids {
        let payload = service
            .read(remote_id)
            .await
            .map_err(|source| BootstrapError::Fetch {
                remote_id,
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let remote_user =
            RemoteUser::from_value(payload).map_err(|source| BootstrapError::Payload {
                remote_id,
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let record = service
            .mirror(&remote_user)
            .await
            .map_err(|source| BootstrapError::Mirror {
                remote_id,
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        log::info!(
            "Bootstrap mirrored remote user {} as local record {}",
            remote_id,
            record.id
        );
        report.mirrored.push(record);
    }

    for &remote_id in &config.delete_ids {
        let record = service
            .delete(remote_id)
            .await
            .map_err(|source| BootstrapError::Delete {
                remote_id,
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        log::info!("Bootstrap deleted user {}", remote_id);
        report.deleted.push(record);
    }

    Ok(report)
}
