//! Local ledger entry for a user.

use serde::{Deserialize, Serialize};

/// A row of the local record store.
///
/// `id` is assigned by the store; `remote_id` is the directory's identifier,
/// known only once the remote side has confirmed the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    /// Unique across all records
    pub email: String,
    pub remote_id: Option<i64>,
    /// Unix seconds
    pub created_at: i64,
}

impl UserRecord {
    /// Whether the remote directory has acknowledged this record
    pub fn is_confirmed(&self) -> bool {
        self.remote_id.is_some()
    }
}
