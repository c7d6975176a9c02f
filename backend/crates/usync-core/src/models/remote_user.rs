//! Payload returned by the remote directory's fetch endpoint.

use crate::{CoreError, ErrorLocation, NewUser, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /users/{id}` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub data: RemoteUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUserData {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl RemoteUser {
    #[track_caller]
    pub fn from_value(value: Value) -> CoreErrorResult<Self> {
        serde_json::from_value(value).map_err(|source| CoreError::RemotePayload {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn remote_id(&self) -> i64 {
        self.data.id
    }

    /// Local mirror uses the first name only, as the directory's `name` field
    /// is not part of its fetch payload.
    pub fn to_new_user(&self) -> NewUser {
        NewUser::new(self.data.first_name.clone(), self.data.email.clone())
    }
}
