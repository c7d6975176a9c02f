//! Validated input for creating a user.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

pub const MAX_FIELD_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check name and email before anything touches the store.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        Self::validate_field("name", &self.name)?;
        Self::validate_field("email", &self.email)?;

        let mut parts = self.email.split('@');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
        );
        if !well_formed {
            return Err(CoreError::Validation {
                message: format!("'{}' is not a valid email address", self.email),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    fn validate_field(field: &str, value: &str) -> CoreErrorResult<()> {
        if value.trim().is_empty() {
            return Err(CoreError::Validation {
                message: format!("{} must not be empty", field),
                field: Some(field.into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(CoreError::Validation {
                message: format!("{} must be at most {} characters", field, MAX_FIELD_LENGTH),
                field: Some(field.into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
