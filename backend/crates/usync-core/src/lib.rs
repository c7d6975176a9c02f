pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_user::{MAX_FIELD_LENGTH, NewUser};
pub use models::remote_user::{RemoteUser, RemoteUserData};
pub use models::user_record::UserRecord;
