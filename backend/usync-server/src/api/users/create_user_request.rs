use usync_core::NewUser;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    /// Must be unique among local records
    pub email: String,
}

/// Strings reach the directory exactly as the client sent them
impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.email)
    }
}
