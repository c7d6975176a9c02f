pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        create_user_request::CreateUserRequest,
        delete_response::DeleteResponse,
        users::{create_user, delete_user, get_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
