pub mod create_user_request;
pub mod delete_response;
pub mod users;
