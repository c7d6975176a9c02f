pub mod new_user;
pub mod remote_user;
pub mod user_record;
