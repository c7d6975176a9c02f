mod new_user;
mod remote_user;
