use usync_core::NewUser;

pub fn john_doe() -> NewUser {
    NewUser::new("John Doe", "johndoe@example.com")
}

pub fn jane_doe() -> NewUser {
    NewUser::new("Jane Doe", "janedoe@example.com")
}
