use crate::{CoreError, MAX_FIELD_LENGTH, NewUser};

use proptest::prelude::*;

#[test]
fn test_valid_user_passes() {
    let user = NewUser::new("John Doe", "johndoe@example.com");
    assert!(user.validate().is_ok());
}

#[test]
fn test_blank_name_rejected_with_field() {
    let user = NewUser::new("   ", "johndoe@example.com");

    match user.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_email_without_at_rejected() {
    let user = NewUser::new("John", "johndoe.example.com");

    match user.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_email_with_two_ats_rejected() {
    let user = NewUser::new("John", "john@doe@example.com");
    assert!(user.validate().is_err());
}

#[test]
fn test_email_with_empty_domain_rejected() {
    let user = NewUser::new("John", "john@");
    assert!(user.validate().is_err());
}

#[test]
fn test_name_at_max_length_accepted() {
    let user = NewUser::new("a".repeat(MAX_FIELD_LENGTH), "a@b.c");
    assert!(user.validate().is_ok());
}

#[test]
fn test_name_over_max_length_rejected() {
    let user = NewUser::new("a".repeat(MAX_FIELD_LENGTH + 1), "a@b.c");
    assert!(user.validate().is_err());
}

proptest! {
    #[test]
    fn prop_simple_addresses_validate(
        local in "[a-z0-9.]{1,20}",
        domain in "[a-z0-9]{1,20}\\.[a-z]{2,5}",
        name in "[A-Za-z][A-Za-z ]{0,40}",
    ) {
        let user = NewUser::new(name, format!("{}@{}", local, domain));
        prop_assert!(user.validate().is_ok());
    }

    #[test]
    fn prop_addresses_without_at_never_validate(email in "[a-z0-9.]{1,40}") {
        let user = NewUser::new("John", email);
        prop_assert!(user.validate().is_err());
    }
}
