use crate::RemoteUser;

use serde_json::json;

#[test]
fn test_from_value_parses_directory_payload() {
    let payload = json!({
        "data": {
            "id": 2,
            "email": "janet.weaver@reqres.in",
            "first_name": "Janet",
            "last_name": "Weaver",
            "avatar": "https://reqres.in/img/faces/2-image.jpg"
        },
        "support": { "url": "https://reqres.in/#support-heading" }
    });

    let user = RemoteUser::from_value(payload).unwrap();

    assert_eq!(user.remote_id(), 2);
    assert_eq!(user.data.last_name.as_deref(), Some("Weaver"));

    let new_user = user.to_new_user();
    assert_eq!(new_user.name, "Janet");
    assert_eq!(new_user.email, "janet.weaver@reqres.in");
}

#[test]
fn test_from_value_rejects_payload_without_data() {
    let payload = json!({ "id": 2, "email": "janet.weaver@reqres.in" });
    assert!(RemoteUser::from_value(payload).is_err());
}
