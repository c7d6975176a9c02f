use crate::{DirectoryClient, remote_id_of};

use usync_config::DirectoryConfig;

use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = DirectoryClient::new("https://reqres.in/api/", None);
    assert_eq!(client.base_url, "https://reqres.in/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = DirectoryClient::new("https://reqres.in/api", None);
    assert_eq!(client.base_url, "https://reqres.in/api");
}

#[test]
fn test_api_key_stored() {
    let client = DirectoryClient::new("https://reqres.in/api", Some("reqres-free-v1"));
    assert!(client.has_api_key());
}

#[test]
fn test_from_config_uses_defaults() {
    let client = DirectoryClient::from_config(&DirectoryConfig::default()).unwrap();
    assert_eq!(client.base_url, "https://reqres.in/api");
    assert!(!client.has_api_key());
}

#[test]
fn test_remote_id_from_numeric_string() {
    let payload = json!({ "name": "John Doe", "id": "734", "createdAt": "2026-01-01T00:00:00Z" });
    assert_eq!(remote_id_of(&payload), Some(734));
}

#[test]
fn test_remote_id_from_number() {
    assert_eq!(remote_id_of(&json!({ "id": 12 })), Some(12));
}

#[test]
fn test_remote_id_from_fetch_envelope() {
    let payload = json!({ "data": { "id": 3, "email": "emma.wong@reqres.in" } });
    assert_eq!(remote_id_of(&payload), Some(3));
}

#[test]
fn test_remote_id_missing_or_non_numeric() {
    assert_eq!(remote_id_of(&json!({ "name": "John" })), None);
    assert_eq!(remote_id_of(&json!({ "id": "abc" })), None);
    assert_eq!(remote_id_of(&json!(null)), None);
}
