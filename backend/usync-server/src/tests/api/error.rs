use crate::ApiError;

use usync_db::DbError;
use usync_directory::RemoteFailure;
use usync_sync::SyncError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 7 not found");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"].get("remote_body").is_none());
}

#[tokio::test]
async fn test_duplicate_email_returns_400_with_email_field() {
    let error = ApiError::DuplicateEmail {
        email: "johndoe@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["error"]["field"], "email");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("johndoe@example.com")
    );
}

#[tokio::test]
async fn test_remote_failure_keeps_remote_status_and_body() {
    let error = ApiError::Remote {
        status_code: 401,
        body: json!({"error": "Missing API key"}),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "REMOTE_FAILURE");
    assert_eq!(json["error"]["remote_body"]["error"], "Missing API key");
}

#[tokio::test]
async fn test_remote_failure_with_unusable_status_becomes_502() {
    let error = ApiError::Remote {
        status_code: 42,
        body: serde_json::Value::Null,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_sync_remote_error_converts_to_remote() {
    let error = ApiError::from(SyncError::from(RemoteFailure::new(
        503,
        json!("maintenance"),
    )));

    match error {
        ApiError::Remote {
            status_code, body, ..
        } => {
            assert_eq!(status_code, 503);
            assert_eq!(body, json!("maintenance"));
        }
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let error = ApiError::from(SyncError::from(DbError::Migration {
        message: "table users is corrupt".into(),
        location: ErrorLocation::from(Location::caller()),
    }));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}
