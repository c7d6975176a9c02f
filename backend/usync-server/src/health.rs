use crate::AppState;

use usync_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status, including the local record count
pub async fn health(State(state): State<AppState>) -> Response {
    let repo = UserRepository::new(state.pool.clone());

    let (status, database) = match repo.count().await {
        Ok(count) => (
            StatusCode::OK,
            json!({ "status": "operational", "users": count }),
        ),
        Err(e) => {
            log::error!("Health check could not reach the database: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "status": "unavailable" }),
            )
        }
    };

    let health = json!({
        "status": if status == StatusCode::OK { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "directory": { "base_url": state.directory.base_url },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - bootstrap has finished before the listener binds, so serving
/// means ready.
pub async fn readiness() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
