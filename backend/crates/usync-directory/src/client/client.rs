use crate::{DirectoryResult, RemoteFailure};

use usync_config::DirectoryConfig;
use usync_core::NewUser;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;

/// Header carrying the directory API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Successful payload, or the directory's failure verbatim
pub type RemoteOutcome = Result<Value, RemoteFailure>;

/// HTTP client for the remote user directory.
///
/// One call per operation, no retries: a failed call is reported as-is.
#[derive(Clone)]
pub struct DirectoryClient {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl DirectoryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Directory API root (e.g., "https://reqres.in/api")
    /// * `api_key` - Optional key sent in the `x-api-key` header
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a client from config; a zero timeout keeps the transport default.
    pub fn from_config(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let mut builder = ReqwestClient::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client: builder.build()?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// POST /users - succeeds only on 201 Created
    pub async fn create_user(&self, new_user: &NewUser) -> RemoteOutcome {
        let req = self.request(Method::POST, "/users").json(new_user);
        self.execute("create user", req, StatusCode::CREATED).await
    }

    /// GET /users/{id} - succeeds only on 200 OK
    pub async fn fetch_user(&self, id: i64) -> RemoteOutcome {
        let req = self.request(Method::GET, &format!("/users/{}", id));
        self.execute("fetch user", req, StatusCode::OK).await
    }

    /// DELETE /users/{id} - succeeds only on 204 No Content
    pub async fn delete_user(&self, id: i64) -> RemoteOutcome {
        let req = self.request(Method::DELETE, &format!("/users/{}", id));
        self.execute("delete user", req, StatusCode::NO_CONTENT).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header(API_KEY_HEADER, api_key);
        }

        req
    }

    async fn execute(
        &self,
        operation: &str,
        req: reqwest::RequestBuilder,
        expected: StatusCode,
    ) -> RemoteOutcome {
        log::debug!("Directory {}: sending request", operation);

        let response = req.send().await.map_err(|e| {
            log::warn!("Directory {} failed in transport: {}", operation, e);
            RemoteFailure::transport(e)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(RemoteFailure::transport)?;

        if status != expected {
            log::warn!(
                "Directory {} answered {} (expected {})",
                operation,
                status,
                expected
            );
            let body = parse_body(&text).unwrap_or(Value::String(text));
            return Err(RemoteFailure::new(status.as_u16(), body));
        }

        log::debug!("Directory {} answered {}", operation, status);
        parse_body(&text).map_err(|e| RemoteFailure::malformed(status.as_u16(), e))
    }
}

fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
}

/// The directory's identifier in a create payload (`id`, number or numeric
/// string) or a fetch payload (`data.id`).
pub fn remote_id_of(payload: &Value) -> Option<i64> {
    let id = payload
        .get("id")
        .or_else(|| payload.get("data").and_then(|data| data.get("id")))?;

    match id {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
