//! HTTP client for feed server communication.

use anyhow::{Context, Result};
use async_trait::async_trait;
use beacon_store::Fetcher;
use beacon_types::{NotificationCounts, Todo, TodoId};
use serde::{de::DeserializeOwned, Deserialize};

use crate::config::Config;
use crate::error::CliError;

/// API client for communicating with the feed server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from config.
    ///
    /// Every request is bounded by the configured fetch timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the global notification counter record.
    pub async fn notifications(&self) -> Result<NotificationCounts, CliError> {
        self.get("/notifications").await
    }

    /// Fetch a todo by id.
    pub async fn todo(&self, id: TodoId) -> Result<Todo, CliError> {
        self.get(&format!("/todos/{id}")).await
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.client.get(self.url(path)).send().await?;

        self.handle_response(response).await
    }

    /// Handle a successful or error response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CliError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to parse response: {}", e)))
        } else {
            self.handle_error(response).await
        }
    }

    /// Handle an error response.
    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, CliError> {
        let status = response.status().as_u16();

        // Try to parse the problem+json body
        let error_body: ApiErrorResponse =
            response.json().await.unwrap_or_else(|_| ApiErrorResponse {
                code: "unknown".to_string(),
                detail: "Unknown error".to_string(),
                request_id: None,
            });

        Err(CliError::api(
            status,
            error_body.code,
            error_body.detail,
            error_body.request_id,
        ))
    }
}

/// The store loads todos through this client.
#[async_trait]
impl Fetcher<TodoId> for ApiClient {
    type Output = Todo;

    async fn fetch(&self, key: &TodoId) -> anyhow::Result<Todo> {
        Ok(self.todo(*key).await?)
    }
}

/// API error response structure (problem+json).
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    code: String,
    detail: String,
    #[serde(default)]
    request_id: Option<String>,
}
