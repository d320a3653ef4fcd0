//! REST client for the Notion HTTP API.
//!
//! Wraps the database retrieval endpoint using [`reqwest`]. The client
//! is constructed once at startup and shared across requests.

use crate::types::Database;

/// Value of the `Notion-Version` header sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// HTTP client for the Notion REST API.
pub struct NotionApi {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

/// Errors from the Notion REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum NotionApiError {
    /// No integration token was configured.
    #[error("Notion integration token is not configured")]
    MissingToken,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Notion returned a non-2xx status code.
    #[error("Notion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl NotionApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base URL, e.g. `https://api.notion.com`.
    /// * `token` - Integration token; requests fail with
    ///   [`NotionApiError::MissingToken`] when absent.
    pub fn new(api_url: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, token: Option<String>) -> Self {
        Self {
            client,
            api_url,
            token,
        }
    }

    /// Retrieve a database's property schema.
    ///
    /// Sends `GET /v1/databases/{database_id}`.
    pub async fn get_database(&self, database_id: &str) -> Result<Database, NotionApiError> {
        let token = self.token.as_deref().ok_or(NotionApiError::MissingToken)?;

        let response = self
            .client
            .get(format!("{}/v1/databases/{}", self.api_url, database_id))
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`NotionApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, NotionApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NotionApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NotionApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
