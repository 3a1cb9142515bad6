//! HTTP data source.
//!
//! Fetches the board payload with a single GET request.

use std::time::Duration;

use async_trait::async_trait;

use super::DataSource;
use crate::error::{AppError, AppResult};
use crate::models::Dataset;

/// Data source backed by a remote JSON endpoint
pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> AppResult<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    format!("Request failed: {}", e)
                };
                AppError::DataFetch(message)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DataFetch(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::DataFetch(format!("Failed to read response body: {}", e)))?;

        Dataset::from_slice(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
