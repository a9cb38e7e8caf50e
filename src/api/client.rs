//! HTTP client for the posts API.
//!
//! This module provides a thin wrapper around `reqwest` that issues GET
//! requests against a base URL and conforms the JSON response to a model.

use super::ApiError;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Makes requests to the API and tries to conform response data to the given
/// model.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Return the vector of model data found at the path.
    ///
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("Requesting {}...", request_url);

        let response = self
            .http_client
            .request(Method::GET, &request_url)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<Vec<T>>(&response_bytes) {
            Ok(data) => {
                log::debug!("Fetched {} records from {}", data.len(), request_url);
                Ok(data)
            }
            Err(e) => {
                log::error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }
}
