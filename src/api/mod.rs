//! Posts API module.
//!
//! The single data source of the dashboard: one `GET /posts` request whose
//! records are handed to the list pipeline unchanged.

mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;

/// Default API serving the posts collection.
///
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Responsible for asynchronous interaction with the posts API including
/// transformation of response data into explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Api, ApiError> {
        debug!("Initializing posts client for {}...", base_url);
        Ok(Api {
            client: Client::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    /// Returns every post served by the API.
    ///
    pub async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Requesting posts...");
        let posts = self.client.list::<Post>("posts").await?;
        debug!("Retrieved {} posts", posts.len());
        Ok(posts)
    }
}
