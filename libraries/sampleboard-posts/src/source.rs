//! Where posts come from.

use async_trait::async_trait;
use reqwest::Client;
use sampleboard_core::http::{self, HttpSettings};
use sampleboard_core::{FetchError, Post, Result};
use tracing::debug;
use url::Url;

/// Default public posts endpoint
pub const DEFAULT_POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Supplier of the post collection.
#[async_trait]
pub trait PostsSource: Send + Sync {
    /// Fetch the whole collection in API order.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}

/// Posts source backed by a JSON HTTP API.
///
/// Issues one unauthenticated `GET` with no query parameters and expects a
/// JSON array of `{id, userId, title, body}`.
pub struct HttpPostsSource {
    http: Client,
    endpoint: Url,
}

impl HttpPostsSource {
    /// Create a source for `endpoint`.
    pub fn new(endpoint: &str, settings: &HttpSettings) -> Result<Self> {
        let endpoint = http::parse_endpoint(endpoint)?;
        let http = settings.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// The endpoint this source reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PostsSource for HttpPostsSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        debug!(url = %self.endpoint, "Fetching posts");

        let response = http::get_checked(&self.http, &self.endpoint).await?;
        let posts: Vec<Post> = response
            .json()
            .await
            .map_err(|e| FetchError::parse(format!("Failed to parse posts: {}", e)))?;

        debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}
