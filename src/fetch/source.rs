/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! HTTP data supplier for the posts and comments collections.
//!
//! Both collections are requested together and jointly awaited; if either
//! request fails the whole fetch fails and nothing is returned. There are no
//! retries and no timeouts beyond what the supplied client is configured with.

use crate::fetch::error::FetchError;
use crate::join::record::{Comment, Dataset, Post};
use serde::de::DeserializeOwned;
use tracing::{info, trace};

/// Default endpoint serving the posts collection.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default endpoint serving the comments collection.
pub const DEFAULT_COMMENTS_URL: &str = "https://jsonplaceholder.typicode.com/comments";

/// Location of the two collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// URL returning a JSON array of posts.
    pub posts_url: String,
    /// URL returning a JSON array of comments.
    pub comments_url: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            comments_url: DEFAULT_COMMENTS_URL.to_string(),
        }
    }
}

impl DataSource {
    /// Creates a source reading from the given endpoints.
    #[must_use]
    pub fn new(posts_url: impl Into<String>, comments_url: impl Into<String>) -> Self {
        Self {
            posts_url: posts_url.into(),
            comments_url: comments_url.into(),
        }
    }

    /// Fetches both collections concurrently with `client`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if either request fails or answers with
    /// a non-2xx status, and [`FetchError::Decode`] if either body is not a
    /// JSON array of the expected records.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Dataset, FetchError> {
        info!(
            "Fetching posts from {} and comments from {}",
            self.posts_url, self.comments_url
        );

        let (posts, comments) = tokio::try_join!(
            get_json::<Vec<Post>>(client, &self.posts_url, "posts"),
            get_json::<Vec<Comment>>(client, &self.comments_url, "comments"),
        )?;

        info!(
            "Fetched {} posts and {} comments",
            posts.len(),
            comments.len()
        );
        Ok(Dataset { posts, comments })
    }

    /// Fetches both collections with a default client.
    ///
    /// # Errors
    ///
    /// See [`DataSource::fetch`].
    pub async fn fetch_default(&self) -> Result<Dataset, FetchError> {
        let client = reqwest::Client::new();
        self.fetch(&client).await
    }
}

async fn get_json<R: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    resource: &'static str,
) -> Result<R, FetchError> {
    trace!("GET {} ({})", url, resource);

    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| FetchError::Request { resource, source })?;

    trace!("{} responded with {}", resource, response.status());

    response
        .json::<R>()
        .await
        .map_err(|source| FetchError::Decode { resource, source })
}
