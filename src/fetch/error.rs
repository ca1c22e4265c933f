//! Fetch error types

use thiserror::Error;

/// Errors that can occur while retrieving the posts and comments collections.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be sent, or the server answered with a non-2xx status.
    #[error("request for {resource} failed: {source}")]
    Request {
        /// Collection being fetched (`posts` or `comments`).
        resource: &'static str,
        /// Underlying transport or status error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON array.
    #[error("could not decode {resource} response: {source}")]
    Decode {
        /// Collection being fetched (`posts` or `comments`).
        resource: &'static str,
        /// Underlying decoding error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Name of the collection whose retrieval failed.
    #[must_use]
    pub fn resource(&self) -> &'static str {
        match self {
            FetchError::Request { resource, .. } | FetchError::Decode { resource, .. } => *resource,
        }
    }

    /// HTTP status of the failed response, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Request { source, .. } | FetchError::Decode { source, .. } => {
                source.status()
            }
        }
    }
}
