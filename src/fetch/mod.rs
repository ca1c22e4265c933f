//! Data supplier retrieving the posts and comments collections over HTTP.

pub mod error;
pub mod source;

pub use error::FetchError;
pub use source::{DEFAULT_COMMENTS_URL, DEFAULT_POSTS_URL, DataSource};
