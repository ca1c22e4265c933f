//! Nested-loop join.
//!
//! For every post the whole comment slice is scanned until the first match,
//! giving O(P·C) work and no auxiliary memory.

use crate::join::record::{Comment, JoinedPost, Post};
use crate::join::strategy::{JoinStrategy, TieBreak};
use tracing::trace;

/// Joins by scanning `comments` once per post and stopping at the first match.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl JoinStrategy for LinearScan {
    #[inline]
    fn name(&self) -> &'static str {
        "linear-scan"
    }

    #[inline]
    fn tie_break(&self) -> TieBreak {
        TieBreak::FirstMatch
    }

    fn join<T, U>(&self, posts: &[Post<T>], comments: &[Comment<U>]) -> Vec<JoinedPost<T>>
    where
        T: Clone,
    {
        trace!(
            "linear-scan join: {} posts x {} comments",
            posts.len(),
            comments.len()
        );

        posts
            .iter()
            .map(|post| {
                let found = comments.iter().find(|comment| comment.post_id == post.id);
                JoinedPost::from_match(post, found.map(|comment| comment.body.as_str()))
            })
            .collect()
    }
}
