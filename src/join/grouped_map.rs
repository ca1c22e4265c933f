//! Hash join over a grouped index.
//!
//! Comments are bucketed by `post_id` into a `HashMap<u64, Vec<&Comment>>` in a
//! single pass, preserving input order within each bucket. Each post then does
//! one average O(1) lookup and takes the head of its bucket.

use crate::join::record::{Comment, JoinedPost, Post};
use crate::join::strategy::{JoinStrategy, TieBreak};
use std::collections::HashMap;
use tracing::trace;

/// Joins through an index of every comment grouped by post id.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedMap;

impl GroupedMap {
    /// Groups `comments` by `post_id`, keeping input order inside each group.
    #[must_use]
    pub fn build_index<U>(comments: &[Comment<U>]) -> HashMap<u64, Vec<&Comment<U>>> {
        let mut index: HashMap<u64, Vec<&Comment<U>>> = HashMap::with_capacity(comments.len());
        for comment in comments {
            index.entry(comment.post_id).or_default().push(comment);
        }
        index
    }
}

impl JoinStrategy for GroupedMap {
    #[inline]
    fn name(&self) -> &'static str {
        "grouped-map"
    }

    #[inline]
    fn tie_break(&self) -> TieBreak {
        TieBreak::FirstMatch
    }

    fn join<T, U>(&self, posts: &[Post<T>], comments: &[Comment<U>]) -> Vec<JoinedPost<T>>
    where
        T: Clone,
    {
        let index = Self::build_index(comments);
        trace!(
            "grouped-map join: {} posts, {} comment groups",
            posts.len(),
            index.len()
        );

        posts
            .iter()
            .map(|post| {
                let found = index.get(&post.id).and_then(|group| group.first());
                JoinedPost::from_match(post, found.map(|comment| comment.body.as_str()))
            })
            .collect()
    }
}
