//! Hash join over a single-valued index.
//!
//! Comments are folded into a `HashMap<u64, &Comment>` holding one comment per
//! post id. With the default [`DuplicateKeyPolicy::Overwrite`] every later
//! comment replaces the earlier one, so the **last** matching comment is
//! attached. That differs from [`LinearScan`](crate::join::LinearScan) and
//! [`GroupedMap`](crate::join::GroupedMap), which attach the first; use
//! [`KeyedObject::first_wins`] for output that agrees with them.

use crate::join::record::{Comment, JoinedPost, Post};
use crate::join::strategy::{JoinStrategy, TieBreak};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::trace;

/// How the index build treats a second comment for an already indexed post id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateKeyPolicy {
    /// Replace the stored comment; the last one seen wins.
    #[default]
    Overwrite,
    /// Keep the stored comment; the first one seen wins.
    KeepFirst,
}

/// Joins through an index holding a single comment per post id.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedObject {
    policy: DuplicateKeyPolicy,
}

impl KeyedObject {
    /// Creates the strategy with overwrite (last-wins) semantics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with keep-first semantics.
    #[must_use]
    pub fn first_wins() -> Self {
        Self::with_policy(DuplicateKeyPolicy::KeepFirst)
    }

    /// Creates the strategy with an explicit duplicate-key policy.
    #[must_use]
    pub fn with_policy(policy: DuplicateKeyPolicy) -> Self {
        Self { policy }
    }

    /// Returns the duplicate-key policy in use.
    #[must_use]
    pub fn policy(&self) -> DuplicateKeyPolicy {
        self.policy
    }

    /// Builds the post id to comment index under the configured policy.
    #[must_use]
    pub fn build_index<'a, U>(&self, comments: &'a [Comment<U>]) -> HashMap<u64, &'a Comment<U>> {
        let mut index = HashMap::with_capacity(comments.len());
        for comment in comments {
            match self.policy {
                DuplicateKeyPolicy::Overwrite => {
                    index.insert(comment.post_id, comment);
                }
                DuplicateKeyPolicy::KeepFirst => {
                    if let Entry::Vacant(slot) = index.entry(comment.post_id) {
                        slot.insert(comment);
                    }
                }
            }
        }
        index
    }
}

impl JoinStrategy for KeyedObject {
    #[inline]
    fn name(&self) -> &'static str {
        "keyed-object"
    }

    fn tie_break(&self) -> TieBreak {
        match self.policy {
            DuplicateKeyPolicy::Overwrite => TieBreak::LastMatch,
            DuplicateKeyPolicy::KeepFirst => TieBreak::FirstMatch,
        }
    }

    fn join<T, U>(&self, posts: &[Post<T>], comments: &[Comment<U>]) -> Vec<JoinedPost<T>>
    where
        T: Clone,
    {
        let index = self.build_index(comments);
        trace!(
            "keyed-object join ({:?}): {} posts, {} indexed comments out of {}",
            self.policy,
            posts.len(),
            index.len(),
            comments.len()
        );

        posts
            .iter()
            .map(|post| {
                let found = index.get(&post.id);
                JoinedPost::from_match(post, found.map(|comment| comment.body.as_str()))
            })
            .collect()
    }
}
