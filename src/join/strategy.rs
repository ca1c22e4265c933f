//! The join contract shared by every strategy.
//!
//! A strategy maps `(posts, comments)` to one [`JoinedPost`] per post, in input
//! order, attaching the body of at most one comment whose `post_id` equals the
//! post's `id`. Strategies never fail and never drop or duplicate posts; they
//! only differ in cost and in which comment wins when several match
//! ([`TieBreak`]).

use crate::join::grouped_map::GroupedMap;
use crate::join::keyed_object::KeyedObject;
use crate::join::linear_scan::LinearScan;
use crate::join::record::{Comment, JoinedPost, Post};
use std::fmt;
use std::str::FromStr;

/// Which comment is attached when more than one matches a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// The earliest matching comment in input order.
    FirstMatch,
    /// The latest matching comment in input order.
    LastMatch,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstMatch => write!(f, "first-match"),
            TieBreak::LastMatch => write!(f, "last-match"),
        }
    }
}

/// A posts-to-comments join algorithm.
///
/// `join` is generic over the opaque payloads of both record types, so the
/// trait is used through static dispatch. For picking a strategy at runtime
/// use [`StrategyKind`].
pub trait JoinStrategy: fmt::Debug {
    /// Short stable identifier, e.g. `"linear-scan"`.
    #[must_use]
    fn name(&self) -> &'static str;

    /// Tie-break this strategy applies to posts with several comments.
    #[must_use]
    fn tie_break(&self) -> TieBreak;

    /// Joins `comments` onto `posts`.
    ///
    /// The output has exactly `posts.len()` entries, in the same order.
    fn join<T, U>(&self, posts: &[Post<T>], comments: &[Comment<U>]) -> Vec<JoinedPost<T>>
    where
        T: Clone;
}

/// Runtime selector over the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Nested scan, O(P·C).
    LinearScan,
    /// Hash map from post id to every comment, O(P+C).
    GroupedMap,
    /// Hash map from post id to one comment with overwrite, O(P+C).
    KeyedObject,
}

impl StrategyKind {
    /// All strategies, in the order they are compared.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::LinearScan,
        StrategyKind::GroupedMap,
        StrategyKind::KeyedObject,
    ];

    /// Stable identifier of the strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::LinearScan => LinearScan.name(),
            StrategyKind::GroupedMap => GroupedMap.name(),
            StrategyKind::KeyedObject => KeyedObject::default().name(),
        }
    }

    /// Human-readable label used when reporting timings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::LinearScan => "Linear scan (Iterator::find)",
            StrategyKind::GroupedMap => "Grouped map (HashMap<id, Vec<Comment>>)",
            StrategyKind::KeyedObject => "Keyed object (HashMap<id, Comment>)",
        }
    }

    /// Tie-break the selected strategy applies.
    #[must_use]
    pub fn tie_break(self) -> TieBreak {
        match self {
            StrategyKind::LinearScan => LinearScan.tie_break(),
            StrategyKind::GroupedMap => GroupedMap.tie_break(),
            StrategyKind::KeyedObject => KeyedObject::default().tie_break(),
        }
    }

    /// Runs the selected strategy.
    pub fn join<T, U>(self, posts: &[Post<T>], comments: &[Comment<U>]) -> Vec<JoinedPost<T>>
    where
        T: Clone,
    {
        match self {
            StrategyKind::LinearScan => LinearScan.join(posts, comments),
            StrategyKind::GroupedMap => GroupedMap.join(posts, comments),
            StrategyKind::KeyedObject => KeyedObject::default().join(posts, comments),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown join strategy: {}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
