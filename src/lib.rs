//! # Post/Comment Join Strategies
//!
//! Fetches two related JSON collections, posts and comments, and joins every
//! post with the body of one of its comments. The same join is implemented
//! three ways so their cost can be compared on identical input:
//!
//! | Strategy | Index | Lookup | Multiple matches | Complexity |
//! |----------|-------|--------|------------------|------------|
//! | [`LinearScan`] | none | scan every comment | first wins | O(P·C) |
//! | [`GroupedMap`] | `HashMap<u64, Vec<&Comment>>` | hash lookup, head of group | first wins | O(P+C) |
//! | [`KeyedObject`] | `HashMap<u64, &Comment>` | hash lookup | last wins (overwrite) | O(P+C) |
//!
//! ## Join semantics
//!
//! - One output record per input post, in input order. Nothing is dropped or
//!   duplicated.
//! - A post without comments is emitted unchanged: the `comment` field is
//!   absent, not `null`.
//! - Comments whose `postId` matches no post are ignored.
//! - Fields other than `id`, `postId` and `body` are opaque and pass through
//!   untouched, in their original order.
//!
//! ## Known divergence
//!
//! [`KeyedObject`] builds its index by overwriting, so for a post with several
//! comments it attaches the **last** one while the other two attach the
//! **first**. This is kept as the default and surfaced by
//! [`ComparisonReport`]; [`KeyedObject::first_wins`] gives the normalized
//! variant.
//!
//! ## Example
//!
//! ```rust
//! use postjoin_rs::prelude::*;
//!
//! let posts: Vec<Post<()>> = vec![Post::new(1), Post::new(2)];
//! let comments: Vec<Comment<()>> = vec![Comment::new(1, "a"), Comment::new(1, "b")];
//!
//! let first = LinearScan.join(&posts, &comments);
//! let last = KeyedObject::new().join(&posts, &comments);
//!
//! assert_eq!(first[0].comment.as_deref(), Some("a"));
//! assert_eq!(last[0].comment.as_deref(), Some("b"));
//! assert_eq!(first[1].comment, None);
//! ```
//!
//! ## Fetching
//!
//! [`DataSource`] retrieves both collections concurrently with `reqwest`
//! (defaulting to the public JSON placeholder API) and returns a [`Dataset`].
//! A failure on either request fails the whole fetch with a [`FetchError`].
//!
//! ## Timing
//!
//! Strategies never time themselves. Callers wrap them with [`timed`] and a
//! [`TimingSink`], or run all three through [`compare_strategies`].

pub mod fetch;
pub mod join;

pub mod prelude;
mod utils;

pub use fetch::{DEFAULT_COMMENTS_URL, DEFAULT_POSTS_URL, DataSource, FetchError};
pub use join::{
    Comment, ComparisonReport, Dataset, DuplicateKeyPolicy, Fields, GroupedMap, JoinStrategy,
    JoinedPost, KeyedObject, LinearScan, Post, RecordingTimingSink, ReportEntry, StrategyKind,
    StrategyOutcome, TieBreak, Timing, TimingSink, TracingTimingSink, UnknownStrategy,
    compare_strategies, first_divergence, outputs_agree, timed,
};
pub use utils::setup_logger;

/// Post with opaque JSON fields, as returned by the remote API.
pub type DefaultPost = Post<Fields>;

/// Comment with opaque JSON fields, as returned by the remote API.
pub type DefaultComment = Comment<Fields>;

/// Joined post with opaque JSON fields.
pub type DefaultJoinedPost = JoinedPost<Fields>;
