//! Side-by-side comparison of the join strategies.
//!
//! [`compare_strategies`] runs every [`StrategyKind`] over the same inputs, one
//! after another, timing each call through a [`TimingSink`]. A
//! [`ComparisonReport`] then checks every output against the linear-scan
//! baseline and points at the first post where they disagree.

use crate::join::record::{Comment, JoinedPost, Post};
use crate::join::strategy::{StrategyKind, TieBreak};
use crate::join::timing::{TimingSink, timed};
use std::time::Duration;
use tracing::{info, warn};

/// Result of running one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome<T = crate::join::record::Fields> {
    /// Strategy that produced `output`.
    pub strategy: StrategyKind,
    /// Label the timing was recorded under.
    pub label: String,
    /// Joined posts.
    pub output: Vec<JoinedPost<T>>,
    /// Elapsed wall-clock time of the join.
    pub elapsed: Duration,
}

impl<T> StrategyOutcome<T> {
    /// Number of output posts that received a comment.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.output.iter().filter(|joined| joined.has_comment()).count()
    }
}

/// Returns the index of the first position where `left` and `right` differ.
///
/// A length mismatch counts as a divergence at the end of the shorter one.
#[must_use]
pub fn first_divergence<T: PartialEq>(
    left: &[JoinedPost<T>],
    right: &[JoinedPost<T>],
) -> Option<usize> {
    left.iter()
        .zip(right)
        .position(|(a, b)| a != b)
        .or_else(|| (left.len() != right.len()).then(|| left.len().min(right.len())))
}

/// Returns `true` if both outputs are equal position by position.
#[must_use]
#[inline]
pub fn outputs_agree<T: PartialEq>(left: &[JoinedPost<T>], right: &[JoinedPost<T>]) -> bool {
    first_divergence(left, right).is_none()
}

/// Runs all strategies sequentially over `posts` and `comments`.
///
/// Outcomes come back in [`StrategyKind::ALL`] order.
pub fn compare_strategies<T, U>(
    posts: &[Post<T>],
    comments: &[Comment<U>],
    sink: &dyn TimingSink,
) -> Vec<StrategyOutcome<T>>
where
    T: Clone,
{
    info!(
        "Comparing {} join strategies over {} posts and {} comments",
        StrategyKind::ALL.len(),
        posts.len(),
        comments.len()
    );

    StrategyKind::ALL
        .into_iter()
        .map(|strategy| {
            let label = strategy.label();
            let (output, elapsed) = timed(label, sink, || strategy.join(posts, comments));
            StrategyOutcome {
                strategy,
                label: label.to_string(),
                output,
                elapsed,
            }
        })
        .collect()
}

/// Per-strategy line of a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Strategy the entry describes.
    pub strategy: StrategyKind,
    /// Tie-break the strategy applied.
    pub tie_break: TieBreak,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Posts that received a comment.
    pub matched: usize,
    /// First index where the output differs from the baseline, if any.
    pub divergence: Option<usize>,
}

/// Summary of a comparison run, measured against the first outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// One entry per outcome, in run order.
    pub entries: Vec<ReportEntry>,
}

impl ComparisonReport {
    /// Builds a report using the first outcome as the baseline.
    ///
    /// Divergent strategies are logged at warn level.
    #[must_use]
    pub fn from_outcomes<T: PartialEq>(outcomes: &[StrategyOutcome<T>]) -> Self {
        let baseline = outcomes.first().map(|outcome| outcome.output.as_slice());

        let entries = outcomes
            .iter()
            .map(|outcome| {
                let divergence =
                    baseline.and_then(|base| first_divergence(base, &outcome.output));
                if let Some(index) = divergence {
                    warn!(
                        "{} diverges from baseline at post index {} ({} tie-break)",
                        outcome.strategy,
                        index,
                        outcome.strategy.tie_break()
                    );
                }
                ReportEntry {
                    strategy: outcome.strategy,
                    tie_break: outcome.strategy.tie_break(),
                    elapsed: outcome.elapsed,
                    matched: outcome.matched_count(),
                    divergence,
                }
            })
            .collect();

        Self { entries }
    }

    /// Strategy with the smallest elapsed time.
    #[must_use]
    pub fn fastest(&self) -> Option<StrategyKind> {
        self.entries
            .iter()
            .min_by_key(|entry| entry.elapsed)
            .map(|entry| entry.strategy)
    }

    /// Returns `true` if every output matched the baseline.
    #[must_use]
    pub fn all_agree(&self) -> bool {
        self.entries.iter().all(|entry| entry.divergence.is_none())
    }

    /// Strategies whose output differs from the baseline.
    #[must_use]
    pub fn divergent(&self) -> Vec<StrategyKind> {
        self.entries
            .iter()
            .filter(|entry| entry.divergence.is_some())
            .map(|entry| entry.strategy)
            .collect()
    }
}
