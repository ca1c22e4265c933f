//! Join engine attaching comments to posts through interchangeable strategies.

/// Side-by-side runs of every strategy with divergence reporting.
pub mod comparison;
/// Hash join over comments grouped by post id.
pub mod grouped_map;
/// Hash join over a single comment per post id.
pub mod keyed_object;
/// Nested-loop join.
pub mod linear_scan;
pub mod record;
pub mod strategy;
/// Wall-clock timing collaborators.
pub mod timing;


pub use comparison::{
    ComparisonReport, ReportEntry, StrategyOutcome, compare_strategies, first_divergence,
    outputs_agree,
};
pub use grouped_map::GroupedMap;
pub use keyed_object::{DuplicateKeyPolicy, KeyedObject};
pub use linear_scan::LinearScan;
pub use record::{Comment, Dataset, Fields, JoinedPost, Post};
pub use strategy::{JoinStrategy, StrategyKind, TieBreak, UnknownStrategy};
pub use timing::{RecordingTimingSink, Timing, TimingSink, TracingTimingSink, timed};
