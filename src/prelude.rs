/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Prelude module that re-exports commonly used types and traits.
//!
//! ```rust
//! use postjoin_rs::prelude::*;
//! ```

// Records
pub use crate::join::record::{Comment, Dataset, Fields, JoinedPost, Post};

// Strategies
pub use crate::join::strategy::{JoinStrategy, StrategyKind, TieBreak};
pub use crate::join::{DuplicateKeyPolicy, GroupedMap, KeyedObject, LinearScan};

// Comparison and timing
pub use crate::join::comparison::{ComparisonReport, StrategyOutcome, compare_strategies};
pub use crate::join::timing::{RecordingTimingSink, TimingSink, TracingTimingSink, timed};

// Data supplier
pub use crate::fetch::{DataSource, FetchError};

// Logging
pub use crate::utils::setup_logger;

// Type aliases for common use cases
pub use crate::{DefaultComment, DefaultJoinedPost, DefaultPost};
