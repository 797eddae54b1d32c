//! Statistics aggregation for svnstats.
//!
//! This crate turns a stream of parsed log entries into per-author commit
//! statistics:
//!
//! - [`StatsAggregator`] implements the entry processor callback and keeps
//!   one [`AuthorStats`] record per distinct author identity, built up
//!   incrementally in a single pass. No entry is ever retained after its
//!   update has been applied.
//! - [`AuthorStats`] holds the accumulated counters for one author and
//!   exposes read-only queries over them.
//!
//! ```rust
//! use svnstats_analyze::StatsAggregator;
//! use svnstats_core::{EntryProcessor, LogEntry};
//!
//! let mut aggregator = StatsAggregator::new();
//! aggregator.process(LogEntry::new(
//!     1,
//!     "johnc",
//!     "2017-06-07T12:04:04.132787Z".parse().unwrap(),
//! ));
//!
//! assert_eq!(aggregator.total_commits(), 1);
//! assert_eq!(aggregator.stats_for("johnc").commits(), 1);
//! ```

mod aggregator;
mod stats;

pub use aggregator::StatsAggregator;
pub use stats::{AuthorStats, OTHER_FILE_TYPE};
