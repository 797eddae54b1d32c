//! The entry processor that aggregates statistics per author.

use std::borrow::Cow;
use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use svnstats_core::{EntryProcessor, LogEntry};

use crate::stats::AuthorStats;

/// Aggregates processed log entries into per-author statistics.
///
/// Implements [`EntryProcessor`], so it can be plugged straight into a
/// parser. State is scoped to a single run: construct one aggregator per
/// parse, feed it entries, then read the statistics back out. Entries are
/// folded in as they arrive and dropped; only the O(authors) summaries are
/// retained.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StatsAggregator {
    stats_per_author: BTreeMap<CompactString, AuthorStats>,
}

impl StatsAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of commits across all authors.
    pub fn total_commits(&self) -> u64 {
        self.stats_per_author.values().map(AuthorStats::commits).sum()
    }

    /// Number of distinct author identities seen.
    pub fn author_count(&self) -> usize {
        self.stats_per_author.len()
    }

    /// Whether no entries have been processed yet.
    pub fn is_empty(&self) -> bool {
        self.stats_per_author.is_empty()
    }

    /// Distinct author identities, in lexicographic order.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.stats_per_author.keys().map(CompactString::as_str)
    }

    /// All author statistics, ordered by author name ascending.
    pub fn stats_by_author(&self) -> Vec<&AuthorStats> {
        self.stats_per_author.values().collect()
    }

    /// All author statistics, ordered by commit count descending.
    ///
    /// Ties break on author name so the ordering is deterministic.
    pub fn stats_by_commits(&self) -> Vec<&AuthorStats> {
        let mut stats = self.stats_by_author();
        stats.sort_by(|a, b| {
            b.commits()
                .cmp(&a.commits())
                .then_with(|| a.author().cmp(b.author()))
        });
        stats
    }

    /// Statistics for the given author.
    ///
    /// Unknown authors get a fresh zero-valued record rather than an error,
    /// and nothing is stored, so speculative lookups never grow the map.
    pub fn stats_for<'a>(&'a self, author: &str) -> Cow<'a, AuthorStats> {
        match self.stats_per_author.get(author) {
            Some(stats) => Cow::Borrowed(stats),
            None => Cow::Owned(AuthorStats::new(author)),
        }
    }

    /// The highest commit count of any single author, or 0 when no entries
    /// have been processed. Used to scale charts.
    pub fn most_commits(&self) -> u64 {
        self.stats_per_author
            .values()
            .map(AuthorStats::commits)
            .max()
            .unwrap_or(0)
    }
}

impl EntryProcessor for StatsAggregator {
    fn process(&mut self, entry: LogEntry) {
        let stats = self
            .stats_per_author
            .entry(entry.author.clone())
            .or_insert_with(|| {
                tracing::debug!("new author {:?}", entry.author);
                AuthorStats::new(entry.author.clone())
            });
        stats.update_with(&entry);
    }
}
