//! Accumulated per-author statistics.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset, Timelike};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use svnstats_core::{LogEntry, PathAction};

/// Bucket used for paths without a filename extension.
pub const OTHER_FILE_TYPE: &str = "other";

/// Aggregated statistics for one author found in the log.
///
/// All counters are owned by this type: the only way to change them is
/// [`AuthorStats::update_with`], which keeps the derived invariants in
/// lockstep (the commit count always equals the sum of the per-hour counts,
/// the per-action counts always sum to the touched-path count). Everything
/// else is a read-only query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorStats {
    author: CompactString,
    commits: u64,
    commits_per_hour: [u64; 24],
    paths_in_commits: u64,
    file_types_in_commits: BTreeMap<CompactString, u64>,
    empty_messages: u64,
    message_length: u64,
    first_commit: Option<DateTime<FixedOffset>>,
    last_commit: Option<DateTime<FixedOffset>>,
    action_counts: BTreeMap<PathAction, u64>,
}

impl AuthorStats {
    /// Create a zero-valued record for the given author.
    pub fn new(author: impl Into<CompactString>) -> Self {
        Self {
            author: author.into(),
            commits: 0,
            commits_per_hour: [0; 24],
            paths_in_commits: 0,
            file_types_in_commits: BTreeMap::new(),
            empty_messages: 0,
            message_length: 0,
            first_commit: None,
            last_commit: None,
            action_counts: BTreeMap::new(),
        }
    }

    /// Fold one log entry into the statistics.
    pub fn update_with(&mut self, entry: &LogEntry) {
        debug_assert_eq!(self.author, entry.author, "entry for a different author");

        self.commits += 1;
        // Hour of day in the timestamp's own zone offset.
        self.commits_per_hour[entry.date.hour() as usize] += 1;

        self.paths_in_commits += entry.paths.len() as u64;

        // Each file type counts at most once per commit, however many paths
        // of that type the commit touched.
        let extensions: BTreeSet<&str> = entry
            .paths
            .iter()
            .map(|path| path.extension().unwrap_or(OTHER_FILE_TYPE))
            .collect();
        for extension in extensions {
            *self
                .file_types_in_commits
                .entry(CompactString::from(extension))
                .or_insert(0) += 1;
        }

        for path in &entry.paths {
            *self.action_counts.entry(path.action).or_insert(0) += 1;
        }

        if entry.has_empty_message() {
            self.empty_messages += 1;
        } else {
            self.message_length += entry.message.chars().count() as u64;
        }

        if self.first_commit.is_none_or(|first| entry.date < first) {
            self.first_commit = Some(entry.date);
        }
        if self.last_commit.is_none_or(|last| entry.date > last) {
            self.last_commit = Some(entry.date);
        }
    }

    /// The author these statistics belong to.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Number of commits made by this author.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Commit counts keyed by hour of day (0-23), in each commit's own zone.
    pub fn commits_per_hour(&self) -> &[u64; 24] {
        &self.commits_per_hour
    }

    /// Total number of paths touched across all commits (not deduplicated).
    pub fn paths_in_commits(&self) -> u64 {
        self.paths_in_commits
    }

    /// Number of commits touching at least one path of each file type.
    pub fn file_types_in_commits(&self) -> &BTreeMap<CompactString, u64> {
        &self.file_types_in_commits
    }

    /// Number of commits with an empty or whitespace-only message.
    pub fn empty_messages(&self) -> u64 {
        self.empty_messages
    }

    /// Summed length of all non-empty commit messages.
    pub fn message_length(&self) -> u64 {
        self.message_length
    }

    /// Timestamp of the chronologically earliest commit seen.
    pub fn first_commit(&self) -> Option<DateTime<FixedOffset>> {
        self.first_commit
    }

    /// Timestamp of the chronologically latest commit seen.
    pub fn last_commit(&self) -> Option<DateTime<FixedOffset>> {
        self.last_commit
    }

    /// Number of paths this author touched with the given action.
    pub fn action_count(&self, action: PathAction) -> u64 {
        self.action_counts.get(&action).copied().unwrap_or(0)
    }

    /// Average number of paths per commit, using integer division.
    ///
    /// # Panics
    ///
    /// Panics when no commit has been recorded yet.
    pub fn average_commit_size(&self) -> u64 {
        self.paths_in_commits / self.commits
    }

    /// Average length of this author's commit messages, using integer
    /// division over the total commit count.
    ///
    /// # Panics
    ///
    /// Panics when no commit has been recorded yet.
    pub fn average_message_length(&self) -> u64 {
        self.message_length / self.commits
    }
}
