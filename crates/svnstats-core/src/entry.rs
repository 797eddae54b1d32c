//! Log entry and affected path types.

use chrono::{DateTime, FixedOffset};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// What a commit did to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathAction {
    /// Path was added (`A`).
    Added,
    /// Path was deleted (`D`).
    Deleted,
    /// Path was modified (`M`).
    Modified,
    /// Path was replaced (`R`).
    Replaced,
}

impl PathAction {
    /// All actions, in the order Subversion documents them.
    pub const ALL: [PathAction; 4] = [
        PathAction::Added,
        PathAction::Deleted,
        PathAction::Modified,
        PathAction::Replaced,
    ];

    /// Resolve a single-letter action code from a log file.
    ///
    /// Returns `None` for anything other than `A`, `D`, `M` or `R` so callers
    /// can reject unrecognized codes instead of silently carrying free-form
    /// strings around.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(PathAction::Added),
            "D" => Some(PathAction::Deleted),
            "M" => Some(PathAction::Modified),
            "R" => Some(PathAction::Replaced),
            _ => None,
        }
    }

    /// The single-letter code used in the log format.
    pub fn code(&self) -> &'static str {
        match self {
            PathAction::Added => "A",
            PathAction::Deleted => "D",
            PathAction::Modified => "M",
            PathAction::Replaced => "R",
        }
    }
}

/// Kind of node a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

impl PathKind {
    /// Resolve a kind code from a log file (`file` or `dir`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "file" => Some(PathKind::File),
            "dir" => Some(PathKind::Dir),
            _ => None,
        }
    }

    /// The code used in the log format.
    pub fn code(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Dir => "dir",
        }
    }
}

/// A path affected by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedPath {
    /// What the commit did to the path.
    pub action: PathAction,

    /// Whether the path is a file or a directory.
    pub kind: PathKind,

    /// The path text. Kept as an opaque string: log files can come from file
    /// systems with conventions we know nothing about.
    pub path: String,
}

impl AffectedPath {
    /// Create a new affected path.
    pub fn new(action: PathAction, kind: PathKind, path: impl Into<String>) -> Self {
        Self {
            action,
            kind,
            path: path.into(),
        }
    }

    /// The filename extension of the path text, if it has one.
    ///
    /// The extension is whatever follows the last `.` in the path text.
    /// Returns `None` when there is no `.` or when nothing follows it.
    pub fn extension(&self) -> Option<&str> {
        match self.path.rfind('.') {
            Some(idx) if idx + 1 < self.path.len() => Some(&self.path[idx + 1..]),
            _ => None,
        }
    }
}

/// One entry in a Subversion log: a single commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Revision number. Unique per repository, but not enforced here.
    pub revision: u64,

    /// Author identity as the log supplied it. May be empty.
    pub author: CompactString,

    /// Commit timestamp, carrying the zone offset the log recorded.
    pub date: DateTime<FixedOffset>,

    /// Paths touched by the commit, in log order.
    pub paths: Vec<AffectedPath>,

    /// Commit message. An absent message is represented as the empty string.
    pub message: String,
}

impl LogEntry {
    /// Create a new entry with no paths and an empty message.
    pub fn new(
        revision: u64,
        author: impl Into<CompactString>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            revision,
            author: author.into(),
            date,
            paths: Vec::new(),
            message: String::new(),
        }
    }

    /// Number of paths touched by this commit.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether the commit message is empty or whitespace-only.
    pub fn has_empty_message(&self) -> bool {
        self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_codes() {
        assert_eq!(PathAction::from_code("M"), Some(PathAction::Modified));
        assert_eq!(PathAction::from_code("D"), Some(PathAction::Deleted));
        assert_eq!(PathAction::from_code("A"), Some(PathAction::Added));
        assert_eq!(PathAction::from_code("R"), Some(PathAction::Replaced));
        assert_eq!(PathAction::from_code("X"), None);
        assert_eq!(PathAction::from_code("m"), None);
        assert_eq!(PathAction::Modified.code(), "M");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(PathKind::from_code("file"), Some(PathKind::File));
        assert_eq!(PathKind::from_code("dir"), Some(PathKind::Dir));
        assert_eq!(PathKind::from_code("symlink"), None);
        assert_eq!(PathKind::Dir.code(), "dir");
    }

    #[test]
    fn test_extension() {
        let path = |p: &str| AffectedPath::new(PathAction::Modified, PathKind::File, p);

        assert_eq!(path("Test.java").extension(), Some("java"));
        assert_eq!(path("/foo/bar/Test.java").extension(), Some("java"));
        assert_eq!(path("/foo/bar-1.0.0/Test.java").extension(), Some("java"));
        assert_eq!(path("/foo/bar/startup").extension(), None);
        // A trailing dot carries no extension.
        assert_eq!(path("/foo/bar.").extension(), None);
        assert_eq!(path("").extension(), None);
    }

    #[test]
    fn test_empty_message_detection() {
        let date = "2017-06-07T12:04:04.132787Z".parse().unwrap();
        let mut entry = LogEntry::new(1, "johnc", date);
        assert!(entry.has_empty_message());

        entry.message = "   \n\t ".to_string();
        assert!(entry.has_empty_message());

        entry.message = "Fix build".to_string();
        assert!(!entry.has_empty_message());
    }
}
