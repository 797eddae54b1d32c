//! Core types and traits for svnstats.
//!
//! This crate provides the fundamental data structures shared by the rest of
//! the svnstats ecosystem: log entries, affected paths, and the processor
//! trait connecting the parser to downstream consumers.

mod entry;
mod processor;

pub use entry::{AffectedPath, LogEntry, PathAction, PathKind};
pub use processor::EntryProcessor;
