//! The processor interface between the parser and its consumers.

use crate::entry::LogEntry;

/// Strategy for handling [`LogEntry`] values as a parser produces them.
///
/// The parser hands over ownership of each completed entry and retains
/// nothing, so processing stays O(1) in the number of entries no matter how
/// large the log file is. Implementations should follow suit and avoid
/// holding on to the entries themselves: a typical repository log contains a
/// great many of them.
pub trait EntryProcessor {
    /// Process one log entry. Must accept any well-formed entry, including
    /// ones with an empty author identity or an empty message.
    fn process(&mut self, entry: LogEntry);
}

impl<P: EntryProcessor + ?Sized> EntryProcessor for &mut P {
    fn process(&mut self, entry: LogEntry) {
        (**self).process(entry);
    }
}
