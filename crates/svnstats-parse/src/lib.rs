//! Streaming parser for Subversion log files in XML format.
//!
//! Reads [`LogEntry`](svnstats_core::LogEntry) records from an XML log and
//! pushes them to an [`EntryProcessor`](svnstats_core::EntryProcessor) one at
//! a time, never keeping more than a single entry in memory. Log files
//! several hundreds of megabytes in size parse in constant space.
//!
//! To produce an XML log file for a Subversion repository:
//!
//! ```text
//! svn log --xml https://svnhost.com/my/repo/path > logfile.xml
//! ```
//!
//! ```rust,ignore
//! use svnstats_analyze::StatsAggregator;
//! use svnstats_parse::LogParser;
//!
//! let mut aggregator = StatsAggregator::new();
//! LogParser::new(&mut aggregator).parse_file(Path::new("logfile.xml"))?;
//!
//! println!("{} commits", aggregator.total_commits());
//! ```

mod error;
mod parser;

pub use error::ParseError;
pub use parser::LogParser;
