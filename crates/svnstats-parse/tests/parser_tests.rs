use std::io::Cursor;
use std::io::Write;

use chrono::{Datelike, Timelike};
use svnstats_analyze::StatsAggregator;
use svnstats_core::{EntryProcessor, LogEntry, PathAction, PathKind};
use svnstats_parse::{LogParser, ParseError};

const SAMPLE_LOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log>
<logentry
   revision="21955">
<author>johnc</author>
<date>2017-06-07T12:04:04.132787Z</date>
<paths>
<path
   action="M"
   kind="file">/trunk/quake/src/Quake.h</path>
<path
   action="M"
   kind="file">/trunk/quake/src/Quake.c</path>
</paths>
<msg>Improve docs
	    Alignment fixes</msg>
</logentry>
</log>
"#;

#[derive(Default)]
struct Collect {
    entries: Vec<LogEntry>,
}

impl EntryProcessor for Collect {
    fn process(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}

#[test]
fn test_sample_log_parsing() {
    let mut parser = LogParser::new(Collect::default());
    parser.parse(Cursor::new(SAMPLE_LOG)).unwrap();
    let entries = parser.into_processor().entries;

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.revision, 21955);
    assert_eq!(entry.author, "johnc");
    assert_eq!(entry.date.year(), 2017);
    assert_eq!(entry.date.month(), 6);
    assert_eq!(entry.date.day(), 7);
    assert_eq!(entry.date.hour(), 12);
    assert_eq!(entry.date.minute(), 4);
    assert_eq!(entry.date.second(), 4);
    assert_eq!(entry.date.nanosecond(), 132_787_000);
    assert_eq!(entry.paths.len(), 2);
    assert_eq!(entry.paths[0].action, PathAction::Modified);
    assert_eq!(entry.paths[0].kind, PathKind::File);
    assert_eq!(entry.paths[0].path, "/trunk/quake/src/Quake.h");
    assert_eq!(entry.paths[1].action, PathAction::Modified);
    assert_eq!(entry.paths[1].kind, PathKind::File);
    assert_eq!(entry.paths[1].path, "/trunk/quake/src/Quake.c");
    assert_eq!(entry.message, "Improve docs\n\t    Alignment fixes");
}

#[test]
fn test_entries_arrive_in_document_order() {
    let log = concat!(
        "<log>",
        "<logentry revision='3'>",
        "<author>abe</author><date>2017-06-07T12:00:00.000000Z</date>",
        "</logentry>",
        "<logentry revision='1'>",
        "<author>bea</author><date>2017-06-06T12:00:00.000000Z</date>",
        "</logentry>",
        "<logentry revision='2'>",
        "<author>abe</author><date>2017-06-05T12:00:00.000000Z</date>",
        "</logentry>",
        "</log>",
    );

    let mut parser = LogParser::new(Collect::default());
    parser.parse(Cursor::new(log)).unwrap();
    let entries = parser.into_processor().entries;

    let revisions: Vec<u64> = entries.iter().map(|e| e.revision).collect();
    assert_eq!(revisions, vec![3, 1, 2]);
}

#[test]
fn test_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logfile.xml");
    let mut file = std::fs::File::create(&log_path).unwrap();
    file.write_all(SAMPLE_LOG.as_bytes()).unwrap();
    drop(file);

    let mut parser = LogParser::new(Collect::default());
    parser.parse_file(&log_path).unwrap();
    assert_eq!(parser.into_processor().entries.len(), 1);
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.xml");

    let mut parser = LogParser::new(Collect::default());
    let result = parser.parse_file(&missing);
    assert!(matches!(result, Err(ParseError::Io { .. })));
}

#[test]
fn test_parse_into_aggregator() {
    let mut aggregator = StatsAggregator::new();
    LogParser::new(&mut aggregator)
        .parse(Cursor::new(SAMPLE_LOG))
        .unwrap();

    assert_eq!(aggregator.total_commits(), 1);
    assert_eq!(aggregator.author_count(), 1);
    assert_eq!(aggregator.most_commits(), 1);

    let stats = aggregator.stats_for("johnc");
    assert_eq!(stats.commits(), 1);
    assert_eq!(stats.paths_in_commits(), 2);
    assert_eq!(stats.action_count(PathAction::Modified), 2);
    assert_eq!(stats.file_types_in_commits()["h"], 1);
    assert_eq!(stats.file_types_in_commits()["c"], 1);
    assert_eq!(stats.empty_messages(), 0);
    assert_eq!(
        stats.message_length(),
        "Improve docs\n\t    Alignment fixes".chars().count() as u64
    );
}
