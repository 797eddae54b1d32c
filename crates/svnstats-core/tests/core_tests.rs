use svnstats_core::{AffectedPath, EntryProcessor, LogEntry, PathAction, PathKind};

fn entry(revision: u64, author: &str, date: &str) -> LogEntry {
    LogEntry::new(revision, author, date.parse().unwrap())
}

#[test]
fn test_log_entry_construction() {
    let mut e = entry(21955, "johnc", "2017-06-07T12:04:04.132787Z");

    assert_eq!(e.revision, 21955);
    assert_eq!(e.author, "johnc");
    assert_eq!(e.path_count(), 0);
    assert!(e.has_empty_message());

    e.paths.push(AffectedPath::new(
        PathAction::Modified,
        PathKind::File,
        "/trunk/quake/src/Quake.h",
    ));
    e.paths.push(AffectedPath::new(
        PathAction::Modified,
        PathKind::File,
        "/trunk/quake/src/Quake.c",
    ));
    e.message = "Improve docs".to_string();

    assert_eq!(e.path_count(), 2);
    assert!(!e.has_empty_message());
    assert_eq!(e.paths[0].extension(), Some("h"));
    assert_eq!(e.paths[1].extension(), Some("c"));
}

#[test]
fn test_date_preserves_offset() {
    // The hour of day stays in the timestamp's own zone, unnormalized.
    let e = entry(1, "a", "2017-06-07T23:30:00.000000+02:00");
    use chrono::Timelike;
    assert_eq!(e.date.hour(), 23);

    let utc = entry(2, "a", "2017-06-07T23:30:00.000000Z");
    assert_eq!(utc.date.hour(), 23);
    assert_ne!(e.date, utc.date);
}

#[test]
fn test_processor_lending() {
    // The blanket impl lets a caller lend a processor and keep ownership.
    struct Counter(usize);

    impl EntryProcessor for Counter {
        fn process(&mut self, _entry: LogEntry) {
            self.0 += 1;
        }
    }

    fn drive<P: EntryProcessor>(mut processor: P) {
        processor.process(LogEntry::new(
            1,
            "a",
            "2017-06-07T12:00:00.000000Z".parse().unwrap(),
        ));
    }

    let mut counter = Counter(0);
    drive(&mut counter);
    drive(&mut counter);
    assert_eq!(counter.0, 2);
}
