//! Event-driven log parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use svnstats_core::{AffectedPath, EntryProcessor, LogEntry, PathAction, PathKind};

use crate::error::ParseError;

/// Streaming parser for Subversion XML logs.
///
/// Makes a single forward pass over the document and pushes each completed
/// [`LogEntry`] to the configured [`EntryProcessor`], in document order. The
/// parser never retains delivered entries, and its working state is one
/// in-flight entry, one in-flight path and one text buffer, so memory use is
/// independent of the number of entries in the log.
pub struct LogParser<P> {
    processor: P,
}

impl<P: EntryProcessor> LogParser<P> {
    /// Create a new parser pushing entries to the given processor.
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Consume the parser and hand back its processor.
    pub fn into_processor(self) -> P {
        self.processor
    }

    /// Parse the given log file.
    ///
    /// The file handle is scoped to this call and closed on every exit path,
    /// including parse errors.
    pub fn parse_file(&mut self, path: &Path) -> Result<(), ParseError> {
        let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
        self.parse(BufReader::new(file))
    }

    /// Parse entries from the given stream.
    ///
    /// Stops at the first error. Entries fully parsed before the error have
    /// already been delivered to the processor and stay delivered; the
    /// in-flight partial entry is discarded, never delivered.
    pub fn parse<R: BufRead>(&mut self, source: R) -> Result<(), ParseError> {
        let mut reader = Reader::from_reader(source);
        let mut state = ParseState::default();
        let mut buf = Vec::with_capacity(4096);

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    self.handle_start(&mut state, &e)?;
                    state.depth += 1;
                }
                Event::Empty(e) => {
                    // A self-closing element is a start immediately followed
                    // by an end.
                    self.handle_start(&mut state, &e)?;
                    let name = e.local_name();
                    self.handle_end(&mut state, name.as_ref())?;
                }
                Event::End(e) => {
                    state.depth = state.depth.saturating_sub(1);
                    let name = e.local_name();
                    self.handle_end(&mut state, name.as_ref())?;
                }
                Event::Text(t) => {
                    if let Some(text) = state.text.as_mut() {
                        text.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
                    }
                }
                Event::CData(t) => {
                    if let Some(text) = state.text.as_mut() {
                        let raw = std::str::from_utf8(t.as_ref()).map_err(|_| {
                            ParseError::structure("invalid UTF-8 in CDATA section")
                        })?;
                        text.push_str(raw);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !state.root_seen {
            return Err(ParseError::structure("document contains no <log> element"));
        }
        if state.depth > 0 {
            return Err(ParseError::structure("unexpected end of document"));
        }

        tracing::debug!("parsed {} log entries", state.entries);
        Ok(())
    }

    fn handle_start(&mut self, state: &mut ParseState, e: &BytesStart<'_>) -> Result<(), ParseError> {
        let name = e.local_name();
        if !state.root_seen {
            if name.as_ref() != b"log" {
                return Err(ParseError::structure(format!(
                    "expected <log> root element, found <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            state.root_seen = true;
            return Ok(());
        }

        match name.as_ref() {
            b"logentry" => {
                let revision = required_attr(e, "revision")?;
                let revision = revision.parse::<u64>().map_err(|_| {
                    ParseError::structure(format!("invalid revision number {revision:?}"))
                })?;
                state.entry = Some(PendingEntry::new(revision));
            }
            b"author" | b"date" | b"msg" => {
                state.text = Some(String::new());
            }
            b"path" => {
                let action = required_attr(e, "action")?;
                let action = PathAction::from_code(&action).ok_or_else(|| {
                    ParseError::structure(format!("unknown path action code {action:?}"))
                })?;
                let kind = required_attr(e, "kind")?;
                let kind = PathKind::from_code(&kind).ok_or_else(|| {
                    ParseError::structure(format!("unknown path kind code {kind:?}"))
                })?;
                state.path = Some((action, kind));
                state.text = Some(String::new());
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_end(&mut self, state: &mut ParseState, name: &[u8]) -> Result<(), ParseError> {
        match name {
            b"logentry" => {
                let pending = state.entry.take().ok_or_else(|| {
                    ParseError::structure("</logentry> without matching <logentry>")
                })?;
                self.processor.process(pending.finish()?);
                state.entries += 1;
            }
            b"author" => {
                let text = state.take_text("author")?;
                state.entry_mut("author")?.author = text.trim().to_string();
            }
            b"date" => {
                let text = state.take_text("date")?;
                let trimmed = text.trim();
                let date = DateTime::parse_from_rfc3339(trimmed).map_err(|source| {
                    ParseError::DateFormat {
                        text: trimmed.to_string(),
                        source,
                    }
                })?;
                state.entry_mut("date")?.date = Some(date);
            }
            b"path" => {
                let text = state.take_text("path")?;
                let (action, kind) = state
                    .path
                    .take()
                    .ok_or_else(|| ParseError::structure("</path> without matching <path>"))?;
                state
                    .entry_mut("path")?
                    .paths
                    .push(AffectedPath::new(action, kind, text.trim()));
            }
            b"msg" => {
                let text = state.take_text("msg")?;
                state.entry_mut("msg")?.message = text.trim().to_string();
            }
            _ => {}
        }
        Ok(())
    }
}

/// In-flight parse state. Holds at most one pending entry, one pending path
/// and one text accumulation buffer, regardless of input size.
#[derive(Default)]
struct ParseState {
    entry: Option<PendingEntry>,
    path: Option<(PathAction, PathKind)>,
    text: Option<String>,
    root_seen: bool,
    depth: usize,
    entries: u64,
}

impl ParseState {
    fn entry_mut(&mut self, element: &str) -> Result<&mut PendingEntry, ParseError> {
        self.entry.as_mut().ok_or_else(|| {
            ParseError::structure(format!("<{element}> element outside <logentry>"))
        })
    }

    fn take_text(&mut self, element: &str) -> Result<String, ParseError> {
        self.text
            .take()
            .ok_or_else(|| ParseError::structure(format!("</{element}> without buffered text")))
    }
}

/// An entry still being scanned. Turned into a [`LogEntry`] at the closing
/// `</logentry>` boundary, once all required pieces are known.
struct PendingEntry {
    revision: u64,
    author: String,
    date: Option<DateTime<FixedOffset>>,
    paths: Vec<AffectedPath>,
    message: String,
}

impl PendingEntry {
    fn new(revision: u64) -> Self {
        Self {
            revision,
            author: String::new(),
            date: None,
            paths: Vec::new(),
            message: String::new(),
        }
    }

    fn finish(self) -> Result<LogEntry, ParseError> {
        let date = self.date.ok_or_else(|| {
            ParseError::structure(format!("logentry {} has no <date>", self.revision))
        })?;
        let mut entry = LogEntry::new(self.revision, self.author, date);
        entry.paths = self.paths;
        entry.message = self.message;
        Ok(entry)
    }
}

fn required_attr(e: &BytesStart<'_>, name: &str) -> Result<String, ParseError> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(value.into_owned());
        }
    }
    Err(ParseError::structure(format!(
        "<{}> element is missing required attribute {name:?}",
        String::from_utf8_lossy(e.local_name().as_ref())
    )))
}
