//! HTML report writer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use derive_builder::Builder;

use svnstats_analyze::{AuthorStats, StatsAggregator};
use svnstats_core::PathAction;

/// Stylesheet embedded into every report.
const STYLE_SHEET: &str = include_str!("style.css");

/// Configuration for report rendering.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ReportConfig {
    /// Pixel width of the longest bar in each chart.
    #[builder(default = "500")]
    pub chart_width: u64,

    /// Number of file types shown in the global file type chart.
    #[builder(default = "20")]
    pub file_type_limit: usize,

    /// Number of file types shown in each per-author file type chart.
    #[builder(default = "10")]
    pub author_file_type_limit: usize,

    /// Number of authors shown in the per-action leaderboards.
    #[builder(default = "10")]
    pub top_author_limit: usize,
}

impl ReportConfig {
    /// Create a new config builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_width: 500,
            file_type_limit: 20,
            author_file_type_limit: 10,
            top_author_limit: 10,
        }
    }
}

/// Writes the statistics accumulated by a [`StatsAggregator`] as an HTML
/// document with bar charts.
///
/// Bars are scaled so the largest value in a chart spans the configured
/// chart width. A chart whose largest value is 0 has nothing to say and is
/// omitted entirely, heading included.
pub struct HtmlReportWriter<'a> {
    aggregator: &'a StatsAggregator,
    config: ReportConfig,
}

impl<'a> HtmlReportWriter<'a> {
    /// Create a writer with the default configuration.
    pub fn new(aggregator: &'a StatsAggregator) -> Self {
        Self::with_config(aggregator, ReportConfig::default())
    }

    /// Create a writer with a custom configuration.
    pub fn with_config(aggregator: &'a StatsAggregator, config: ReportConfig) -> Self {
        Self { aggregator, config }
    }

    /// Write the report to the given file, creating or truncating it.
    ///
    /// The file handle is scoped to this call and closed on every exit path.
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out)?;
        out.flush()
    }

    /// Write the report to the given writer.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<!doctype html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<title>Subversion Commit Statistics</title>")?;
        writeln!(out, "<style>")?;
        writeln!(out, "{STYLE_SHEET}")?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Subversion Commit Statistics</h1>")?;

        self.write_global_section(out)?;
        self.write_author_section(out)?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(())
    }

    fn write_global_section(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<h2>Global statistics</h2>")?;

        self.write_author_chart(out, "Commit counts per author", None, |stats| {
            stats.commits()
        })?;
        self.write_author_chart(out, "Average commit size per author", None, |stats| {
            stats.average_commit_size()
        })?;

        let mut hours = [0u64; 24];
        for stats in self.aggregator.stats_by_author() {
            for (hour, count) in stats.commits_per_hour().iter().enumerate() {
                hours[hour] += count;
            }
        }
        self.write_hour_chart(out, "Commit time distribution", &hours)?;

        let mut file_types: BTreeMap<&str, u64> = BTreeMap::new();
        for stats in self.aggregator.stats_by_author() {
            for (file_type, count) in stats.file_types_in_commits() {
                *file_types.entry(file_type.as_str()).or_insert(0) += count;
            }
        }
        self.write_file_type_chart(
            out,
            &format!("File types in commits (top {})", self.config.file_type_limit),
            self.config.file_type_limit,
            file_types
                .into_iter()
                .map(|(file_type, count)| (file_type.to_string(), count))
                .collect(),
        )?;

        self.write_author_chart(
            out,
            "Average commit message length per author",
            None,
            |stats| stats.average_message_length(),
        )?;
        self.write_author_chart(out, "Empty commit messages per author", None, |stats| {
            stats.empty_messages()
        })?;

        let leaderboards = [
            ("add-ers", PathAction::Added),
            ("delete-ers", PathAction::Deleted),
            ("modify-ers", PathAction::Modified),
            ("replace-ers", PathAction::Replaced),
        ];
        for (label, action) in leaderboards {
            self.write_author_chart(
                out,
                &format!("Top {} file {label}", self.config.top_author_limit),
                Some(self.config.top_author_limit),
                |stats| stats.action_count(action),
            )?;
        }
        Ok(())
    }

    fn write_author_section(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<h2>Author statistics</h2>")?;
        for author in self.aggregator.authors() {
            writeln!(out, "<a href='#{0}'>{0}</a>", escape(author))?;
        }

        for stats in self.aggregator.stats_by_author() {
            let author = escape(stats.author());
            writeln!(out, "<a id='{author}'></a>")?;
            writeln!(out, "<h3>{author}</h3>")?;

            if let Some((first, last)) = stats.first_commit().zip(stats.last_commit()) {
                writeln!(out, "<p>")?;
                writeln!(
                    out,
                    "Author {author} was active between {} and {}, and performed <b>{}</b> commits.",
                    first.format("%Y-%m-%d"),
                    last.format("%Y-%m-%d"),
                    stats.commits()
                )?;
                writeln!(
                    out,
                    "The commits added {} files, removed {} files, modified {} files and replaced {} files.",
                    stats.action_count(PathAction::Added),
                    stats.action_count(PathAction::Deleted),
                    stats.action_count(PathAction::Modified),
                    stats.action_count(PathAction::Replaced)
                )?;
                writeln!(out, "</p>")?;
            }

            self.write_hour_chart(
                out,
                &format!("Commit time distribution for {}", stats.author()),
                stats.commits_per_hour(),
            )?;
            self.write_file_type_chart(
                out,
                &format!(
                    "File types in commits for {} (top {})",
                    stats.author(),
                    self.config.author_file_type_limit
                ),
                self.config.author_file_type_limit,
                stats
                    .file_types_in_commits()
                    .iter()
                    .map(|(file_type, count)| (file_type.to_string(), *count))
                    .collect(),
            )?;
        }
        Ok(())
    }

    /// Chart with one bar per author, sorted by value descending.
    fn write_author_chart(
        &self,
        out: &mut dyn Write,
        title: &str,
        limit: Option<usize>,
        value: impl Fn(&AuthorStats) -> u64,
    ) -> io::Result<()> {
        let mut data: Vec<(String, u64)> = self
            .aggregator
            .stats_by_author()
            .into_iter()
            .map(|stats| (stats.author().to_string(), value(stats)))
            .collect();
        data.sort_by(|a, b| b.1.cmp(&a.1));
        self.write_chart(out, title, limit, data)
    }

    /// Histogram over the hours of the day, in hour order.
    fn write_hour_chart(
        &self,
        out: &mut dyn Write,
        title: &str,
        hours: &[u64; 24],
    ) -> io::Result<()> {
        let data = hours
            .iter()
            .enumerate()
            .map(|(hour, &count)| (format!("{hour}:00"), count))
            .collect();
        self.write_chart(out, title, None, data)
    }

    /// File type chart, sorted by count descending and truncated.
    fn write_file_type_chart(
        &self,
        out: &mut dyn Write,
        title: &str,
        limit: usize,
        mut data: Vec<(String, u64)>,
    ) -> io::Result<()> {
        data.sort_by(|a, b| b.1.cmp(&a.1));
        self.write_chart(out, title, Some(limit), data)
    }

    fn write_chart(
        &self,
        out: &mut dyn Write,
        title: &str,
        limit: Option<usize>,
        mut data: Vec<(String, u64)>,
    ) -> io::Result<()> {
        if let Some(limit) = limit {
            data.truncate(limit);
        }

        let max = data.iter().map(|(_, value)| *value).max().unwrap_or(0);
        if max == 0 {
            return Ok(());
        }

        writeln!(out, "<h4>{}</h4>", escape(title))?;
        writeln!(out, "<div class='chart'>")?;
        for (label, value) in &data {
            let width = self.config.chart_width * value / max;
            writeln!(
                out,
                "<div style='width: {width}px;'>{} ({value})</div>",
                escape(label)
            )?;
        }
        writeln!(out, "</div>")?;
        Ok(())
    }
}

/// Minimal HTML escaping for text interpolated into markup.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
