//! HTML report rendering for svnstats.
//!
//! Renders the statistics accumulated by a
//! [`StatsAggregator`](svnstats_analyze::StatsAggregator) as a standalone
//! HTML document with simple bar charts: global charts comparing authors,
//! followed by a section per author. The stylesheet is embedded in the
//! document, so the report is a single self-contained file.

mod html;

pub use html::{HtmlReportWriter, ReportConfig, ReportConfigBuilder};
