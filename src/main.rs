//! svnstats - per-author commit statistics for Subversion repositories.
//!
//! Usage:
//!   svnstats <LOG_FILE> <REPORT_FILE>
//!
//! Reads a Subversion XML log file (produce one with
//! `svn log --xml <url> > logfile.xml`), aggregates per-author commit
//! statistics in a single streaming pass, and writes them to an HTML report
//! with bar-chart visualizations.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use svnstats_analyze::StatsAggregator;
use svnstats_parse::LogParser;
use svnstats_report::HtmlReportWriter;

#[derive(Parser)]
#[command(
    name = "svnstats",
    version,
    about = "Aggregates a Subversion XML log into an HTML commit statistics report",
    long_about = "Reads a Subversion log file in XML format and writes aggregated \
                  per-author commit statistics to an HTML report.\n\n\
                  Produce a log file for your repository with:\n\
                  \tsvn log --xml https://svnhost.com/my/repo/path > logfile.xml\n\n\
                  Log files several hundreds of megabytes in size are processed in \
                  a single streaming pass with constant memory use."
)]
struct Cli {
    /// Path to the Subversion XML log file
    log_file: PathBuf,

    /// Path of the HTML report file to write
    report_file: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();

    if cli.report_file.exists() {
        eprintln!(
            "Warning: report file {} exists and will be overwritten",
            cli.report_file.display()
        );
    }

    eprintln!("Reading {}", cli.log_file.display());
    let mut aggregator = StatsAggregator::new();
    LogParser::new(&mut aggregator)
        .parse_file(&cli.log_file)
        .context("Parsing log file failed")?;

    println!(
        "Processed {} commits made by {} authors",
        aggregator.total_commits(),
        aggregator.author_count()
    );

    eprintln!("Writing HTML report to {}", cli.report_file.display());
    HtmlReportWriter::new(&aggregator)
        .write_to_file(&cli.report_file)
        .context("Writing report failed")?;

    Ok(())
}

/// Initialize logging with environment-based filtering.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
