//! Report command handler
//!
//! Writes a dashboard tab to a Markdown or HTML file.

use super::Session;
use crate::args::FilterArgs;
use connect_analytics::config::Config;
use connect_analytics::dashboard::Tab;
use connect_analytics::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use connect_analytics::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// # Arguments
/// * `tab` - Tab to report
/// * `filter` - Date filter selection
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the default reports directory
pub fn run(
    tab: &str,
    filter: &FilterArgs,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) {
    match generate_report(tab, filter, output_file, format_str, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed for tab '{tab}': {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    tab: &str,
    filter: &FilterArgs,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format: ReportFormat = format_str.parse().map_err(|e| format!("✗ {e}"))?;
    let tab: Tab = tab.parse().map_err(|e| format!("✗ {e}"))?;
    let filter = filter.to_filter().map_err(|e| format!("✗ {e}"))?;

    let output_path = output_file.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(format!("{}.{}", tab.key(), format.extension()))
        },
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create reports directory {}: {e}", parent.display())
            })?;
        }
    }

    let session = Session::from_config(config);
    let view = session.view(tab, filter, 1, config.dashboard.page_size);
    let ctx = ReportContext::new(&view, session.fixture.seed);

    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(&ctx, &output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?,
        ReportFormat::Html => HtmlReporter::new()
            .generate(&ctx, &output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?,
    }

    info!("{format} report for {tab} written to {}", output_path.display());
    Ok(output_path)
}
