//! View command handler
//!
//! Prints a dashboard tab as Markdown.

use super::Session;
use crate::args::FilterArgs;
use connect_analytics::config::Config;
use connect_analytics::dashboard::Tab;
use connect_analytics::error;
use connect_analytics::report::{MarkdownReporter, ReportContext, ReportGenerator};

/// Run the view command
pub fn run(tab: &str, filter: &FilterArgs, page: usize, config: &Config) {
    match render_view(tab, filter, page, config) {
        Ok(markdown) => print!("{markdown}"),
        Err(err) => {
            error!("View failed for tab '{tab}': {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn render_view(
    tab: &str,
    filter: &FilterArgs,
    page: usize,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    let tab: Tab = tab.parse()?;
    let filter = filter.to_filter()?;

    let session = Session::from_config(config);
    let view = session.view(tab, filter, page, config.dashboard.page_size);
    let ctx = ReportContext::new(&view, session.fixture.seed);
    MarkdownReporter::new().render(&ctx)
}
