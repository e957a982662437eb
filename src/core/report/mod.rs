//! Report generation module for dashboard views
//!
//! This module renders a [`DashboardView`] to Markdown or HTML using embedded
//! templates. The `view` command prints the Markdown rendering; the `report`
//! command writes either format to a file.

pub mod formats;

use crate::core::dashboard::{DashboardView, TabContent};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Wraps the view with the metadata shown in report headers.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// View being reported
    pub view: &'a DashboardView,
    /// Seed the fixture was generated with
    pub seed: u64,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(view: &'a DashboardView, seed: u64) -> Self {
        Self { view, seed }
    }

    /// Report title, e.g. `Connect Analytics (Free): Session`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}: {}", self.view.heading(), self.view.tab)
    }

    /// Applied filter label, or `n/a` for unfiltered tabs
    #[must_use]
    pub fn filter_label(&self) -> String {
        self.view
            .filter_label()
            .unwrap_or_else(|| "n/a".to_string())
    }

    /// Generation timestamp formatted for headers
    #[must_use]
    pub fn generated_at(&self) -> String {
        self.view
            .generated_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
    }

    /// Number of cards shown, for chart tabs
    #[must_use]
    pub fn card_count(&self) -> usize {
        match &self.view.content {
            TabContent::Charts(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
