//! Markdown report generator
//!
//! Renders a dashboard view as Markdown tables. The same output is printed by
//! the `view` command, and it renders well in GitHub, GitLab and VS Code.

use crate::core::dashboard::{
    CardBody, DataTable, TabContent, UsersPage, SWAPS_DISABLED_HINT, SWAPS_DISABLED_TITLE,
};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/dashboard.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title());
        output = output.replace("{{tier}}", ctx.view.tier.as_str());
        output = output.replace("{{filter}}", &ctx.filter_label());
        output = output.replace("{{generated_at}}", &ctx.generated_at());
        output = output.replace("{{seed}}", &ctx.seed.to_string());

        let mut banner = String::new();
        if let Some(text) = ctx.view.banner {
            let _ = writeln!(banner, "> **{text}**\n");
        }
        if let Some(notice) = ctx.view.filter_notice {
            let _ = writeln!(banner, "> {notice}. Showing all time.\n");
        }
        output = output.replace("{{banner}}", &banner);

        output = output.replace("{{content}}", &Self::generate_content(&ctx.view.content));

        output
    }

    fn generate_content(content: &TabContent) -> String {
        let mut out = String::new();
        match content {
            TabContent::Charts(cards) => {
                for card in cards {
                    let _ = writeln!(out, "## {}\n\n_{} chart_\n", card.title, card.kind);
                    match &card.body {
                        CardBody::Data(table) if table.is_empty() => {
                            out.push_str("_No data for the selected range._\n\n");
                        }
                        CardBody::Data(table) => {
                            out.push_str(&markdown_table(table));
                            out.push('\n');
                        }
                        CardBody::Paywall(message) => {
                            let _ = writeln!(out, "> 🔒 {message}\n");
                        }
                    }
                }
            }
            TabContent::SwapsDisabled => {
                let _ = writeln!(out, "## {SWAPS_DISABLED_TITLE}\n\n{SWAPS_DISABLED_HINT}\n");
            }
            TabContent::Metrics(table) => {
                out.push_str("## Metric Definitions\n\n");
                out.push_str(&markdown_table(table));
            }
            TabContent::Users(page) => out.push_str(&Self::generate_users(page)),
        }
        out
    }

    fn generate_users(page: &UsersPage) -> String {
        let mut out = String::from("## Users\n\n");
        if page.table.is_empty() {
            out.push_str("_No users for the selected range._\n\n");
        } else {
            out.push_str(&markdown_table(&page.table));
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} (page {} of {})\n",
            page.summary(),
            page.page,
            page.total_pages
        );
        if let Some(notice) = page.export_notice {
            let _ = writeln!(out, "> Export Users: {notice}\n");
        }
        out
    }
}

/// Render a data table as a Markdown pipe table
#[must_use]
pub fn markdown_table(table: &DataTable) -> String {
    let escape = |cell: &str| cell.replace('|', "\\|");
    let mut out = String::new();

    let header: Vec<String> = table.columns.iter().map(|c| escape(c.as_str())).collect();
    let _ = writeln!(out, "| {} |", header.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(table.columns.len()));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| escape(c.as_str())).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipes_are_escaped_in_cells() {
        let mut table = DataTable::new(&["A", "B"]);
        table.push_row(vec!["x|y".to_string(), "1".to_string()]);
        assert_eq!(markdown_table(&table), "| A | B |\n|---|---|\n| x\\|y | 1 |\n");
    }
}
