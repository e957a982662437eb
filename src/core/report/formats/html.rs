//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. Chart data is
//! shown as tables; paywalled cards show their upgrade message.

use crate::core::dashboard::{
    CardBody, DataTable, TabContent, UsersPage, SWAPS_DISABLED_HINT, SWAPS_DISABLED_TITLE,
};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_html(&ctx.title()));
        output = output.replace("{{tier}}", ctx.view.tier.as_str());
        output = output.replace("{{filter}}", &escape_html(&ctx.filter_label()));
        output = output.replace("{{generated_at}}", &ctx.generated_at());
        output = output.replace("{{seed}}", &ctx.seed.to_string());

        let mut banner = String::new();
        if let Some(text) = ctx.view.banner {
            let _ = writeln!(banner, "<p class=\"banner\">{}</p>", escape_html(text));
        }
        if let Some(notice) = ctx.view.filter_notice {
            let _ = writeln!(
                banner,
                "<p class=\"notice\">{}. Showing all time.</p>",
                escape_html(notice)
            );
        }
        output = output.replace("{{banner}}", &banner);

        output = output.replace("{{content}}", &Self::generate_content(&ctx.view.content));

        output
    }

    fn generate_content(content: &TabContent) -> String {
        let mut html = String::new();
        match content {
            TabContent::Charts(cards) => {
                html.push_str("<div class=\"cards\">\n");
                for card in cards {
                    let _ = writeln!(
                        html,
                        "<section class=\"card\"><h3>{}</h3><div class=\"kind\">{} chart</div>",
                        escape_html(&card.title),
                        card.kind
                    );
                    match &card.body {
                        CardBody::Data(table) if table.is_empty() => {
                            html.push_str("<p>No data for the selected range.</p>\n");
                        }
                        CardBody::Data(table) => html.push_str(&html_table(table)),
                        CardBody::Paywall(message) => {
                            let _ = writeln!(
                                html,
                                "<div class=\"paywall\">&#128274; {}</div>",
                                escape_html(message)
                            );
                        }
                    }
                    html.push_str("</section>\n");
                }
                html.push_str("</div>\n");
            }
            TabContent::SwapsDisabled => {
                let _ = writeln!(
                    html,
                    "<section class=\"card\"><h3>{SWAPS_DISABLED_TITLE}</h3><p>{SWAPS_DISABLED_HINT}</p></section>"
                );
            }
            TabContent::Metrics(table) => {
                html.push_str("<h2>Metric Definitions</h2>\n");
                html.push_str(&html_table(table));
            }
            TabContent::Users(page) => html.push_str(&Self::generate_users(page)),
        }
        html
    }

    fn generate_users(page: &UsersPage) -> String {
        let mut html = String::from("<h2>Users</h2>\n");
        if page.table.is_empty() {
            html.push_str("<p>No users for the selected range.</p>\n");
        } else {
            html.push_str(&html_table(&page.table));
        }
        let _ = writeln!(
            html,
            "<p class=\"meta\">{} (page {} of {})</p>",
            page.summary(),
            page.page,
            page.total_pages
        );
        if let Some(notice) = page.export_notice {
            let _ = writeln!(
                html,
                "<p class=\"notice\">Export Users: {}</p>",
                escape_html(notice)
            );
        }
        html
    }
}

/// Escape text for HTML element content and attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn html_table(table: &DataTable) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape_html(column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html_content = self.render(ctx)?;
        fs::write(output_path, html_content)?;
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
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn tables_escape_cells() {
        let mut table = DataTable::new(&["Pair"]);
        table.push_row(vec!["ETH<USDC".to_string()]);
        let html = html_table(&table);
        assert!(html.contains("<th>Pair</th>"));
        assert!(html.contains("<td>ETH&lt;USDC</td>"));
    }
}
