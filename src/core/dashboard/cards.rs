//! Chart cards for the chart tabs
//!
//! Each card carries its data as a plain table plus an [`Access`] level.
//! [`ChartCard::render`] applies the tier: Pro sees every card, Free sees
//! open cards, paywall messages for overlay cards and nothing for Pro-only
//! cards.

use crate::core::filter::{filter_records_at, DateFilter};
use crate::core::fixtures::AnalyticsData;
use crate::core::models::{LabeledValue, MetricDefinition, TierComparison};
use crate::core::tier::{Access, DashboardContext, Visibility};
use chrono::{DateTime, Utc};
use std::fmt;

/// How the chart would be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Line chart over time or category
    Line,
    /// Area chart
    Area,
    /// Bar chart
    Bar,
    /// Pie chart
    Pie,
    /// Scatter plot
    Scatter,
    /// Heat map grid
    Heatmap,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Heatmap => "heatmap",
        };
        f.write_str(name)
    }
}

/// Column headers plus stringified rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Column headers
    pub columns: Vec<String>,
    /// Row cells, one `Vec` per row
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given headers
    #[must_use]
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Whether there are no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A chart card before gating
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCard {
    /// Card title
    pub title: &'static str,
    /// Chart type
    pub kind: ChartKind,
    /// Gating for Free users
    pub access: Access,
    /// Chart data
    pub data: DataTable,
}

/// What a rendered card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    /// The chart data
    Data(DataTable),
    /// Paywall message in place of the data
    Paywall(String),
}

/// A chart card after gating
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    /// Card title
    pub title: String,
    /// Chart type
    pub kind: ChartKind,
    /// Data or paywall
    pub body: CardBody,
}

impl RenderedCard {
    /// Whether the card is behind the paywall
    #[must_use]
    pub const fn is_paywalled(&self) -> bool {
        matches!(self.body, CardBody::Paywall(_))
    }
}

impl ChartCard {
    fn new(title: &'static str, kind: ChartKind, access: Access, data: DataTable) -> Self {
        Self {
            title,
            kind,
            access,
            data,
        }
    }

    /// Apply the context's tier; `None` means the card is hidden
    #[must_use]
    pub fn render(self, ctx: &DashboardContext) -> Option<RenderedCard> {
        let body = match ctx.visibility(&self.access) {
            Visibility::Full => CardBody::Data(self.data),
            Visibility::Paywalled(message) => CardBody::Paywall(message),
            Visibility::Hidden => return None,
        };
        Some(RenderedCard {
            title: self.title.to_string(),
            kind: self.kind,
            body,
        })
    }
}

/// Format a number without a trailing `.0` for whole values
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn labeled_table(label: &str, value: &str, values: &[LabeledValue]) -> DataTable {
    let mut table = DataTable::new(&[label, value]);
    for item in values {
        table.push_row(vec![item.label.clone(), format_number(item.value)]);
    }
    table
}

fn comparison_table(label: &str, values: &[TierComparison]) -> DataTable {
    let mut table = DataTable::new(&[label, "Free", "Pro"]);
    for item in values {
        table.push_row(vec![
            item.label.clone(),
            format_number(item.free),
            format_number(item.pro),
        ]);
    }
    table
}

/// Session tab: sessions and connection flow
#[must_use]
pub fn session_cards(
    data: &AnalyticsData,
    filter: &DateFilter,
    now: DateTime<Utc>,
) -> Vec<ChartCard> {
    let session = &data.session;
    let connection = &data.connection;

    let mut daily = DataTable::new(&["Date", "Free", "Pro"]);
    for point in filter_records_at(&session.daily, filter, now) {
        daily.push_row(vec![
            point.date.to_string(),
            point.free.to_string(),
            point.pro.to_string(),
        ]);
    }

    vec![
        ChartCard::new("Daily Sessions", ChartKind::Line, Access::Open, daily),
        ChartCard::new(
            "Connection Channel Distribution",
            ChartKind::Pie,
            Access::Overlay("Connection Channel Distribution"),
            labeled_table("Channel", "Share (%)", &session.channel_distribution),
        ),
        ChartCard::new(
            "Social Connection Types",
            ChartKind::Pie,
            Access::Overlay("Social Connection Types"),
            labeled_table("Provider", "Share (%)", &session.social_types),
        ),
        ChartCard::new(
            "Connection Success Rate by Channel",
            ChartKind::Bar,
            Access::Overlay("Connection Success Rate by Channel"),
            comparison_table("Channel", &session.channel_success_rate),
        ),
        ChartCard::new(
            "Connection Method Distribution",
            ChartKind::Pie,
            Access::Open,
            labeled_table("Method", "Share (%)", &session.method_distribution),
        ),
        ChartCard::new(
            "Connection Success Rate (%)",
            ChartKind::Bar,
            Access::Open,
            comparison_table("Method", &connection.success_rate),
        ),
        ChartCard::new(
            "Time to Connect (seconds)",
            ChartKind::Bar,
            Access::Open,
            comparison_table("Method", &connection.time_to_connect),
        ),
        ChartCard::new(
            "Connection Drop-off Points",
            ChartKind::Bar,
            Access::Overlay("Connection Drop-off Points"),
            labeled_table("Step", "Drop-off (%)", &connection.drop_off_points),
        ),
    ]
}

/// User behaviour tab
#[must_use]
pub fn user_behavior_cards(
    data: &AnalyticsData,
    filter: &DateFilter,
    now: DateTime<Utc>,
) -> Vec<ChartCard> {
    let behavior = &data.user_behavior;

    let mut time_spent = DataTable::new(&["Date", "Minutes"]);
    for point in filter_records_at(&behavior.time_spent, filter, now) {
        time_spent.push_row(vec![point.date.to_string(), format_number(point.value)]);
    }

    let mut segments = DataTable::new(&[
        "Segment",
        "Share (%)",
        "Avg Session (min)",
        "Actions / Session",
        "Multi-Chain",
        "Common Actions",
        "Retention (%)",
    ]);
    for segment in &behavior.segments {
        let mut row = vec![segment.label.clone(), format_number(segment.value)];
        match behavior
            .segment_details
            .iter()
            .find(|d| d.segment == segment.label)
        {
            Some(details) => row.extend([
                format_number(details.avg_session_length),
                format_number(details.avg_actions_per_session),
                if details.multi_chain { "Yes" } else { "No" }.to_string(),
                details.common_actions.join(", "),
                format_number(details.retention_rate),
            ]),
            None => row.extend(vec!["-".to_string(); 5]),
        }
        segments.push_row(row);
    }

    vec![
        ChartCard::new(
            "Feature Usage",
            ChartKind::Bar,
            Access::Overlay("Feature Usage Analysis"),
            labeled_table("Action", "Count", &behavior.feature_usage),
        ),
        ChartCard::new(
            "Average Time Spent (minutes)",
            ChartKind::Line,
            Access::Overlay("Session Duration Analysis"),
            time_spent,
        ),
        ChartCard::new(
            "Return Rate Analysis",
            ChartKind::Bar,
            Access::Overlay("User Retention Metrics"),
            labeled_table("Period", "Returning (%)", &behavior.return_rate),
        ),
        ChartCard::new(
            "Dwell Time Between Actions",
            ChartKind::Bar,
            Access::Overlay("User Interaction Analysis"),
            labeled_table("Interval", "Users", &behavior.dwell_time),
        ),
        ChartCard::new(
            "User Segments",
            ChartKind::Pie,
            Access::Overlay("User Segmentation Analysis"),
            segments,
        ),
    ]
}

/// Advanced tab: chains, technical performance, advanced analytics
#[must_use]
pub fn advanced_cards(data: &AnalyticsData) -> Vec<ChartCard> {
    let chain = &data.chain;
    let technical = &data.technical;
    let advanced = &data.advanced;

    let mut multi_chain = DataTable::new(&["Chain", "Success Rate (%)"]);
    for item in &chain.switch_success {
        multi_chain.push_row(vec![item.label.clone(), format_number(item.pro)]);
    }

    let mut chains: Vec<&str> = Vec::new();
    for cell in &technical.wallet_compatibility {
        if !chains.contains(&cell.chain.as_str()) {
            chains.push(&cell.chain);
        }
    }
    let mut header = vec!["Wallet"];
    header.extend(chains.iter().copied());
    let mut compatibility = DataTable::new(&header);
    let mut wallets: Vec<&str> = Vec::new();
    for cell in &technical.wallet_compatibility {
        if !wallets.contains(&cell.wallet.as_str()) {
            wallets.push(&cell.wallet);
        }
    }
    for wallet in wallets {
        let mut row = vec![wallet.to_string()];
        for chain_name in &chains {
            let rate = technical
                .wallet_compatibility
                .iter()
                .find(|c| c.wallet == wallet && c.chain == *chain_name)
                .map_or_else(|| "-".to_string(), |c| format_number(c.success_rate));
            row.push(rate);
        }
        compatibility.push_row(row);
    }

    let mut gas = DataTable::new(&["Gas Price (Gwei)", "Abandon Rate (%)"]);
    for point in &advanced.gas_impact {
        gas.push_row(vec![
            format_number(point.gas_price),
            format_number(point.abandon_rate),
        ]);
    }

    let months = advanced
        .cohort_retention
        .iter()
        .map(|c| c.retention.len())
        .max()
        .unwrap_or(0);
    let month_headers: Vec<String> = (0..months).map(|m| format!("Month {m}")).collect();
    let mut cohort_header = vec!["Cohort"];
    cohort_header.extend(month_headers.iter().map(String::as_str));
    let mut cohorts = DataTable::new(&cohort_header);
    for row in &advanced.cohort_retention {
        let mut cells = vec![row.cohort.clone()];
        cells.extend((0..months).map(|m| {
            row.retention
                .get(m)
                .map_or_else(String::new, |v| format_number(*v))
        }));
        cohorts.push_row(cells);
    }

    let mut forecast = DataTable::new(&["Month", "Actual", "Forecast"]);
    for point in &advanced.usage_forecasting {
        let cell = |v: Option<f64>| v.map_or_else(String::new, format_number);
        forecast.push_row(vec![
            point.month.clone(),
            cell(point.actual),
            cell(point.forecast),
        ]);
    }

    vec![
        ChartCard::new(
            "Chain Usage Distribution",
            ChartKind::Pie,
            Access::Open,
            labeled_table("Chain", "Usage (%)", &chain.usage),
        ),
        ChartCard::new(
            "RPC Request Success Rate (%)",
            ChartKind::Bar,
            Access::ProOnly,
            labeled_table("Chain", "Success (%)", &chain.rpc_success),
        ),
        ChartCard::new(
            "Multi-Chain User Patterns",
            ChartKind::Bar,
            Access::ProOnly,
            multi_chain,
        ),
        ChartCard::new(
            "Error Distribution Analysis",
            ChartKind::Bar,
            Access::Overlay("Error Distribution Analysis"),
            labeled_table("Error", "Count", &technical.errors),
        ),
        ChartCard::new(
            "Method Popularity",
            ChartKind::Bar,
            Access::Overlay("Contract Method Analysis"),
            labeled_table("Method", "Calls", &technical.method_popularity),
        ),
        ChartCard::new(
            "Wallet Compatibility Matrix",
            ChartKind::Heatmap,
            Access::Overlay("Wallet Compatibility Analysis"),
            compatibility,
        ),
        ChartCard::new(
            "Transaction Value Distribution",
            ChartKind::Bar,
            Access::Overlay("Transaction Value Analysis"),
            labeled_table("Value", "Transactions", &advanced.transaction_values),
        ),
        ChartCard::new(
            "Gas Cost Impact Analysis",
            ChartKind::Scatter,
            Access::Overlay("Gas Price Impact Analysis"),
            gas,
        ),
        ChartCard::new(
            "Cohort Retention Analysis",
            ChartKind::Heatmap,
            Access::Overlay("Cohort Retention Analysis"),
            cohorts,
        ),
        ChartCard::new(
            "Predictive Usage Forecasting",
            ChartKind::Line,
            Access::Overlay("Usage Forecasting"),
            forecast,
        ),
    ]
}

/// Swaps tab
#[must_use]
pub fn swap_cards(data: &AnalyticsData, filter: &DateFilter, now: DateTime<Utc>) -> Vec<ChartCard> {
    let swaps = &data.swaps;
    let daily = filter_records_at(&swaps.daily, filter, now);

    let mut totals = DataTable::new(&["Date", "Free", "Pro"]);
    let mut volume = DataTable::new(&["Date", "Volume (USD)"]);
    for point in &daily {
        totals.push_row(vec![
            point.date.to_string(),
            point.free.to_string(),
            point.pro.to_string(),
        ]);
        volume.push_row(vec![point.date.to_string(), format!("{:.2}", point.volume_usd)]);
    }

    let mut ratio = DataTable::new(&["Date", "Ratio"]);
    for point in filter_records_at(&swaps.sessions_to_swaps, filter, now) {
        ratio.push_row(vec![point.date.to_string(), format!("{:.3}", point.value)]);
    }

    vec![
        ChartCard::new("Total Swaps", ChartKind::Bar, Access::Open, totals),
        ChartCard::new("Total Swaps Volume (USD)", ChartKind::Area, Access::Open, volume),
        ChartCard::new(
            "Trading Pairs",
            ChartKind::Bar,
            Access::Overlay("Trading Pairs Analysis"),
            labeled_table("Pair", "Swaps", &swaps.trading_pairs),
        ),
        ChartCard::new(
            "Swaps by Geography",
            ChartKind::Pie,
            Access::Overlay("Geographic Distribution Analysis"),
            labeled_table("Region", "Share (%)", &swaps.geography),
        ),
        ChartCard::new(
            "Session to Swaps Ratio",
            ChartKind::Line,
            Access::Overlay("Session to Swaps Analysis"),
            ratio,
        ),
    ]
}

/// Metrics tab: every catalog definition
#[must_use]
pub fn metrics_table(metrics: &[MetricDefinition]) -> DataTable {
    let mut table = DataTable::new(&["Category", "Metric", "Explanation", "Visualization", "Tier"]);
    for metric in metrics {
        table.push_row(vec![
            metric.category.display_name(),
            metric.name.to_string(),
            metric.explanation.to_string(),
            metric.visualization.to_string(),
            metric.tier.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::DayWindow;
    use crate::core::fixtures::Fixture;
    use crate::core::tier::Tier;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn daily_sessions_follow_filter() {
        let fixture = Fixture::generate(now(), 5);
        let all = session_cards(&fixture.analytics, &DateFilter::AllTime, now());
        assert_eq!(all[0].data.rows.len(), 120);

        let last30 = session_cards(
            &fixture.analytics,
            &DateFilter::LastNDays(DayWindow::Thirty),
            now(),
        );
        // Dates at midnight from now-30d up to today inclusive
        assert_eq!(last30[0].data.rows.len(), 31);
        assert_eq!(last30[0].data.rows[0][0], "2024-05-02");
    }

    #[test]
    fn free_tier_hides_pro_only_cards() {
        let fixture = Fixture::generate(now(), 5);
        let free = DashboardContext::new(Tier::Free, false);
        let rendered: Vec<_> = advanced_cards(&fixture.analytics)
            .into_iter()
            .filter_map(|c| c.render(&free))
            .collect();
        assert_eq!(rendered.len(), 8);
        assert!(rendered.iter().all(|c| c.title != "Multi-Chain User Patterns"));
        assert!(!rendered[0].is_paywalled());
        assert_eq!(
            rendered[1].body,
            CardBody::Paywall(
                "Want to know more about error distribution analysis? Upgrade to Pro".to_string()
            )
        );
    }

    #[test]
    fn pro_tier_sees_all_data() {
        let fixture = Fixture::generate(now(), 5);
        let pro = DashboardContext::new(Tier::Pro, true);
        let cards = user_behavior_cards(&fixture.analytics, &DateFilter::AllTime, now());
        assert!(cards
            .into_iter()
            .filter_map(|c| c.render(&pro))
            .all(|c| !c.is_paywalled()));
    }

    #[test]
    fn compatibility_matrix_is_wallet_by_chain() {
        let fixture = Fixture::generate(now(), 5);
        let cards = advanced_cards(&fixture.analytics);
        let matrix = &cards[5].data;
        assert_eq!(matrix.columns, vec!["Wallet", "Ethereum", "Polygon", "Arbitrum"]);
        assert_eq!(matrix.rows.len(), 4);
        assert_eq!(matrix.rows[0], vec!["MetaMask", "99.1", "97.4", "98.2"]);
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(format_number(62.0), "62");
        assert_eq!(format_number(97.8), "97.8");
    }
}
