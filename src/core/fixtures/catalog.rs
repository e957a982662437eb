//! Metric definitions catalog

use crate::core::models::{MetricCategory, MetricDefinition};
use crate::core::tier::Tier;

use MetricCategory::{
    AdvancedAnalytics, ChainMetrics, SessionMetrics, SwapMetrics, TechnicalPerformance,
    UserBehavior,
};
use Tier::{Free, Pro};

type Entry = (MetricCategory, &'static str, &'static str, &'static str, Tier);

#[rustfmt::skip]
const CATALOG: &[Entry] = &[
    (SessionMetrics, "Daily Sessions", "Count of daily WalletConnect sessions", "Line chart with time series", Free),
    (SessionMetrics, "Connection Channel Distribution", "Breakdown of connection types (Wallet, Social, Email)", "Pie chart", Pro),
    (SessionMetrics, "Social Connection Types", "Distribution of social login providers (Google, Facebook, X)", "Donut chart", Pro),
    (SessionMetrics, "Connection Success Rate by Channel", "Success rate for each connection method (Wallet, Social, Email)", "Bar chart", Pro),
    (SessionMetrics, "Connection Method Distribution", "Breakdown of connection types (QR, mobile, extension)", "Pie chart", Free),
    (SessionMetrics, "Connection Success Rate", "Percentage of successful connections by method", "Bar chart", Free),
    (SessionMetrics, "Time to Connect", "Average seconds to complete connection", "Bar chart", Free),
    (SessionMetrics, "Connection Drop-off Points", "Where users abandon the connection flow", "Funnel chart", Pro),
    (UserBehavior, "Feature Usage", "Count of different actions (sign, send, etc.)", "Horizontal bar chart", Pro),
    (UserBehavior, "Time Spent", "Average minutes users spend per session", "Area chart", Pro),
    (UserBehavior, "Sessions-to-Transactions Ratio", "Conversion rate from connections to activity", "Line chart with ratio trend", Pro),
    (UserBehavior, "Return Rate Analysis", "Users who reconnect within 24h, 7d, 30d", "Multi-series bar chart", Pro),
    (UserBehavior, "Dwell Time Between Actions", "Time between connection and first transaction", "Histogram", Pro),
    (UserBehavior, "User Segments", "Analysis of user types based on behavior patterns", "Donut chart with drill-down", Pro),
    (ChainMetrics, "Chain Usage Distribution", "Percentage breakdown of chain activity", "Pie chart", Free),
    (ChainMetrics, "Multi-Chain User Patterns", "Flow of users between different chains", "Sankey diagram", Pro),
    (ChainMetrics, "RPC Request Success Rate", "Reliability of node connections by chain", "Heatmap", Pro),
    (TechnicalPerformance, "Error Distribution Analysis", "Types and frequency of errors", "Treemap", Pro),
    (TechnicalPerformance, "Method Popularity", "Most frequently called smart contract methods", "Horizontal bar chart", Pro),
    (TechnicalPerformance, "Wallet Compatibility Matrix", "Success rates by wallet/chain combinations", "Grid heatmap", Pro),
    (AdvancedAnalytics, "Transaction Value Distribution", "Range of transaction values with percentiles", "Box and whisker plot", Pro),
    (AdvancedAnalytics, "Gas Cost Impact Analysis", "Correlation: abandonment vs. gas prices", "Scatter plot with trend line", Pro),
    (AdvancedAnalytics, "Cohort Retention Analysis", "User retention over time by cohort", "Retention grid", Pro),
    (AdvancedAnalytics, "Predictive Usage Forecasting", "Projected platform usage", "Line chart with forecast zone", Pro),
    (AdvancedAnalytics, "Developer Intent Analysis", "Unusual patterns indicating implementation issues", "Anomaly detection chart", Pro),
    (SwapMetrics, "Total Swaps", "Total number of swaps performed through WalletConnect", "Line chart with time series", Free),
    (SwapMetrics, "Total Swaps Volume", "Total volume of swaps in USD", "Area chart", Free),
    (SwapMetrics, "Trading Pairs", "Most popular token pairs for swaps", "Bar chart", Pro),
    (SwapMetrics, "Swaps by Geography", "Distribution of swaps by geographic region", "World map heatmap", Pro),
    (SwapMetrics, "Session to Swaps Ratio", "Conversion rate from sessions to completed swaps", "Line chart with ratio trend", Pro),
];

/// All metric definitions, grouped by category in catalog order
#[must_use]
pub fn metric_catalog() -> Vec<MetricDefinition> {
    CATALOG
        .iter()
        .map(
            |&(category, name, explanation, visualization, tier)| MetricDefinition {
                category,
                name,
                explanation,
                visualization,
                tier,
            },
        )
        .collect()
}

/// Look up which category a metric name belongs to
#[must_use]
pub fn category_of(metric_name: &str) -> Option<MetricCategory> {
    CATALOG
        .iter()
        .find(|(_, name, ..)| *name == metric_name)
        .map(|(category, ..)| *category)
}
