//! Metric definition model

use crate::core::tier::Tier;
use serde::Serialize;
use std::fmt;

/// Group a metric definition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricCategory {
    /// Connection sessions
    SessionMetrics,
    /// What users do once connected
    UserBehavior,
    /// Chain usage
    ChainMetrics,
    /// Errors, RPC and compatibility
    TechnicalPerformance,
    /// Cohorts, forecasting and distributions
    AdvancedAnalytics,
    /// Swap activity
    SwapMetrics,
}

impl MetricCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 6] = [
        Self::SessionMetrics,
        Self::UserBehavior,
        Self::ChainMetrics,
        Self::TechnicalPerformance,
        Self::AdvancedAnalytics,
        Self::SwapMetrics,
    ];

    /// Catalog key (camelCase)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SessionMetrics => "sessionMetrics",
            Self::UserBehavior => "userBehavior",
            Self::ChainMetrics => "chainMetrics",
            Self::TechnicalPerformance => "technicalPerformance",
            Self::AdvancedAnalytics => "advancedAnalytics",
            Self::SwapMetrics => "swapMetrics",
        }
    }

    /// Human-readable category name derived from the key
    #[must_use]
    pub fn display_name(self) -> String {
        humanize_key(self.key())
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Turn a camelCase key into title words: `technicalPerformance` becomes
/// `Technical Performance`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

/// One row of the metrics catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    /// Catalog group
    pub category: MetricCategory,
    /// Metric name (e.g., "Daily Sessions")
    pub name: &'static str,
    /// What the metric measures
    pub explanation: &'static str,
    /// How the metric is charted
    pub visualization: &'static str,
    /// Tier required to see the metric
    pub tier: Tier,
}
