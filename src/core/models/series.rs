//! Chart data points
//!
//! Dated points implement [`Timestamped`] so they can be date filtered;
//! categorical points are shown as-is.

use super::{midnight_utc, Timestamped};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Daily count split by tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierPoint {
    /// Day of the sample
    pub date: NaiveDate,
    /// Count from Free projects
    pub free: u64,
    /// Count from Pro projects
    pub pro: u64,
}

/// Daily swap activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapPoint {
    /// Day of the sample
    pub date: NaiveDate,
    /// Swaps from Free projects
    pub free: u64,
    /// Swaps from Pro projects
    pub pro: u64,
    /// Swapped volume in USD
    pub volume_usd: f64,
}

/// A single dated measurement (minutes, ratio, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedValue {
    /// Day of the sample
    pub date: NaiveDate,
    /// Measured value
    pub value: f64,
}

/// Named value: shares, counts and percentages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    /// Category label
    pub label: String,
    /// Value for the category
    pub value: f64,
}

impl LabeledValue {
    /// Create a labeled value
    #[must_use]
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Per-label comparison between tiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierComparison {
    /// Category label
    pub label: String,
    /// Free value
    pub free: f64,
    /// Pro value
    pub pro: f64,
}

impl TierComparison {
    /// Create a comparison row
    #[must_use]
    pub fn new(label: &str, free: f64, pro: f64) -> Self {
        Self {
            label: label.to_string(),
            free,
            pro,
        }
    }
}

/// Success rate for one wallet on one chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityCell {
    /// Wallet name
    pub wallet: String,
    /// Chain name
    pub chain: String,
    /// Success rate in percent
    pub success_rate: f64,
}

/// Gas price against abandonment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasPoint {
    /// Gas price in Gwei
    pub gas_price: f64,
    /// Abandonment rate in percent
    pub abandon_rate: f64,
}

/// Retention of one monthly cohort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRow {
    /// Cohort label (e.g., "Jan")
    pub cohort: String,
    /// Retention percent per month since joining
    pub retention: Vec<f64>,
}

/// Monthly usage: observed and projected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Month label
    pub month: String,
    /// Observed usage
    pub actual: Option<f64>,
    /// Projected usage
    pub forecast: Option<f64>,
}

/// Behaviour profile of a user segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentDetails {
    /// Segment name (e.g., "Power Users")
    pub segment: String,
    /// Average session length in minutes
    pub avg_session_length: f64,
    /// Average actions per session
    pub avg_actions_per_session: f64,
    /// Whether the segment uses more than one chain
    pub multi_chain: bool,
    /// Most common actions
    pub common_actions: Vec<String>,
    /// Retention in percent
    pub retention_rate: f64,
}

impl Timestamped for TierPoint {
    fn timestamp(&self) -> DateTime<Utc> {
        midnight_utc(self.date)
    }
}

impl Timestamped for SwapPoint {
    fn timestamp(&self) -> DateTime<Utc> {
        midnight_utc(self.date)
    }
}

impl Timestamped for DatedValue {
    fn timestamp(&self) -> DateTime<Utc> {
        midnight_utc(self.date)
    }
}
