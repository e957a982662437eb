//! Chart fixture data
//!
//! Dated series cover [`SERIES_DAYS`] days ending on the fixture date and are
//! drawn from a seeded RNG; categorical series are fixed.

use crate::core::models::{
    CohortRow, CompatibilityCell, DatedValue, ForecastPoint, GasPoint, LabeledValue,
    SegmentDetails, SwapPoint, TierComparison, TierPoint,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

/// Length of every dated series
pub const SERIES_DAYS: i64 = 120;

/// Session tab data
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    /// Daily sessions by tier
    pub daily: Vec<TierPoint>,
    /// Wallet / Social / Email share
    pub channel_distribution: Vec<LabeledValue>,
    /// Social provider share
    pub social_types: Vec<LabeledValue>,
    /// Success rate per channel
    pub channel_success_rate: Vec<TierComparison>,
    /// QR / mobile / extension share
    pub method_distribution: Vec<LabeledValue>,
}

/// Connection flow data
#[derive(Debug, Clone)]
pub struct ConnectionMetrics {
    /// Success rate per method (percent)
    pub success_rate: Vec<TierComparison>,
    /// Seconds to connect per method
    pub time_to_connect: Vec<TierComparison>,
    /// Abandonment per step (percent)
    pub drop_off_points: Vec<LabeledValue>,
}

/// User behaviour tab data
#[derive(Debug, Clone)]
pub struct UserBehavior {
    /// Action counts
    pub feature_usage: Vec<LabeledValue>,
    /// Average minutes per session per day
    pub time_spent: Vec<DatedValue>,
    /// Reconnection percent per period
    pub return_rate: Vec<LabeledValue>,
    /// Users per dwell-time bucket
    pub dwell_time: Vec<LabeledValue>,
    /// Segment share
    pub segments: Vec<LabeledValue>,
    /// Segment drill-down
    pub segment_details: Vec<SegmentDetails>,
}

/// Chain data
#[derive(Debug, Clone)]
pub struct ChainMetrics {
    /// Activity share per chain
    pub usage: Vec<LabeledValue>,
    /// RPC success percent per chain
    pub rpc_success: Vec<LabeledValue>,
    /// Chain switch success per chain
    pub switch_success: Vec<TierComparison>,
}

/// Technical performance data
#[derive(Debug, Clone)]
pub struct TechnicalPerformance {
    /// Error counts by type
    pub errors: Vec<LabeledValue>,
    /// Contract method call counts
    pub method_popularity: Vec<LabeledValue>,
    /// Wallet × chain success grid
    pub wallet_compatibility: Vec<CompatibilityCell>,
}

/// Advanced tab data
#[derive(Debug, Clone)]
pub struct AdvancedAnalytics {
    /// Transactions per value bucket
    pub transaction_values: Vec<LabeledValue>,
    /// Gas price against abandonment
    pub gas_impact: Vec<GasPoint>,
    /// Monthly cohort retention
    pub cohort_retention: Vec<CohortRow>,
    /// Observed and projected usage
    pub usage_forecasting: Vec<ForecastPoint>,
}

/// Swaps tab data
#[derive(Debug, Clone)]
pub struct SwapMetrics {
    /// Daily swaps and volume
    pub daily: Vec<SwapPoint>,
    /// Swaps per token pair
    pub trading_pairs: Vec<LabeledValue>,
    /// Swap share per region
    pub geography: Vec<LabeledValue>,
    /// Daily sessions-to-swaps conversion
    pub sessions_to_swaps: Vec<DatedValue>,
}

/// All chart data
#[derive(Debug, Clone)]
pub struct AnalyticsData {
    /// Session tab
    pub session: SessionMetrics,
    /// Connection flow
    pub connection: ConnectionMetrics,
    /// User behaviour tab
    pub user_behavior: UserBehavior,
    /// Chains
    pub chain: ChainMetrics,
    /// Technical performance
    pub technical: TechnicalPerformance,
    /// Advanced analytics
    pub advanced: AdvancedAnalytics,
    /// Swaps
    pub swaps: SwapMetrics,
}

fn labeled(rows: &[(&str, f64)]) -> Vec<LabeledValue> {
    rows.iter()
        .map(|&(label, value)| LabeledValue::new(label, value))
        .collect()
}

fn compared(rows: &[(&str, f64, f64)]) -> Vec<TierComparison> {
    rows.iter()
        .map(|&(label, free, pro)| TierComparison::new(label, free, pro))
        .collect()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Days of the dated series, oldest first, ending at `now`'s date
fn series_dates(now: DateTime<Utc>) -> impl Iterator<Item = NaiveDate> {
    let last = now.date_naive();
    (0..SERIES_DAYS)
        .rev()
        .map(move |offset| last - Duration::days(offset))
}

/// Generate the chart dataset for `now`
pub fn generate_analytics<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> AnalyticsData {
    AnalyticsData {
        session: session_metrics(rng, now),
        connection: connection_metrics(),
        user_behavior: user_behavior(rng, now),
        chain: chain_metrics(),
        technical: technical_performance(),
        advanced: advanced_analytics(),
        swaps: swap_metrics(rng, now),
    }
}

fn session_metrics<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> SessionMetrics {
    let daily = series_dates(now)
        .map(|date| TierPoint {
            date,
            free: rng.random_range(300..700),
            pro: rng.random_range(800..1500),
        })
        .collect();

    SessionMetrics {
        daily,
        channel_distribution: labeled(&[("Wallet", 62.0), ("Social", 26.0), ("Email", 12.0)]),
        social_types: labeled(&[("Google", 55.0), ("Facebook", 15.0), ("X", 30.0)]),
        channel_success_rate: compared(&[
            ("Wallet", 91.0, 95.5),
            ("Social", 86.0, 93.0),
            ("Email", 82.5, 90.0),
        ]),
        method_distribution: labeled(&[("QR", 45.0), ("Mobile", 35.0), ("Extension", 20.0)]),
    }
}

fn connection_metrics() -> ConnectionMetrics {
    ConnectionMetrics {
        success_rate: compared(&[("QR", 88.0, 94.0), ("Mobile", 90.0, 96.0), ("Extension", 93.0, 97.5)]),
        time_to_connect: compared(&[("QR", 9.5, 6.8), ("Mobile", 7.2, 5.1), ("Extension", 4.8, 3.2)]),
        drop_off_points: labeled(&[
            ("Wallet Selection", 18.0),
            ("QR Scan", 12.0),
            ("Approval Prompt", 25.0),
            ("Network Switch", 9.0),
            ("Signature Request", 14.0),
        ]),
    }
}

fn user_behavior<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> UserBehavior {
    let time_spent = series_dates(now)
        .map(|date| DatedValue {
            date,
            value: round_to(rng.random_range(5.0..25.0), 1),
        })
        .collect();

    let detail = |segment: &str, len: f64, actions: f64, multi: bool, common: &[&str], retention: f64| {
        SegmentDetails {
            segment: segment.to_string(),
            avg_session_length: len,
            avg_actions_per_session: actions,
            multi_chain: multi,
            common_actions: common.iter().map(ToString::to_string).collect(),
            retention_rate: retention,
        }
    };

    UserBehavior {
        feature_usage: labeled(&[
            ("Sign Message", 4200.0),
            ("Send Transaction", 3100.0),
            ("Switch Chain", 1800.0),
            ("Sign Typed Data", 1250.0),
            ("Add Token", 640.0),
        ]),
        time_spent,
        return_rate: labeled(&[("24h", 42.0), ("7d", 31.0), ("30d", 19.0)]),
        dwell_time: labeled(&[
            ("0-10s", 820.0),
            ("10-30s", 1430.0),
            ("30-60s", 960.0),
            ("1-5m", 540.0),
            ("5m+", 210.0),
        ]),
        segments: labeled(&[
            ("Power Users", 15.0),
            ("Regular Users", 35.0),
            ("Casual Users", 30.0),
            ("New Users", 20.0),
        ]),
        segment_details: vec![
            detail("Power Users", 24.5, 18.0, true, &["Swap", "Bridge", "Stake"], 92.0),
            detail("Regular Users", 12.0, 8.5, true, &["Send", "Swap"], 74.0),
            detail("Casual Users", 6.5, 3.0, false, &["Sign Message", "Send"], 41.0),
            detail("New Users", 4.0, 2.0, false, &["Connect", "Sign Message"], 23.0),
        ],
    }
}

fn chain_metrics() -> ChainMetrics {
    ChainMetrics {
        usage: labeled(&[
            ("Ethereum", 45.0),
            ("Polygon", 20.0),
            ("Arbitrum", 15.0),
            ("Optimism", 10.0),
            ("Base", 10.0),
        ]),
        rpc_success: labeled(&[
            ("Ethereum", 99.2),
            ("Polygon", 97.8),
            ("Arbitrum", 98.9),
            ("Optimism", 98.4),
            ("Base", 96.7),
        ]),
        switch_success: compared(&[
            ("Ethereum", 94.0, 97.0),
            ("Polygon", 91.0, 95.5),
            ("Arbitrum", 92.5, 96.0),
            ("Optimism", 90.0, 95.0),
            ("Base", 89.0, 94.5),
        ]),
    }
}

fn technical_performance() -> TechnicalPerformance {
    let wallets = ["MetaMask", "Coinbase", "Trust Wallet", "Phantom"];
    let chains = ["Ethereum", "Polygon", "Arbitrum"];
    let rates = [
        [99.1, 97.4, 98.2],
        [98.6, 96.9, 97.5],
        [97.2, 95.8, 94.1],
        [92.4, 90.3, 93.7],
    ];
    let wallet_compatibility = wallets
        .iter()
        .zip(rates.iter())
        .flat_map(|(wallet, row)| {
            chains
                .iter()
                .zip(row.iter())
                .map(move |(chain, rate)| CompatibilityCell {
                    wallet: (*wallet).to_string(),
                    chain: (*chain).to_string(),
                    success_rate: *rate,
                })
        })
        .collect();

    TechnicalPerformance {
        errors: labeled(&[
            ("User Rejected", 540.0),
            ("Timeout", 210.0),
            ("Unsupported Chain", 130.0),
            ("Insufficient Funds", 95.0),
            ("RPC Error", 60.0),
        ]),
        method_popularity: labeled(&[
            ("transfer", 5200.0),
            ("approve", 3900.0),
            ("swapExactTokensForTokens", 2700.0),
            ("mint", 1100.0),
            ("stake", 800.0),
        ]),
        wallet_compatibility,
    }
}

fn advanced_analytics() -> AdvancedAnalytics {
    let cohort = |name: &str, retention: &[f64]| CohortRow {
        cohort: name.to_string(),
        retention: retention.to_vec(),
    };
    let forecast = |month: &str, actual: Option<f64>, forecast: Option<f64>| ForecastPoint {
        month: month.to_string(),
        actual,
        forecast,
    };

    AdvancedAnalytics {
        transaction_values: labeled(&[
            ("$0-10", 3200.0),
            ("$10-100", 2400.0),
            ("$100-1k", 1100.0),
            ("$1k-10k", 380.0),
            ("$10k+", 70.0),
        ]),
        gas_impact: [(10.0, 4.0), (20.0, 7.5), (35.0, 12.0), (50.0, 18.5), (80.0, 27.0), (120.0, 39.0)]
            .iter()
            .map(|&(gas_price, abandon_rate)| GasPoint {
                gas_price,
                abandon_rate,
            })
            .collect(),
        cohort_retention: vec![
            cohort("Jan", &[100.0, 64.0, 48.0, 41.0, 37.0]),
            cohort("Feb", &[100.0, 61.0, 46.0, 39.0]),
            cohort("Mar", &[100.0, 66.0, 50.0]),
            cohort("Apr", &[100.0, 63.0]),
            cohort("May", &[100.0]),
        ],
        usage_forecasting: vec![
            forecast("Jan", Some(42_000.0), None),
            forecast("Feb", Some(45_500.0), None),
            forecast("Mar", Some(49_800.0), None),
            forecast("Apr", Some(53_200.0), Some(53_200.0)),
            forecast("May", None, Some(57_000.0)),
            forecast("Jun", None, Some(61_500.0)),
        ],
    }
}

fn swap_metrics<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> SwapMetrics {
    let mut daily = Vec::new();
    let mut sessions_to_swaps = Vec::new();
    for date in series_dates(now) {
        let free = rng.random_range(50..200);
        let pro = rng.random_range(150..450);
        #[allow(clippy::cast_precision_loss)]
        let volume_usd = round_to((free + pro) as f64 * rng.random_range(180.0..420.0), 2);
        daily.push(SwapPoint {
            date,
            free,
            pro,
            volume_usd,
        });
        sessions_to_swaps.push(DatedValue {
            date,
            value: round_to(rng.random_range(0.05..0.25), 3),
        });
    }

    SwapMetrics {
        daily,
        trading_pairs: labeled(&[
            ("ETH/USDC", 1450.0),
            ("WBTC/ETH", 920.0),
            ("ETH/USDT", 870.0),
            ("MATIC/USDC", 410.0),
            ("ARB/ETH", 300.0),
        ]),
        geography: labeled(&[
            ("North America", 38.0),
            ("Europe", 29.0),
            ("Asia", 24.0),
            ("South America", 5.0),
            ("Other", 4.0),
        ]),
        sessions_to_swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dated_series_end_on_fixture_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        let data = generate_analytics(&mut StdRng::seed_from_u64(9), now);

        let daily = &data.session.daily;
        assert_eq!(daily.len(), 120);
        assert_eq!(daily.last().unwrap().date, now.date_naive());
        assert!(daily.windows(2).all(|w| w[0].date < w[1].date));

        assert_eq!(data.swaps.daily.len(), 120);
        assert_eq!(data.swaps.sessions_to_swaps.len(), 120);
        assert_eq!(data.user_behavior.time_spent.len(), 120);
    }

    #[test]
    fn generated_values_stay_in_range() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let data = generate_analytics(&mut StdRng::seed_from_u64(2), now);
        assert!(data
            .session
            .daily
            .iter()
            .all(|p| (300..700).contains(&p.free) && (800..1500).contains(&p.pro)));
        assert!(data
            .swaps
            .sessions_to_swaps
            .iter()
            .all(|p| (0.05..=0.25).contains(&p.value)));
    }

    #[test]
    fn compatibility_grid_is_complete() {
        let tech = technical_performance();
        assert_eq!(tech.wallet_compatibility.len(), 12);
    }
}
