//! In-memory fixture dataset standing in for a backend.
//!
//! Generation is deterministic for a given `(now, seed)` pair so views,
//! exports and tests agree on the data they see.

pub mod analytics;
pub mod catalog;
pub mod users;

pub use analytics::{AnalyticsData, SERIES_DAYS};
pub use catalog::{category_of, metric_catalog};
pub use users::{generate_users, USER_COUNT};

use crate::core::models::{MetricDefinition, User};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Complete dataset behind the dashboard
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Instant the relative dates were generated against
    pub generated_at: DateTime<Utc>,
    /// Seed used for the random parts
    pub seed: u64,
    /// Metric definitions catalog
    pub metrics: Vec<MetricDefinition>,
    /// Chart data
    pub analytics: AnalyticsData,
    /// Connected users
    pub users: Vec<User>,
}

impl Fixture {
    /// Generate the dataset relative to `now`
    #[must_use]
    pub fn generate(now: DateTime<Utc>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let analytics = analytics::generate_analytics(&mut rng, now);
        let users = generate_users(&mut rng, now);
        crate::debug!(
            "Generated fixture (seed {seed}): {} users, {} days of series",
            users.len(),
            analytics.session.daily.len()
        );
        Self {
            generated_at: now,
            seed,
            metrics: metric_catalog(),
            analytics,
            users,
        }
    }

    /// Generate the dataset relative to the current time
    #[must_use]
    pub fn generate_now(seed: u64) -> Self {
        Self::generate(Utc::now(), seed)
    }
}
