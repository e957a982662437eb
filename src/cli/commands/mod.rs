//! CLI command handlers for `connectanalytics`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod export;
pub mod report;
pub mod view;

use chrono::{DateTime, Utc};
use connect_analytics::config::Config;
use connect_analytics::dashboard::{build_view, DashboardView, Tab, ViewRequest};
use connect_analytics::filter::DateFilter;
use connect_analytics::fixtures::Fixture;
use connect_analytics::info;
use connect_analytics::tier::DashboardContext;

/// Fixture, context and clock shared by the dashboard commands
pub struct Session {
    /// Generated dataset
    pub fixture: Fixture,
    /// Tier and swaps flag for this run
    pub ctx: DashboardContext,
    /// Instant filters are resolved against
    pub now: DateTime<Utc>,
}

impl Session {
    /// Generate the fixture and build the context from configuration
    pub fn from_config(config: &Config) -> Self {
        let now = Utc::now();
        let fixture = Fixture::generate(now, config.dashboard.fixture_seed);
        let ctx = DashboardContext::from_config(&config.dashboard);
        info!(
            "Dashboard session: {} tier, swaps {}",
            ctx.tier,
            if ctx.swaps_enabled { "enabled" } else { "disabled" }
        );
        Self { fixture, ctx, now }
    }

    /// Build the view for a tab
    pub fn view(&self, tab: Tab, filter: DateFilter, page: usize, page_size: usize) -> DashboardView {
        let request = ViewRequest::new(tab)
            .with_filter(filter)
            .with_page(page)
            .with_page_size(page_size);
        build_view(&self.fixture, &self.ctx, &request, self.now)
    }
}
