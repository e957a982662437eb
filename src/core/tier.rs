//! Feature gating
//!
//! The dashboard has two tiers. Which charts render fully, which features are
//! usable and whether swap analytics are visible is decided by a
//! [`DashboardContext`] built once from configuration and passed explicitly to
//! every view builder. Fixture data is never mutated to toggle features.

use crate::core::config::DashboardConfig;
use crate::core::filter::DateFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message shown next to disabled Pro-only actions
pub const UPGRADE_FEATURE_MESSAGE: &str = "Upgrade to Pro to access this feature";

/// Message shown next to the disabled custom range selector
pub const UPGRADE_CUSTOM_RANGE_MESSAGE: &str = "Upgrade to Pro to use custom date ranges";

/// Banner shown above the tabs for Free users
pub const UPGRADE_BANNER: &str = "Upgrade to Pro for advanced analytics and deeper insights!";

/// Feature-gating label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Base tier; Pro charts are paywalled or hidden
    #[default]
    Free,
    /// Everything unlocked
    Pro,
}

impl Tier {
    /// Whether this is the Pro tier
    #[must_use]
    pub const fn is_pro(self) -> bool {
        matches!(self, Self::Pro)
    }

    /// Display name ("Free" or "Pro")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            _ => Err(format!("Unknown tier: '{s}' (expected 'free' or 'pro')")),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a chart card is gated for Free users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Rendered for every tier
    Open,
    /// Rendered for Pro; Free sees a paywall in place of the data.
    /// The string is the subject used in the paywall message.
    Overlay(&'static str),
    /// Rendered for Pro only; omitted entirely for Free
    ProOnly,
}

/// Resolved visibility of a card for a given tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Show the card with its data
    Full,
    /// Show the card title with the paywall message instead of data
    Paywalled(String),
    /// Do not show the card at all
    Hidden,
}

/// Build the paywall text for a card subject
#[must_use]
pub fn paywall_message(subject: &str) -> String {
    format!(
        "Want to know more about {}? Upgrade to Pro",
        subject.to_lowercase()
    )
}

/// Explicit view configuration threaded through every view builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardContext {
    /// Active tier
    pub tier: Tier,
    /// Whether swap analytics have been enabled for the project
    pub swaps_enabled: bool,
}

impl DashboardContext {
    /// Create a context
    #[must_use]
    pub const fn new(tier: Tier, swaps_enabled: bool) -> Self {
        Self {
            tier,
            swaps_enabled,
        }
    }

    /// Build a context from the `[dashboard]` configuration section.
    ///
    /// An unrecognised tier string falls back to Free.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        let tier = config.tier.parse::<Tier>().unwrap_or_else(|e| {
            crate::warn!("{e}; using Free tier");
            Tier::Free
        });
        Self::new(tier, config.swaps_enabled)
    }

    /// Whether the Pro tier is active
    #[must_use]
    pub const fn is_pro(&self) -> bool {
        self.tier.is_pro()
    }

    /// Turn swap analytics on for this context only
    pub fn enable_swaps(&mut self) {
        self.swaps_enabled = true;
    }

    /// Custom date ranges require Pro
    #[must_use]
    pub const fn can_use_custom_range(&self) -> bool {
        self.is_pro()
    }

    /// CSV export requires Pro
    #[must_use]
    pub const fn can_export(&self) -> bool {
        self.is_pro()
    }

    /// Upgrade banner text, shown for Free only
    #[must_use]
    pub const fn banner(&self) -> Option<&'static str> {
        if self.is_pro() {
            None
        } else {
            Some(UPGRADE_BANNER)
        }
    }

    /// Resolve the filter that will actually be applied.
    ///
    /// Custom ranges are unavailable to Free users and fall back to all-time.
    #[must_use]
    pub fn effective_filter(&self, requested: &DateFilter) -> DateFilter {
        if matches!(requested, DateFilter::Custom(_)) && !self.can_use_custom_range() {
            crate::warn!("{UPGRADE_CUSTOM_RANGE_MESSAGE}; showing all time");
            return DateFilter::AllTime;
        }
        requested.clone()
    }

    /// Decide how a card with the given access level is shown
    #[must_use]
    pub fn visibility(&self, access: &Access) -> Visibility {
        match (access, self.is_pro()) {
            (Access::Open, _) | (_, true) => Visibility::Full,
            (Access::Overlay(subject), false) => Visibility::Paywalled(paywall_message(subject)),
            (Access::ProOnly, false) => Visibility::Hidden,
        }
    }
}
