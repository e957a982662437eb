//! Core module for dashboard functionality

pub mod config;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod report;
pub mod tier;

/// Returns the current version of the `connect-analytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
