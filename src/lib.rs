//! Shared library for `connect-analytics`
//! Contains the fixture dataset, date-range filtering, feature gating,
//! dashboard views, CSV export and report rendering used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::*;
