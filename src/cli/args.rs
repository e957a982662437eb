//! CLI argument definitions for `connectanalytics`

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use connect_analytics::config::ConfigOverrides;
use connect_analytics::filter::DateFilter;
use connect_analytics::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI tier argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TierArg {
    /// Free tier
    Free,
    /// Pro tier
    Pro,
}

impl std::fmt::Display for TierArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Pro => write!(f, "pro"),
        }
    }
}

/// Date filter selection shared by `view`, `export` and `report`
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Date range: all, 30, 60, 90 or custom
    #[arg(long = "range", short = 'r', value_name = "RANGE", default_value = "all")]
    pub range: String,

    /// Custom range start (YYYY-MM-DD or RFC 3339); implies `--range custom`
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Custom range end (YYYY-MM-DD or RFC 3339); implies `--range custom`
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Parse the selection into a [`DateFilter`]
    ///
    /// # Errors
    /// Returns an error for an unknown range or an unparsable date.
    pub fn to_filter(&self) -> Result<DateFilter, String> {
        let selector = if self.from.is_some() || self.to.is_some() {
            "custom"
        } else {
            self.range.as_str()
        };
        DateFilter::parse(selector, self.from.as_deref(), self.to.as_deref())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `tier`, `page_size`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show a dashboard tab.
    ///
    /// Prints the tab as Markdown: session, user, advanced, swaps, metrics or users.
    View {
        /// Tab to show
        #[arg(value_name = "TAB", default_value = "session")]
        tab: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Users table page (1-based)
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        page: usize,
    },
    /// Export records to CSV.
    ///
    /// `users` exports the filtered users table (Pro only); `metrics` exports
    /// the metric definitions.
    Export {
        /// What to export: users or metrics
        #[arg(value_name = "WHAT", default_value = "users")]
        what: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file path (optional; defaults to the exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write a dashboard tab to a report file.
    Report {
        /// Tab to report
        #[arg(value_name = "TAB")]
        tab: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "connectanalytics",
    about = "Connect Analytics command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override the configured tier for this run
    #[arg(long, value_enum, global = true)]
    pub tier: Option<TierArg>,

    /// Enable swap analytics for this run
    #[arg(long = "enable-swaps", global = true)]
    pub enable_swaps: bool,

    /// Override the users table page size
    #[arg(long = "page-size", value_name = "N", global = true)]
    pub page_size: Option<usize>,

    /// Override config exports directory
    #[arg(long = "exports-dir", value_name = "DIR", global = true)]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that is applied to
    /// the loaded configuration for this run only. `--enable-swaps` can only turn
    /// swaps on; leaving it off keeps the configured value.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.verbose.then_some(true),
            tier: self.tier.map(|t| t.to_string()),
            swaps_enabled: self.enable_swaps.then_some(true),
            page_size: self.page_size.filter(|size| *size > 0),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_analytics::filter::{DayWindow, CustomRange};

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["connectanalytics", "config"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.tier.is_none());
        assert!(overrides.swaps_enabled.is_none());
        assert!(overrides.page_size.is_none());
        assert!(overrides.exports_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "connectanalytics",
            "--log-level",
            "debug",
            "--tier",
            "pro",
            "--enable-swaps",
            "--page-size",
            "25",
            "--exports-dir",
            "/tmp/exports",
            "view",
            "swaps",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.tier, Some("pro".to_string()));
        assert_eq!(overrides.swaps_enabled, Some(true));
        assert_eq!(overrides.page_size, Some(25));
        assert_eq!(overrides.exports_dir, Some("/tmp/exports".to_string()));
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["connectanalytics", "view", "users", "--tier", "pro", "-p", "3"]);
        assert_eq!(cli.tier, Some(TierArg::Pro));
        match cli.command {
            Command::View { tab, page, .. } => {
                assert_eq!(tab, "users");
                assert_eq!(page, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_filter_args() {
        let preset = FilterArgs {
            range: "60".to_string(),
            ..FilterArgs::default()
        };
        assert_eq!(preset.to_filter(), Ok(DateFilter::LastNDays(DayWindow::Sixty)));

        let custom = FilterArgs {
            range: "all".to_string(),
            from: Some("2024-02-01".to_string()),
            to: None,
        };
        assert!(matches!(
            custom.to_filter(),
            Ok(DateFilter::Custom(CustomRange { start: Some(_), end: None }))
        ));

        let bad = FilterArgs {
            range: "45".to_string(),
            ..FilterArgs::default()
        };
        assert!(bad.to_filter().is_err());
    }
}
