//! Command-line interface entry point for `connectanalytics`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use connect_analytics::config::Config;
use connect_analytics::info;
use connect_analytics::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Stored config is what `config` subcommands read and write; overrides apply to this run only
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = config
        .logging
        .level
        .parse::<Level>()
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // --log-file wins over logging.file (both land in config.logging.file)
    if !config.logging.file.is_empty() {
        let log_path = std::path::PathBuf::from(&config.logging.file);
        let display_path = log_path.to_string_lossy();
        if init_file_logging(&log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::View { tab, filter, page } => {
            commands::view::run(&tab, &filter, page, &config);
        }
        Command::Export {
            what,
            filter,
            output,
        } => {
            commands::export::run(&what, &filter, output.as_deref(), &config);
        }
        Command::Report {
            tab,
            filter,
            output,
            format,
        } => {
            commands::report::run(&tab, &filter, output.as_deref(), &format, &config);
        }
    }
}
