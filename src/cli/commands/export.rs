//! Export command handler
//!
//! Writes the filtered users table or the metric definitions to CSV.

use super::Session;
use crate::args::FilterArgs;
use connect_analytics::config::Config;
use connect_analytics::export::{export_csv, export_users, ExportKind};
use connect_analytics::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Run the export command
pub fn run(what: &str, filter: &FilterArgs, output: Option<&Path>, config: &Config) {
    match export(what, filter, output, config) {
        Ok((rows, path)) => println!("✓ Exported {rows} rows to: {}", path.display()),
        Err(err) => {
            error!("Export of '{what}' failed: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn export(
    what: &str,
    filter: &FilterArgs,
    output: Option<&Path>,
    config: &Config,
) -> Result<(usize, PathBuf), Box<dyn std::error::Error>> {
    let kind: ExportKind = what.parse()?;
    let filter = filter.to_filter()?;
    let session = Session::from_config(config);

    let output_path = output.map_or_else(
        || PathBuf::from(&config.paths.exports_dir).join(kind.default_filename(session.now)),
        Path::to_path_buf,
    );
    verbose!("Exporting {kind} to {}", output_path.display());

    let rows = match kind {
        ExportKind::Users => export_users(
            &session.fixture.users,
            &session.ctx,
            &filter,
            session.now,
            &output_path,
        )?,
        ExportKind::Metrics => export_csv(&session.fixture.metrics, &output_path)?,
    };
    info!("Exported {rows} {kind} rows to {}", output_path.display());
    Ok((rows, output_path))
}
