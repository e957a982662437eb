//! Integration tests for logger behavior and crate metadata.

use connect_analytics::get_version;
use connect_analytics::logger::{set_level, set_level_from_str, Level};
use connect_analytics::{debug, error, info, warn};

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_sink_creates_parent_directories() {
    use connect_analytics::logger::init_file_logging;
    use tempfile::TempDir;

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("app.log");
    assert!(init_file_logging(&path));
    error!("written to file");
    let content = std::fs::read_to_string(&path).expect("read log");
    assert!(content.contains("[ERROR] written to file"));
}
