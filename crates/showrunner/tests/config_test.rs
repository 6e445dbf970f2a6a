//! Tests for layered configuration loading.

use showrunner::{RetryStep, ShowrunnerConfig, SourceConfig};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_bundled_defaults() {
    let config = ShowrunnerConfig::bundled().unwrap();

    let SourceConfig::Remote(remote) = &config.source else {
        panic!("expected remote source by default");
    };
    assert_eq!(remote.base_url(), "http://localhost:5000");
    assert_eq!(remote.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.retry.delay_for(RetryStep::Fetch), Duration::from_secs(5));
    assert_eq!(config.playback.settle_delay(), Duration::from_secs(2));
    assert_eq!(config.playback.reset_delay(), Duration::from_millis(500));
}

#[test]
fn test_bundled_matches_code_defaults() {
    assert_eq!(ShowrunnerConfig::bundled().unwrap(), ShowrunnerConfig::default());
}

#[test]
fn test_from_file_directory_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("showrunner.toml");
    std::fs::write(
        &path,
        r#"
[source]
kind = "directory"
root = "/srv/episodes"
write_scene_manifest = true

[retry]
fetch_delay_ms = 1000
"#,
    )
    .unwrap();

    let config = ShowrunnerConfig::from_file(&path).unwrap();

    let SourceConfig::Directory(directory) = &config.source else {
        panic!("expected directory source");
    };
    assert_eq!(directory.root(), &PathBuf::from("/srv/episodes"));
    assert!(*directory.write_scene_manifest());
    assert_eq!(config.retry.delay_for(RetryStep::Fetch), Duration::from_secs(1));
    assert_eq!(config.retry.delay_for(RetryStep::Playback), Duration::from_secs(5));
    assert_eq!(config.playback.settle_delay(), Duration::from_secs(2));
}

#[test]
fn test_from_file_rejects_unknown_playback_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("showrunner.toml");
    std::fs::write(&path, "[playback]\nsettle_delay = 3\n").unwrap();

    assert!(ShowrunnerConfig::from_file(&path).is_err());
}

#[test]
fn test_from_file_missing_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ShowrunnerConfig::from_file(temp_dir.path().join("absent.toml")).is_err());
}
