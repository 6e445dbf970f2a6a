//! Tests for the layered directory queue.

use showrunner_core::{EpisodeHandle, Location, QueueTier, SceneDescriptor};
use showrunner_interface::{EpisodeLifecycle, EpisodeSource};
use showrunner_source::{DirectoryEpisodeSource, SCENE_MANIFEST_FILE_NAME};
use std::path::Path;
use tempfile::TempDir;

fn make_episode(root: &Path, tier: QueueTier, name: &str) -> EpisodeHandle {
    let dir = root.join(tier.dir_name()).join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("script.json"), r#"{"script": []}"#).unwrap();
    EpisodeHandle::new(dir)
}

fn make_tiers(root: &Path) {
    for tier in QueueTier::by_precedence() {
        std::fs::create_dir_all(root.join(tier.dir_name())).unwrap();
    }
}

#[tokio::test]
async fn test_unreleased_wins_over_released() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());
    make_episode(temp_dir.path(), QueueTier::Released, "ep1");
    let ep2 = make_episode(temp_dir.path(), QueueTier::Unreleased, "ep2");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    assert_eq!(queue.next().await.unwrap(), ep2);
}

#[tokio::test]
async fn test_prioritized_wins_over_everything() {
    let temp_dir = TempDir::new().unwrap();
    make_episode(temp_dir.path(), QueueTier::Released, "old");
    make_episode(temp_dir.path(), QueueTier::Unreleased, "new");
    let urgent = make_episode(temp_dir.path(), QueueTier::Prioritized, "urgent");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    assert_eq!(queue.next().await.unwrap(), urgent);
}

#[tokio::test]
async fn test_released_replayed_when_nothing_new() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());
    let ep1 = make_episode(temp_dir.path(), QueueTier::Released, "ep1");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    assert_eq!(queue.next().await.unwrap(), ep1);
}

#[tokio::test]
async fn test_empty_queue_not_available() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    let err = queue.next().await.unwrap_err();
    assert!(err.is_not_available());
}

#[tokio::test]
async fn test_missing_tiers_count_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let queue = DirectoryEpisodeSource::new(temp_dir.path().join("nowhere"));

    let err = queue.next().await.unwrap_err();
    assert!(err.is_not_available());
}

#[tokio::test]
async fn test_next_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());
    make_episode(temp_dir.path(), QueueTier::Unreleased, "ep2");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    let first = queue.next().await.unwrap();
    let second = queue.next().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_plain_files_are_not_episodes() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());
    let unreleased = temp_dir.path().join(QueueTier::Unreleased.dir_name());
    std::fs::write(unreleased.join("notes.txt"), "not an episode").unwrap();
    std::fs::write(unreleased.join("ep0.meta"), "sidecar").unwrap();
    let ep1 = make_episode(temp_dir.path(), QueueTier::Released, "ep1");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    assert_eq!(queue.next().await.unwrap(), ep1);
}

#[tokio::test]
async fn test_retire_then_next_moves_on() {
    let temp_dir = TempDir::new().unwrap();
    make_tiers(temp_dir.path());
    let ep2 = make_episode(temp_dir.path(), QueueTier::Unreleased, "ep2");

    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    assert_eq!(queue.next().await.unwrap(), ep2);
    queue.retire(&ep2).await.unwrap();

    // The retired episode now sits in the released tier and is replayed from there.
    let replay = queue.next().await.unwrap();
    assert_eq!(replay.path(), queue.tier_dir(QueueTier::Released).join("ep2"));
}

#[tokio::test]
async fn test_register_without_manifest_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let queue = DirectoryEpisodeSource::new(temp_dir.path());

    queue.register(&SceneDescriptor::default()).await.unwrap();

    assert!(!temp_dir.path().join(SCENE_MANIFEST_FILE_NAME).exists());
}

#[tokio::test]
async fn test_register_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let queue = DirectoryEpisodeSource::new(temp_dir.path()).with_scene_manifest(true);

    let descriptor = SceneDescriptor::builder()
        .scene_id("Studio")
        .actors(vec!["Ann".to_string(), "Bob".to_string()])
        .locations(vec![Location::new("Studio", vec!["Couch".to_string()])])
        .build()
        .unwrap();

    queue.register(&descriptor).await.unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join(SCENE_MANIFEST_FILE_NAME)).unwrap();
    let parsed: SceneDescriptor = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, descriptor);
}

#[tokio::test]
async fn test_source_name() {
    let queue = DirectoryEpisodeSource::new("/srv/episodes");
    assert_eq!(queue.source_name(), "directory");
}
