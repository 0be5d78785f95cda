//! Persistence domain: store round-trip and fallback behavior.

use std::path::PathBuf;

use super::{SaveStore, keys};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("galley-{}-{}.json", name, std::process::id()))
}

#[test]
fn test_missing_file_opens_empty() {
    let store = SaveStore::open(temp_path("missing"));
    assert!(store.get(keys::CURRENT_ROOM).is_none());
}

#[test]
fn test_round_trip_through_disk() {
    let path = temp_path("roundtrip");

    let mut store = SaveStore::open(&path);
    store.set(keys::CURRENT_ROOM, 3usize);
    store.set(keys::ROOMS_VISITED, 7u32);
    store.set(keys::PLAYER_MAX_HP, 5.0f32);
    store.write().unwrap();

    let reloaded = SaveStore::open(&path);
    assert_eq!(reloaded.get_parsed::<usize>(keys::CURRENT_ROOM), Some(3));
    assert_eq!(reloaded.get_parsed::<u32>(keys::ROOMS_VISITED), Some(7));
    assert_eq!(reloaded.get_parsed::<f32>(keys::PLAYER_MAX_HP), Some(5.0));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_falls_back_to_empty() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let store = SaveStore::open(&path);
    assert!(store.get(keys::CURRENT_ROOM).is_none());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_get_parsed_rejects_wrong_type() {
    let mut store = SaveStore::open(temp_path("types"));
    store.set("label", "north-wing");
    assert_eq!(store.get_parsed::<u32>("label"), None);
    assert_eq!(store.get("label"), Some("north-wing"));
}
