//! Shared Store Integration Tests
//!
//! Two boards opened over the same domain directory stand in for the host
//! app and the keyboard extension.

use std::sync::{Arc, Mutex};

use asciiboard::config::{Config, StorageConfig};
use asciiboard::storage::{self, FAVORITE_IDS_KEY, FAVORITE_ORDER_KEY};
use asciiboard::{Board, DomainScope, Item, PersistEvent, StorageDomain};
use serde_json::json;
use tempfile::TempDir;

fn config(dir: &TempDir, process: &str) -> Config {
    Config {
        storage: StorageConfig {
            shared_dir: Some(dir.path().join("group").display().to_string()),
            local_dir: Some(dir.path().join("local").display().to_string()),
            process: process.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn test_custom_item_favorited_then_deleted() {
    let dir = TempDir::new().unwrap();
    let mut board = Board::open(&config(&dir, "host"));
    assert_eq!(board.scope(), DomainScope::Shared);

    let item = board.add("Shrug2", "¯\\_(ツ)_/¯", "emoticons");
    assert!(item.id.starts_with("custom_"));

    assert!(board.toggle(&item.id));
    assert!(board.is_favorite(&item.id));
    assert_eq!(ids(&board.favorite_items()), vec![item.id.clone()]);

    assert!(board.remove(&item.id));

    // Membership is untouched by the deletion, but no query returns the item
    assert!(board.is_favorite(&item.id));
    assert!(board.favorite_items().is_empty());
    assert!(board.items_for_category("emoticons").is_empty());
    assert!(board.search_all("Shrug2").is_empty());
}

#[test]
fn test_changes_visible_to_the_other_process_after_reload() {
    let dir = TempDir::new().unwrap();

    let mut host = Board::open(&config(&dir, "host"));
    let item = host.add("Wave", "o/", "reactions");
    host.toggle("hi");
    host.toggle(&item.id);

    let keyboard = Board::open(&config(&dir, "keyboard"));
    assert_eq!(ids(&keyboard.items_for_category("reactions")), vec![item.id.clone()]);
    assert_eq!(
        ids(&keyboard.favorite_items()),
        vec!["hi".to_string(), item.id]
    );
}

#[test]
fn test_persisted_order_roundtrip() {
    let dir = TempDir::new().unwrap();
    let opened = storage::open(&config(&dir, "host").storage);
    opened.domain.set(FAVORITE_IDS_KEY, json!(["shrug", "hi"])).unwrap();
    opened.domain.set(FAVORITE_ORDER_KEY, json!(["hi", "shrug"])).unwrap();

    let board = Board::with_domain(opened);
    assert_eq!(ids(&board.favorite_items()), vec!["hi", "shrug"]);
}

#[test]
fn test_stale_process_overwrites_concurrent_change() {
    let dir = TempDir::new().unwrap();

    let mut host = Board::open(&config(&dir, "host"));
    let mut keyboard = Board::open(&config(&dir, "keyboard"));

    // Keyboard still holds the empty snapshot it loaded at startup
    host.toggle("shrug");
    keyboard.toggle("lenny");

    let reloaded = Board::open(&config(&dir, "host"));
    assert!(reloaded.is_favorite("lenny"));
    assert!(!reloaded.is_favorite("shrug"));
}

#[test]
fn test_favorites_do_not_clobber_custom_items() {
    let dir = TempDir::new().unwrap();

    let mut host = Board::open(&config(&dir, "host"));
    let mut keyboard = Board::open(&config(&dir, "keyboard"));

    let item = host.add("Mine", "m", "art");
    keyboard.toggle("hi");

    let reloaded = Board::open(&config(&dir, "host"));
    assert_eq!(ids(&reloaded.items_for_category("art")), vec![item.id]);
    assert!(reloaded.is_favorite("hi"));
}

#[test]
fn test_unavailable_shared_domain_falls_back_silently() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("group");
    std::fs::write(&blocker, "").unwrap();

    let mut host = Board::open(&config(&dir, "host"));
    assert_eq!(host.scope(), DomainScope::ProcessLocal);
    host.toggle("hi");

    // The other process does not see the change
    let keyboard = Board::open(&config(&dir, "keyboard"));
    assert!(!keyboard.is_favorite("hi"));
}

#[test]
fn test_persist_hook_reports_every_write() {
    let dir = TempDir::new().unwrap();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();

    let mut board = Board::open(&config(&dir, "host"));
    board.set_persist_hook(Arc::new(move |e: &PersistEvent| {
        sink.lock().unwrap().push(e.clone())
    }));

    let item = board.add("Mine", "m", "art");
    board.toggle(&item.id);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.persisted));
}
