use aurexis_sync::local_state::{
    EMAIL_CAPTURE_KEY, email_capture_marker, record_email_capture, should_offer_email_capture,
};
use aurexis_sync::{CaptureStatus, FileStateStore, LocalStateStore, MemoryStateStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> FileStateStore {
    FileStateStore::new(dir.path().join("state").join("local.json"))
}

// ── MemoryStateStore ────────────────────────────────────────────

#[test]
fn memory_store_set_get_remove_clear() {
    let state = MemoryStateStore::new();
    state.set("a", json!(1)).unwrap();
    state.set("b", json!({"x": true})).unwrap();

    assert_eq!(state.get("a").unwrap(), Some(json!(1)));
    state.remove("a").unwrap();
    assert_eq!(state.get("a").unwrap(), None);

    state.clear().unwrap();
    assert_eq!(state.get("b").unwrap(), None);
}

// ── FileStateStore ──────────────────────────────────────────────

#[test]
fn missing_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);
    assert_eq!(state.get("anything").unwrap(), None);
}

#[test]
fn values_survive_reopening() {
    let dir = TempDir::new().unwrap();
    file_store(&dir).set("theme", json!("dark")).unwrap();

    let reopened = file_store(&dir);
    assert_eq!(reopened.get("theme").unwrap(), Some(json!("dark")));
}

#[test]
fn remove_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);
    state.set("a", json!(1)).unwrap();
    state.set("b", json!(2)).unwrap();

    state.remove("a").unwrap();

    assert_eq!(state.get("a").unwrap(), None);
    assert_eq!(state.get("b").unwrap(), Some(json!(2)));
}

#[test]
fn clear_deletes_the_file() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);
    state.set("a", json!(1)).unwrap();
    assert!(state.path().exists());

    state.clear().unwrap();
    assert!(!state.path().exists());
    state.clear().unwrap();
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);
    std::fs::create_dir_all(state.path().parent().unwrap()).unwrap();
    std::fs::write(state.path(), "{not json").unwrap();

    assert!(state.get("a").is_err());
    assert!(should_offer_email_capture(&state));
}

#[test]
fn non_object_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);
    std::fs::create_dir_all(state.path().parent().unwrap()).unwrap();
    std::fs::write(state.path(), "[1, 2, 3]").unwrap();

    assert_eq!(state.get("a").unwrap(), None);
}

// ── Email capture ───────────────────────────────────────────────

#[test]
fn prompt_offered_until_answered() {
    let state = MemoryStateStore::new();
    assert!(should_offer_email_capture(&state));

    let marker = record_email_capture(&state, CaptureStatus::Dismissed).unwrap();

    assert!(!should_offer_email_capture(&state));
    assert_eq!(email_capture_marker(&state).unwrap(), Some(marker));
}

#[test]
fn marker_is_stored_under_its_key() {
    let dir = TempDir::new().unwrap();
    let state = file_store(&dir);

    record_email_capture(&state, CaptureStatus::Subscribed).unwrap();

    let raw = state.get(EMAIL_CAPTURE_KEY).unwrap().unwrap();
    assert_eq!(raw["status"], json!("subscribed"));
    assert!(raw["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn unparseable_marker_still_suppresses_prompt() {
    let state = MemoryStateStore::new();
    state.set(EMAIL_CAPTURE_KEY, json!("yes")).unwrap();

    assert!(!should_offer_email_capture(&state));
    assert_eq!(email_capture_marker(&state).unwrap(), None);
}
