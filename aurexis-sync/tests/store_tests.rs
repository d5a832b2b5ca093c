use aurexis_model::Fields;
use aurexis_sync::{
    CollectionSnapshot, DocumentSnapshot, MemoryStore, RemoteStore, StoreCredentials,
    StoreHandle, Subscription, SyncConfig, SyncError, WriteRecord,
};
use aurexis_types::DocumentPath;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}

fn configured() -> SyncConfig {
    SyncConfig {
        credentials: StoreCredentials {
            api_key: Some("live-key".into()),
            project_id: Some("aurexis-prod".into()),
            auth_domain: None,
        },
        ..SyncConfig::default()
    }
}

// ── Subscription ────────────────────────────────────────────────

#[test]
fn unsubscribe_runs_disposer_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let subscription = Subscription::new("services", move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(subscription.target(), "services");
    subscription.unsubscribe();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn drop_runs_disposer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    {
        let _subscription = Subscription::new("faqs", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn inert_subscription_is_harmless() {
    let subscription = Subscription::inert("siteSettings/homepage");
    assert!(format!("{subscription:?}").contains("open: false"));
    subscription.unsubscribe();
}

// ── StoreHandle ─────────────────────────────────────────────────

#[test]
fn connect_without_credentials_is_absent() {
    let mut factory_called = false;
    let handle = StoreHandle::connect(&SyncConfig::default(), |_| {
        factory_called = true;
        Ok(Arc::new(MemoryStore::new()) as Arc<dyn RemoteStore>)
    });

    assert!(!handle.is_connected());
    assert!(!factory_called);
}

#[test]
fn connect_with_placeholder_key_is_absent() {
    let mut config = configured();
    config.credentials.api_key = Some("demo-api-key".into());

    let handle = StoreHandle::connect(&config, |_| {
        Ok(Arc::new(MemoryStore::new()) as Arc<dyn RemoteStore>)
    });

    assert!(handle.store().is_none());
}

#[test]
fn connect_factory_failure_is_absent() {
    let handle = StoreHandle::connect(&configured(), |_| anyhow::bail!("bad project id"));
    assert!(!handle.is_connected());
    assert_eq!(format!("{handle:?}"), "Absent");
}

#[test]
fn connect_with_credentials_uses_factory() {
    let handle = StoreHandle::connect(&configured(), |config| {
        assert!(config.enable_persistence);
        Ok(Arc::new(MemoryStore::new()) as Arc<dyn RemoteStore>)
    });

    assert!(handle.is_connected());
    assert_eq!(handle.store().unwrap().provider_name(), "memory");
}

// ── MemoryStore ─────────────────────────────────────────────────

#[test]
fn collection_subscription_gets_initial_and_later_snapshots() {
    let store = MemoryStore::new();
    let seen: Arc<Mutex<Vec<CollectionSnapshot>>> = Arc::default();
    let sink = seen.clone();

    let _subscription = store.subscribe_collection(
        "projects",
        Box::new(move |snapshot: CollectionSnapshot| sink.lock().unwrap().push(snapshot)),
        Box::new(|_: SyncError| {}),
    );
    store.put_document(&DocumentPath::new("projects", "p1"), fields(json!({"title": "A"})));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].documents.is_empty());
    assert_eq!(seen[1].documents.len(), 1);
    assert_eq!(seen[1].documents[0].id.as_str(), "p1");
}

#[test]
fn document_subscription_reports_missing_document() {
    let store = MemoryStore::new();
    let seen: Arc<Mutex<Vec<DocumentSnapshot>>> = Arc::default();
    let sink = seen.clone();
    let path = DocumentPath::new("siteSettings", "homepage");

    let _subscription = store.subscribe_document(
        &path,
        Box::new(move |snapshot: DocumentSnapshot| sink.lock().unwrap().push(snapshot)),
        Box::new(|_: SyncError| {}),
    );
    store.put_document(&path, fields(json!({"heroTitle": "Hi"})));
    store.remove_document(&path);

    let seen = seen.lock().unwrap();
    let exists: Vec<bool> = seen.iter().map(DocumentSnapshot::exists).collect();
    assert_eq!(exists, vec![false, true, false]);
}

#[test]
fn failing_subscription_reports_error_and_registers_nothing() {
    let store = MemoryStore::new();
    store.fail_subscriptions_to("faqs");
    let errors = Arc::new(AtomicUsize::new(0));
    let counter = errors.clone();

    let _subscription = store.subscribe_collection(
        "faqs",
        Box::new(|_: CollectionSnapshot| panic!("no snapshot expected")),
        Box::new(move |err: SyncError| {
            assert!(matches!(err, SyncError::PermissionDenied(_)));
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 0);
}

#[tokio::test]
async fn upsert_merges_fields() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("pricingTiers", "starter");

    store.upsert(&path, fields(json!({"name": "Starter", "price": "RM 1"}))).await.unwrap();
    store.upsert(&path, fields(json!({"price": "RM 2"}))).await.unwrap();

    assert_eq!(
        store.document(&path),
        Some(fields(json!({"name": "Starter", "price": "RM 2"})))
    );
    assert_eq!(store.writes().len(), 2);
}

#[tokio::test]
async fn failed_writes_are_not_committed() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("projects", "p1");
    store.fail_writes("denied");

    let result = store.delete(&path).await;
    assert!(matches!(result, Err(SyncError::PermissionDenied(_))));
    assert!(store.writes().is_empty());

    store.clear_write_failure();
    store.delete(&path).await.unwrap();
    assert_eq!(store.writes(), vec![WriteRecord::Delete { path }]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let store = MemoryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let subscription = store.subscribe_collection(
        "blogPosts",
        Box::new(move |_: CollectionSnapshot| {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
        Box::new(|_: SyncError| {}),
    );
    subscription.unsubscribe();
    store.put_document(&DocumentPath::new("blogPosts", "b1"), Fields::new());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 0);
}

#[tokio::test]
async fn upsert_merges_nested_objects() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("serviceDetails", "ai-automation");

    store
        .upsert(&path, fields(json!({"heroContent": {"badge": "X"}, "benefits": ["a"]})))
        .await
        .unwrap();
    store
        .upsert(&path, fields(json!({"heroContent": {"headline": "Y"}, "benefits": ["b"]})))
        .await
        .unwrap();

    assert_eq!(
        store.document(&path),
        Some(fields(json!({
            "heroContent": {"badge": "X", "headline": "Y"},
            "benefits": ["b"],
        })))
    );
}

#[tokio::test]
async fn upsert_replaces_non_object_with_object() {
    let store = MemoryStore::new();
    let path = DocumentPath::new("pricingPages", "ai");

    store.upsert(&path, fields(json!({"hero": "legacy"}))).await.unwrap();
    store.upsert(&path, fields(json!({"hero": {"title": "New"}}))).await.unwrap();

    assert_eq!(store.document(&path), Some(fields(json!({"hero": {"title": "New"}}))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_upserts_reach_listener_in_order() {
    let store = Arc::new(MemoryStore::new());
    let counts: Arc<Mutex<Vec<usize>>> = Arc::default();
    let sink = counts.clone();

    let _subscription = store.subscribe_collection(
        "pricingTiers",
        Box::new(move |snapshot: CollectionSnapshot| {
            sink.lock().unwrap().push(snapshot.documents.len());
        }),
        Box::new(|_: SyncError| {}),
    );

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let path = DocumentPath::new("pricingTiers", format!("t{i}"));
                store.upsert(&path, fields(json!({"name": i}))).await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let counts = counts.lock().unwrap();
    assert_eq!(counts.last(), Some(&64));
    assert!(counts.windows(2).all(|pair| pair[0] < pair[1]));
}
