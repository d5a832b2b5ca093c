use aurexis_model::{Fields, ProjectPatch, SocialLinksPatch};
use aurexis_sync::collections;
use aurexis_sync::{
    CaptureStatus, ContentModel, ContentSession, MemoryStore, StoreHandle, SyncConfig,
};
use aurexis_types::DocumentPath;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn local_only_session_serves_defaults_and_accepts_edits() {
    init_tracing();
    let session = ContentSession::start(&SyncConfig::default(), StoreHandle::Absent);
    assert_eq!(session.model(), ContentModel::defaults());
    assert!(!session.engine().is_active());

    let (id, handle) = session.gateway().add_project(ProjectPatch {
        title: Some("Offline".into()),
        ..Default::default()
    });
    handle.await.unwrap();

    assert!(session.model().project(&id).is_some());
}

#[tokio::test]
async fn echoed_snapshot_does_not_duplicate_added_entity() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let session = ContentSession::start(&SyncConfig::default(), StoreHandle::connected(store.clone()));

    let (id, handle) = session.gateway().add_project(ProjectPatch {
        title: Some("Echoed".into()),
        ..Default::default()
    });
    handle.await.unwrap();

    let projects = session.model().projects;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, id);
    assert_eq!(projects[0].title, "Echoed");
}

#[tokio::test]
async fn remote_edit_from_another_client_reaches_the_model() {
    let store = Arc::new(MemoryStore::new());
    let session = ContentSession::start(&SyncConfig::default(), StoreHandle::connected(store.clone()));
    let mut changes = session.content().subscribe();

    store.put_document(
        &DocumentPath::new(collections::BLOG_POSTS, "welcome"),
        fields(json!({"title": "Welcome", "status": "published"})),
    );

    changes.changed().await.unwrap();
    let post = session.model().blog_post_by_slug("welcome").cloned().unwrap();
    assert_eq!(post.title, "Welcome");
}

#[tokio::test]
async fn reset_restores_defaults_and_clears_local_state() {
    let dir = TempDir::new().unwrap();
    let config = SyncConfig {
        local_state_path: Some(dir.path().join("local.json")),
        ..SyncConfig::default()
    };
    let session = ContentSession::start(&config, StoreHandle::Absent);
    session
        .gateway()
        .update_social_links(SocialLinksPatch {
            email: Some("ops@aurexissolution.com".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    session.record_email_capture(CaptureStatus::Dismissed).unwrap();
    assert!(!session.should_offer_email_capture());

    session.reset().unwrap();

    assert_eq!(session.model(), ContentModel::defaults());
    assert!(session.should_offer_email_capture());
    assert!(!dir.path().join("local.json").exists());
}

#[test]
fn shutdown_closes_every_subscription() {
    let store = Arc::new(MemoryStore::new());
    let session = ContentSession::start(&SyncConfig::default(), StoreHandle::connected(store.clone()));
    assert_eq!(store.listener_count(), 12);

    assert_eq!(session.shutdown(), 12);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn dropping_a_session_closes_subscriptions() {
    let store = Arc::new(MemoryStore::new());
    drop(ContentSession::start(
        &SyncConfig::default(),
        StoreHandle::connected(store.clone()),
    ));
    assert_eq!(store.listener_count(), 0);
}
