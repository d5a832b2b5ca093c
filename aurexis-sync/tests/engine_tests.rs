use aurexis_model::{Fields, PricingPageId, SocialLinks, catalog};
use aurexis_sync::collections::{self, SettingsKey};
use aurexis_sync::{ContentModel, ContentStore, MemoryStore, StoreHandle, SyncEngine};
use aurexis_types::{DocumentId, DocumentPath};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}

fn path(collection: &str, id: &str) -> DocumentPath {
    DocumentPath::new(collection, id)
}

fn engine_for(store: &Arc<MemoryStore>) -> (SyncEngine, ContentStore) {
    let content = ContentStore::new();
    let engine = SyncEngine::new(StoreHandle::connected(store.clone()), content.clone());
    (engine, content)
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> &DocumentId) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

// ── Lifecycle ───────────────────────────────────────────────────

#[test]
fn absent_store_serves_compiled_defaults() {
    let content = ContentStore::new();
    let engine = SyncEngine::new(StoreHandle::Absent, content.clone());

    assert_eq!(engine.activate(), 0);
    assert!(!engine.is_active());
    assert_eq!(content.snapshot(), ContentModel::defaults());
}

#[test]
fn activation_opens_one_subscription_per_source() {
    let store = Arc::new(MemoryStore::new());
    let (engine, _content) = engine_for(&store);

    assert_eq!(engine.activate(), 12);
    assert!(engine.is_active());
    assert_eq!(store.listener_count(), 12);
}

#[test]
fn activating_twice_does_not_duplicate_subscriptions() {
    let store = Arc::new(MemoryStore::new());
    let (engine, _content) = engine_for(&store);

    engine.activate();
    assert_eq!(engine.activate(), 12);
    assert_eq!(store.listener_count(), 12);
}

#[test]
fn deactivation_closes_every_subscription() {
    let store = Arc::new(MemoryStore::new());
    let (engine, _content) = engine_for(&store);
    engine.activate();

    assert_eq!(engine.deactivate(), 12);
    assert_eq!(store.listener_count(), 0);
    assert!(!engine.is_active());
    assert_eq!(engine.deactivate(), 0);
}

#[test]
fn dropping_the_engine_closes_subscriptions() {
    let store = Arc::new(MemoryStore::new());
    {
        let (engine, _content) = engine_for(&store);
        engine.activate();
        assert_eq!(store.listener_count(), 12);
    }
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn snapshots_after_teardown_do_not_reach_the_model() {
    let store = Arc::new(MemoryStore::new());
    let (engine, content) = engine_for(&store);
    engine.activate();
    engine.deactivate();
    let before = content.snapshot();

    store.put_document(&path(collections::PROJECTS, "late"), fields(json!({"title": "Late"})));

    assert_eq!(content.snapshot(), before);
}

// ── Subscription errors ─────────────────────────────────────────

#[test]
fn services_error_at_startup_keeps_default_services() {
    let store = Arc::new(MemoryStore::new());
    store.fail_subscriptions_to(collections::SERVICES);
    let (engine, content) = engine_for(&store);

    engine.activate();

    let services = content.read(|m| m.services.clone());
    assert_eq!(services, catalog::services());
    assert!(!services.is_empty());
    assert_eq!(store.listener_count(), 11);
}

#[test]
fn runtime_error_keeps_last_known_slice() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::PRICING_TIERS, "solo"),
        fields(json!({"name": "Solo", "price": "RM 99"})),
    );
    let (engine, content) = engine_for(&store);
    engine.activate();
    let before = content.read(|m| m.pricing.clone());

    store.emit_error(collections::PRICING_TIERS, "connection reset");

    assert_eq!(content.read(|m| m.pricing.clone()), before);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].name, "Solo");
}

#[test]
fn settings_error_keeps_default_singleton() {
    let store = Arc::new(MemoryStore::new());
    store.fail_subscriptions_to(SettingsKey::SocialLinks.path().to_string());
    let (engine, content) = engine_for(&store);

    engine.activate();

    assert_eq!(content.read(|m| m.social_links.clone()), SocialLinks::default());
}

// ── Collections ─────────────────────────────────────────────────

#[test]
fn services_snapshot_replaces_the_slice() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::SERVICES, "consulting"),
        fields(json!({"title": "Consulting", "description": "Advice", "features": ["Audit"]})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let services = content.read(|m| m.services.clone());
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id.as_str(), "consulting");
    assert_eq!(services[0].title, "Consulting");
    assert_eq!(services[0].features, vec!["Audit"]);
}

#[test]
fn later_snapshots_update_the_model() {
    let store = Arc::new(MemoryStore::new());
    let (engine, content) = engine_for(&store);
    engine.activate();
    let mut changes = content.subscribe();

    store.put_document(
        &path(collections::FAQS, "refunds"),
        fields(json!({"question": "Refunds?", "answer": "Within 14 days."})),
    );

    assert!(changes.has_changed().unwrap());
    let faqs = content.read(|m| m.faqs.clone());
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].answer, "Within 14 days.");
}

#[test]
fn malformed_record_does_not_block_the_collection() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::PROJECTS, "broken"),
        fields(json!({"title": 42, "tech": "rust", "durationDays": "12", "featured": 1})),
    );
    store.put_document(
        &path(collections::PROJECTS, "fine"),
        fields(json!({"title": "Fine", "tech": ["rust"], "order": 0})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let projects = content.read(|m| m.projects.clone());
    assert_eq!(ids(&projects, |p| &p.id), vec!["fine", "broken"]);
    let broken = &projects[1];
    assert_eq!(broken.title, "42");
    assert!(broken.tech.is_empty());
    assert_eq!(broken.duration_days, 12);
    assert!(broken.featured);
}

#[test]
fn projects_are_ordered_with_missing_order_last() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(&path(collections::PROJECTS, "a"), fields(json!({"order": 3})));
    store.put_document(&path(collections::PROJECTS, "b"), fields(json!({"order": 1})));
    store.put_document(&path(collections::PROJECTS, "c"), fields(json!({"title": "No order"})));
    let (engine, content) = engine_for(&store);

    engine.activate();

    let projects = content.read(|m| m.projects.clone());
    assert_eq!(ids(&projects, |p| &p.id), vec!["b", "a", "c"]);
}

#[test]
fn blog_posts_are_newest_first() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::BLOG_POSTS, "t1"),
        fields(json!({"title": "One", "createdAt": "2025-01-01T00:00:00.000Z"})),
    );
    store.put_document(
        &path(collections::BLOG_POSTS, "t3"),
        fields(json!({"title": "Three", "createdAt": "2025-03-01T00:00:00.000Z"})),
    );
    store.put_document(
        &path(collections::BLOG_POSTS, "t2"),
        fields(json!({"title": "Two", "createdAt": "2025-02-01T00:00:00.000Z"})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let posts = content.read(|m| m.blog_posts.clone());
    assert_eq!(ids(&posts, |p| &p.id), vec!["t3", "t2", "t1"]);
    assert_eq!(posts[0].slug, "t3");
}

// ── Service details ─────────────────────────────────────────────

#[test]
fn service_detail_override_keeps_sibling_hero_fields() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::SERVICE_DETAILS, "ai-automation"),
        fields(json!({"heroContent": {"badge": "New"}})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let id = DocumentId::from("ai-automation");
    let detail = content.read(|m| m.service_detail(&id).cloned()).unwrap();
    let hero = detail.hero_content.unwrap();
    assert_eq!(hero.badge.as_deref(), Some("New"));
    assert_eq!(hero.headline.as_deref(), Some("Put your busywork"));
    assert_eq!(hero.highlight.as_deref(), Some("on autopilot"));
}

#[test]
fn service_detail_for_unknown_service_is_skipped() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::SERVICE_DETAILS, "ghost"),
        fields(json!({"title": "Ghost"})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    assert!(content.read(|m| m.service_detail(&DocumentId::from("ghost")).is_none()));
    assert_eq!(
        content.read(|m| m.service_details.clone()),
        catalog::service_details()
    );
}

#[test]
fn service_detail_for_remote_only_service_derives_from_summary() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::SERVICES, "consulting"),
        fields(json!({"title": "Consulting", "description": "Advice", "features": ["Audit"]})),
    );
    store.put_document(
        &path(collections::SERVICE_DETAILS, "consulting"),
        fields(json!({"benefits": ["Clarity"]})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let detail = content
        .read(|m| m.service_detail(&DocumentId::from("consulting")).cloned())
        .unwrap();
    assert_eq!(detail.title, "Consulting");
    assert_eq!(detail.tagline, "Advice");
    assert_eq!(detail.long_description, "Advice");
    assert_eq!(detail.technologies, vec!["Audit"]);
    assert_eq!(detail.benefits, vec!["Clarity"]);
}

// ── Pricing pages ───────────────────────────────────────────────

#[test]
fn pricing_page_snapshot_merges_known_ids_only() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &path(collections::PRICING_PAGES, "ai"),
        fields(json!({"hero": {"badge": "Most popular"}})),
    );
    store.put_document(
        &path(collections::PRICING_PAGES, "quantum"),
        fields(json!({"hero": {"title": "Nope"}})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let pages = content.read(|m| m.pricing_pages.clone());
    let defaults = catalog::pricing_pages();
    assert_eq!(pages.len(), defaults.len());
    assert_eq!(pages[&PricingPageId::Ai].hero.badge.as_deref(), Some("Most popular"));
    assert_eq!(pages[&PricingPageId::Ai].hero.title, defaults[&PricingPageId::Ai].hero.title);
    for id in PricingPageId::ALL.into_iter().filter(|id| *id != PricingPageId::Ai) {
        assert_eq!(pages[&id], defaults[&id]);
    }
}

// ── Singletons ──────────────────────────────────────────────────

#[test]
fn singleton_merges_onto_default_and_resets_when_removed() {
    let store = Arc::new(MemoryStore::new());
    let social = SettingsKey::SocialLinks.path();
    store.put_document(&social, fields(json!({"github": "https://github.com/aurexis"})));
    let (engine, content) = engine_for(&store);
    engine.activate();

    let links = content.read(|m| m.social_links.clone());
    assert_eq!(links.github, "https://github.com/aurexis");
    assert_eq!(links.linkedin, SocialLinks::default().linkedin);

    store.remove_document(&social);
    assert_eq!(content.read(|m| m.social_links.clone()), SocialLinks::default());
}

#[test]
fn homepage_flags_coerce_from_truthiness() {
    let store = Arc::new(MemoryStore::new());
    store.put_document(
        &SettingsKey::Homepage.path(),
        fields(json!({"showBlog": 0, "heroTitle": "Hello"})),
    );
    let (engine, content) = engine_for(&store);

    engine.activate();

    let settings = content.read(|m| m.homepage_settings.clone());
    assert!(!settings.show_blog);
    assert!(settings.show_pricing);
    assert_eq!(settings.hero_title, "Hello");
}

// ── Concurrent writers ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_remote_writes_converge_in_the_model() {
    use aurexis_sync::RemoteStore;

    for round in 0..10 {
        let store = Arc::new(MemoryStore::new());
        let (engine, content) = engine_for(&store);
        engine.activate();

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let tier = path(collections::PRICING_TIERS, &format!("r{round}t{i}"));
                    store.upsert(&tier, fields(json!({"name": format!("Tier {i}")}))).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.document_count(collections::PRICING_TIERS), 64);
        assert_eq!(content.read(|m| m.pricing.len()), 64, "round {round}");
    }
}
