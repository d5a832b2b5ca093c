//! Synchronization core.
//!
//! While active, the engine holds one live subscription per collection or
//! settings document and folds every snapshot into the [`ContentStore`].
//! Snapshots are authoritative: each replaces its slice wholesale, merged
//! onto defaults where the entity group has them. A subscription error is
//! logged and the slice keeps its last known value.
//!
//! Deactivation releases every subscription exactly once.

use crate::collections::{self, SettingsKey};
use crate::content::{ContentModel, ContentStore};
use crate::lock;
use crate::error::SyncError;
use crate::store::{CollectionSnapshot, DocumentSnapshot, RemoteStore, StoreHandle, Subscription};
use aurexis_model::{
    AboutPageSettings, BlogPost, FaqItem, Fields, HomepageContent, HomepageSettings, Merge,
    PortfolioProject, PricingPageId, PricingTier, ServiceItem, SocialLinks, Testimonial,
    sort_blog_posts, sort_projects,
};
use std::sync::Mutex;
use tracing::{debug, info, warn};

type CollectionHandler = fn(&mut ContentModel, &CollectionSnapshot);
type DocumentHandler = fn(&mut ContentModel, Option<&Fields>);

const COLLECTION_HANDLERS: [(&str, CollectionHandler); 8] = [
    (collections::SERVICES, apply_services),
    (collections::SERVICE_DETAILS, apply_service_details),
    (collections::TESTIMONIALS, apply_testimonials),
    (collections::PRICING_TIERS, apply_pricing_tiers),
    (collections::FAQS, apply_faqs),
    (collections::PRICING_PAGES, apply_pricing_pages),
    (collections::PROJECTS, apply_projects),
    (collections::BLOG_POSTS, apply_blog_posts),
];

const SETTINGS_HANDLERS: [(SettingsKey, DocumentHandler); 4] = [
    (SettingsKey::Homepage, apply_homepage_settings),
    (SettingsKey::HomepageContent, apply_homepage_content),
    (SettingsKey::SocialLinks, apply_social_links),
    (SettingsKey::AboutPage, apply_about_page),
];

/// Keeps the content model in step with the remote store.
pub struct SyncEngine {
    store: StoreHandle,
    content: ContentStore,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl SyncEngine {
    pub fn new(store: StoreHandle, content: ContentStore) -> Self {
        Self {
            store,
            content,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Opens every subscription. Returns how many are open.
    ///
    /// Without a store this does nothing and the model keeps serving the
    /// compiled catalog. Calling it while already active is a no-op.
    pub fn activate(&self) -> usize {
        let Some(store) = self.store.store() else {
            info!("no remote store configured; serving compiled content");
            return 0;
        };
        let mut subscriptions = lock(&self.subscriptions);
        if !subscriptions.is_empty() {
            debug!(open = subscriptions.len(), "sync engine already active");
            return subscriptions.len();
        }

        for (collection, handler) in COLLECTION_HANDLERS {
            subscriptions.push(self.watch_collection(store.as_ref(), collection, handler));
        }
        for (key, handler) in SETTINGS_HANDLERS {
            subscriptions.push(self.watch_settings(store.as_ref(), key, handler));
        }

        info!(
            provider = store.provider_name(),
            subscriptions = subscriptions.len(),
            "sync engine active"
        );
        subscriptions.len()
    }

    /// Closes every open subscription. Returns how many were closed.
    pub fn deactivate(&self) -> usize {
        let drained: Vec<Subscription> = lock(&self.subscriptions).drain(..).collect();
        let closed = drained.len();
        for subscription in drained {
            debug!(subscription = subscription.target(), "closing subscription");
            subscription.unsubscribe();
        }
        if closed > 0 {
            info!(closed, "sync engine stopped");
        }
        closed
    }

    pub fn is_active(&self) -> bool {
        !lock(&self.subscriptions).is_empty()
    }

    pub fn open_subscriptions(&self) -> usize {
        lock(&self.subscriptions).len()
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    fn watch_collection(
        &self,
        store: &dyn RemoteStore,
        collection: &'static str,
        handler: CollectionHandler,
    ) -> Subscription {
        let content = self.content.clone();
        store.subscribe_collection(
            collection,
            Box::new(move |snapshot: CollectionSnapshot| {
                debug!(
                    collection,
                    documents = snapshot.documents.len(),
                    "collection snapshot"
                );
                content.update(|model| handler(model, &snapshot));
            }),
            Box::new(move |err: SyncError| {
                warn!(collection, error = %err, "subscription error; keeping last known content");
            }),
        )
    }

    fn watch_settings(
        &self,
        store: &dyn RemoteStore,
        key: SettingsKey,
        handler: DocumentHandler,
    ) -> Subscription {
        let content = self.content.clone();
        store.subscribe_document(
            &key.path(),
            Box::new(move |snapshot: DocumentSnapshot| {
                debug!(key = key.as_str(), exists = snapshot.exists(), "settings snapshot");
                content.update(|model| handler(model, snapshot.fields.as_ref()));
            }),
            Box::new(move |err: SyncError| {
                warn!(key = key.as_str(), error = %err, "subscription error; keeping last known content");
            }),
        )
    }
}

impl Drop for SyncEngine {
    fn drop(&mut self) {
        self.deactivate();
    }
}

// ── Snapshot handlers ───────────────────────────────────────────

fn apply_services(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    model.services = snapshot
        .documents
        .iter()
        .map(|doc| ServiceItem::from_document(doc.id.clone(), &doc.fields))
        .collect();
}

fn apply_service_details(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    for doc in &snapshot.documents {
        match model.detail_base(&doc.id) {
            Some(base) => {
                let merged = base.merged_with_fields(&doc.fields);
                model.service_details.insert(doc.id.clone(), merged);
            }
            None => debug!(id = %doc.id, "service detail without a known service; skipped"),
        }
    }
}

fn apply_testimonials(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    model.testimonials = snapshot
        .documents
        .iter()
        .map(|doc| Testimonial::from_document(doc.id.clone(), &doc.fields))
        .collect();
}

fn apply_pricing_tiers(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    model.pricing = snapshot
        .documents
        .iter()
        .map(|doc| PricingTier::from_document(doc.id.clone(), &doc.fields))
        .collect();
}

fn apply_faqs(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    model.faqs = snapshot
        .documents
        .iter()
        .map(|doc| FaqItem::from_document(doc.id.clone(), &doc.fields))
        .collect();
}

fn apply_pricing_pages(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    for doc in &snapshot.documents {
        let Ok(id) = doc.id.as_str().parse::<PricingPageId>() else {
            debug!(id = %doc.id, "unknown pricing page; ignored");
            continue;
        };
        if let Some(page) = model.pricing_pages.get_mut(&id) {
            *page = page.merged_with_fields(&doc.fields);
        }
    }
}

fn apply_projects(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    let mut projects: Vec<PortfolioProject> = snapshot
        .documents
        .iter()
        .map(|doc| PortfolioProject::from_document(doc.id.clone(), &doc.fields))
        .collect();
    sort_projects(&mut projects);
    model.projects = projects;
}

fn apply_blog_posts(model: &mut ContentModel, snapshot: &CollectionSnapshot) {
    let mut posts: Vec<BlogPost> = snapshot
        .documents
        .iter()
        .map(|doc| BlogPost::from_document(doc.id.clone(), &doc.fields))
        .collect();
    sort_blog_posts(&mut posts);
    model.blog_posts = posts;
}

/// Merges a settings document onto the type's defaults, or resets to the
/// defaults when the document is absent.
fn settings_from<T: Merge + Default>(fields: Option<&Fields>) -> T {
    match fields {
        Some(fields) => T::default().merged_with_fields(fields),
        None => T::default(),
    }
}

fn apply_homepage_settings(model: &mut ContentModel, fields: Option<&Fields>) {
    model.homepage_settings = settings_from::<HomepageSettings>(fields);
}

fn apply_homepage_content(model: &mut ContentModel, fields: Option<&Fields>) {
    model.homepage_content = settings_from::<HomepageContent>(fields);
}

fn apply_social_links(model: &mut ContentModel, fields: Option<&Fields>) {
    model.social_links = settings_from::<SocialLinks>(fields);
}

fn apply_about_page(model: &mut ContentModel, fields: Option<&Fields>) {
    model.about_page_settings = settings_from::<AboutPageSettings>(fields);
}
