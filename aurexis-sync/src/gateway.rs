//! Mutation gateway.
//!
//! Every mutation updates the [`ContentStore`] synchronously, then hands the
//! remote write to a spawned task and returns a [`WriteHandle`]. Readers see
//! the new value as soon as the method returns, whatever happens remotely.
//! A failed remote write never rolls the local change back; the next
//! snapshot from the store decides what the model converges to.
//!
//! Updates and deletes that match no local item leave the model untouched
//! and notify no subscriber; the remote write is still issued.
//!
//! Derived fields (slugs, timestamps, generated ids, project order) are
//! computed once, before both the local apply and the remote payload.

use crate::collections::{self, SettingsKey, document_path, pricing_page_path};
use crate::content::ContentStore;
use crate::error::{SyncError, SyncResult};
use crate::lock;
use crate::policy::{EntityGroup, FailurePolicy, WritePolicies};
use crate::store::{RemoteStore, StoreHandle};
use aurexis_model::{
    AboutPageSettingsPatch, BlogPost, BlogPostPatch, FaqItem, FaqPatch, Fields,
    HomepageContentPatch, HomepageSettingsPatch, Merge, PortfolioProject, PricingPageId,
    PricingPagePatch, PricingTierPatch, ProjectPatch, ServiceDetailPatch, SocialLinksPatch,
    Testimonial, TestimonialPatch, slugify, sort_blog_posts, sort_projects,
};
use aurexis_types::{DocumentId, DocumentPath, Timestamp};
use futures::future::try_join_all;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Outcome of the remote half of a mutation.
///
/// The local half has already happened when a handle is returned. Awaiting
/// the handle yields the remote result after the group's failure policy is
/// applied. Dropping it does not cancel the write.
#[derive(Debug)]
pub struct WriteHandle {
    state: WriteState,
}

#[derive(Debug)]
enum WriteState {
    Settled(Option<SyncResult<()>>),
    InFlight(JoinHandle<SyncResult<()>>),
}

impl WriteHandle {
    fn settled(result: SyncResult<()>) -> Self {
        Self {
            state: WriteState::Settled(Some(result)),
        }
    }

    fn local() -> Self {
        Self::settled(Ok(()))
    }

    fn spawn<F>(runtime: &Handle, write: F) -> Self
    where
        F: Future<Output = SyncResult<()>> + Send + 'static,
    {
        Self {
            state: WriteState::InFlight(runtime.spawn(write)),
        }
    }

    /// True when no remote write was issued.
    pub fn is_local(&self) -> bool {
        matches!(self.state, WriteState::Settled(_))
    }

    /// True once the outcome is known.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            WriteState::Settled(_) => true,
            WriteState::InFlight(task) => task.is_finished(),
        }
    }
}

impl Future for WriteHandle {
    type Output = SyncResult<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            WriteState::Settled(result) => Poll::Ready(result.take().unwrap_or(Ok(()))),
            WriteState::InFlight(task) => Pin::new(task)
                .poll(cx)
                .map(|joined| joined.unwrap_or_else(|e| Err(SyncError::from(e)))),
        }
    }
}

/// A remote write, built before the task is spawned.
enum RemoteWrite {
    Upsert(Vec<(DocumentPath, Fields)>),
    Delete(DocumentPath),
}

impl RemoteWrite {
    fn upsert(path: DocumentPath, data: Fields) -> Self {
        Self::Upsert(vec![(path, data)])
    }

    async fn execute(self, store: &dyn RemoteStore) -> SyncResult<()> {
        match self {
            Self::Upsert(documents) => {
                try_join_all(
                    documents
                        .into_iter()
                        .map(|(path, data)| async move { store.upsert(&path, data).await }),
                )
                .await?;
                Ok(())
            }
            Self::Delete(path) => store.delete(&path).await,
        }
    }
}

fn to_fields<T: Serialize>(value: &T) -> SyncResult<Fields> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(fields) => Ok(fields),
        other => Err(SyncError::Backend(format!(
            "expected an object payload, got {other}"
        ))),
    }
}

/// Removes the item with `id`, reporting whether one was found.
fn remove_by_id<T>(
    items: &mut Vec<T>,
    id: &DocumentId,
    key: impl Fn(&T) -> &DocumentId,
) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// Trims a slug, treating a blank one as absent.
fn clean_slug(slug: Option<&str>) -> Option<String> {
    slug.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn settle(group: EntityGroup, on_failure: FailurePolicy, result: SyncResult<()>) -> SyncResult<()> {
    match result {
        Ok(()) => {
            debug!(group = %group, "remote write committed");
            Ok(())
        }
        Err(e) => {
            warn!(group = %group, error = %e, "remote write failed; local change kept");
            match on_failure {
                FailurePolicy::Propagate => Err(e),
                FailurePolicy::Swallow => Ok(()),
            }
        }
    }
}

/// Entry point for every content mutation.
pub struct ContentGateway {
    store: StoreHandle,
    content: ContentStore,
    policies: WritePolicies,
    session: Arc<OnceCell<()>>,
    warned: Mutex<HashSet<EntityGroup>>,
}

impl ContentGateway {
    pub fn new(store: StoreHandle, content: ContentStore, policies: WritePolicies) -> Self {
        Self {
            store,
            content,
            policies,
            session: Arc::new(OnceCell::new()),
            warned: Mutex::new(HashSet::new()),
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn policies(&self) -> &WritePolicies {
        &self.policies
    }

    // ── Services ────────────────────────────────────────────────

    /// Updates a service summary and its detail page with one patch.
    pub fn update_service(&self, id: &DocumentId, patch: ServiceDetailPatch) -> WriteHandle {
        self.content.update(|model| {
            if let Some(service) = model.services.iter_mut().find(|s| &s.id == id) {
                service.apply_patch(&patch);
            }
            if let Some(base) = model.detail_base(id) {
                model.service_details.insert(id.clone(), base.merged(&patch));
            }
        });
        let write = to_fields(&patch).map(|data| {
            RemoteWrite::Upsert(vec![
                (document_path(collections::SERVICES, id), data.clone()),
                (document_path(collections::SERVICE_DETAILS, id), data),
            ])
        });
        self.persist(EntityGroup::Services, write)
    }

    // ── Testimonials ────────────────────────────────────────────

    pub fn add_testimonial(&self, patch: TestimonialPatch) -> (DocumentId, WriteHandle) {
        let group = EntityGroup::Testimonials;
        let id = self.allocate_id(group, collections::TESTIMONIALS);
        let testimonial = Testimonial::from_patch(id.clone(), &patch);
        let write = to_fields(&testimonial)
            .map(|data| RemoteWrite::upsert(document_path(collections::TESTIMONIALS, &id), data));
        self.content
            .update(|model| model.testimonials.push(testimonial));
        (id, self.persist(group, write))
    }

    pub fn update_testimonial(&self, id: &DocumentId, patch: TestimonialPatch) -> WriteHandle {
        self.content.update_if(|model| {
            let found = model.testimonials.iter_mut().find(|t| &t.id == id);
            found.map(|item| item.apply_patch(&patch)).is_some()
        });
        let write = to_fields(&patch)
            .map(|data| RemoteWrite::upsert(document_path(collections::TESTIMONIALS, id), data));
        self.persist(EntityGroup::Testimonials, write)
    }

    pub fn delete_testimonial(&self, id: &DocumentId) -> WriteHandle {
        self.content
            .update_if(|model| remove_by_id(&mut model.testimonials, id, |t| &t.id));
        self.persist(
            EntityGroup::Testimonials,
            Ok(RemoteWrite::Delete(document_path(collections::TESTIMONIALS, id))),
        )
    }

    // ── Pricing tiers ───────────────────────────────────────────

    pub fn update_pricing(&self, id: &DocumentId, patch: PricingTierPatch) -> WriteHandle {
        self.content.update_if(|model| {
            let found = model.pricing.iter_mut().find(|t| &t.id == id);
            found.map(|tier| tier.apply_patch(&patch)).is_some()
        });
        let write = to_fields(&patch)
            .map(|data| RemoteWrite::upsert(document_path(collections::PRICING_TIERS, id), data));
        self.persist(EntityGroup::PricingTiers, write)
    }

    // ── FAQs ────────────────────────────────────────────────────

    pub fn add_faq(&self, patch: FaqPatch) -> (DocumentId, WriteHandle) {
        let group = EntityGroup::Faqs;
        let id = self.allocate_id(group, collections::FAQS);
        let faq = FaqItem::from_patch(id.clone(), &patch);
        let write = to_fields(&faq)
            .map(|data| RemoteWrite::upsert(document_path(collections::FAQS, &id), data));
        self.content.update(|model| model.faqs.push(faq));
        (id, self.persist(group, write))
    }

    pub fn update_faq(&self, id: &DocumentId, patch: FaqPatch) -> WriteHandle {
        self.content.update_if(|model| {
            let found = model.faqs.iter_mut().find(|f| &f.id == id);
            found.map(|faq| faq.apply_patch(&patch)).is_some()
        });
        let write = to_fields(&patch)
            .map(|data| RemoteWrite::upsert(document_path(collections::FAQS, id), data));
        self.persist(EntityGroup::Faqs, write)
    }

    pub fn delete_faq(&self, id: &DocumentId) -> WriteHandle {
        self.content
            .update_if(|model| remove_by_id(&mut model.faqs, id, |f| &f.id));
        self.persist(
            EntityGroup::Faqs,
            Ok(RemoteWrite::Delete(document_path(collections::FAQS, id))),
        )
    }

    // ── Pricing pages ───────────────────────────────────────────

    /// Merges `patch` into one pricing page and stamps its update time.
    pub fn update_pricing_page(
        &self,
        id: PricingPageId,
        mut patch: PricingPagePatch,
    ) -> WriteHandle {
        patch.updated_at = Some(Timestamp::now());
        self.content.update_if(|model| {
            let found = model.pricing_pages.get_mut(&id);
            found.map(|page| page.apply_patch(&patch)).is_some()
        });
        let write = to_fields(&patch).map(|data| RemoteWrite::upsert(pricing_page_path(id), data));
        self.persist(EntityGroup::PricingPages, write)
    }

    // ── Site settings ───────────────────────────────────────────

    pub fn update_homepage_settings(&self, patch: HomepageSettingsPatch) -> WriteHandle {
        self.content
            .update(|model| model.homepage_settings.apply_patch(&patch));
        self.persist_settings(EntityGroup::HomepageSettings, SettingsKey::Homepage, &patch)
    }

    pub fn update_homepage_content(&self, patch: HomepageContentPatch) -> WriteHandle {
        self.content
            .update(|model| model.homepage_content.apply_patch(&patch));
        self.persist_settings(
            EntityGroup::HomepageContent,
            SettingsKey::HomepageContent,
            &patch,
        )
    }

    pub fn update_social_links(&self, patch: SocialLinksPatch) -> WriteHandle {
        self.content
            .update(|model| model.social_links.apply_patch(&patch));
        self.persist_settings(EntityGroup::SocialLinks, SettingsKey::SocialLinks, &patch)
    }

    pub fn update_about_page_settings(&self, patch: AboutPageSettingsPatch) -> WriteHandle {
        self.content
            .update(|model| model.about_page_settings.apply_patch(&patch));
        self.persist_settings(EntityGroup::AboutPage, SettingsKey::AboutPage, &patch)
    }

    // ── Projects ────────────────────────────────────────────────

    /// Adds a project. A missing `order` places it after the current list.
    pub fn add_project(&self, mut patch: ProjectPatch) -> (DocumentId, WriteHandle) {
        let group = EntityGroup::Projects;
        let id = self.allocate_id(group, collections::PROJECTS);
        if patch.order.is_none() {
            let count = self.content.read(|model| model.projects.len());
            patch.order = Some(i64::try_from(count).unwrap_or(i64::MAX));
        }
        let project = PortfolioProject::from_patch(id.clone(), &patch);
        let write = to_fields(&project)
            .map(|data| RemoteWrite::upsert(document_path(collections::PROJECTS, &id), data));
        self.content.update(|model| {
            model.projects.push(project);
            sort_projects(&mut model.projects);
        });
        (id, self.persist(group, write))
    }

    pub fn update_project(&self, id: &DocumentId, patch: ProjectPatch) -> WriteHandle {
        self.content.update_if(|model| {
            let Some(project) = model.projects.iter_mut().find(|p| &p.id == id) else {
                return false;
            };
            project.apply_patch(&patch);
            sort_projects(&mut model.projects);
            true
        });
        let write = to_fields(&patch)
            .map(|data| RemoteWrite::upsert(document_path(collections::PROJECTS, id), data));
        self.persist(EntityGroup::Projects, write)
    }

    pub fn delete_project(&self, id: &DocumentId) -> WriteHandle {
        self.content
            .update_if(|model| remove_by_id(&mut model.projects, id, |p| &p.id));
        self.persist(
            EntityGroup::Projects,
            Ok(RemoteWrite::Delete(document_path(collections::PROJECTS, id))),
        )
    }

    // ── Blog posts ──────────────────────────────────────────────

    /// Adds a post. The slug defaults to the slugified title and both
    /// timestamps are set to now.
    pub fn add_blog_post(&self, mut patch: BlogPostPatch) -> (DocumentId, WriteHandle) {
        let group = EntityGroup::BlogPosts;
        let id = self.allocate_id(group, collections::BLOG_POSTS);
        let slug = clean_slug(patch.slug.as_deref())
            .or_else(|| Some(slugify(patch.title.as_deref().unwrap_or_default())))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| id.to_string());
        let now = Timestamp::now();
        patch.slug = Some(slug);
        patch.created_at = Some(now);
        patch.updated_at = Some(now);

        let post = BlogPost::from_patch(id.clone(), &patch);
        let write = to_fields(&post)
            .map(|data| RemoteWrite::upsert(document_path(collections::BLOG_POSTS, &id), data));
        self.content.update(|model| {
            model.blog_posts.push(post);
            sort_blog_posts(&mut model.blog_posts);
        });
        (id, self.persist(group, write))
    }

    /// Updates a post and stamps its update time. A blank slug keeps the
    /// current one.
    pub fn update_blog_post(&self, id: &DocumentId, mut patch: BlogPostPatch) -> WriteHandle {
        patch.slug = clean_slug(patch.slug.as_deref());
        patch.updated_at = Some(Timestamp::now());
        self.content.update_if(|model| {
            let Some(post) = model.blog_posts.iter_mut().find(|p| &p.id == id) else {
                return false;
            };
            post.apply_patch(&patch);
            sort_blog_posts(&mut model.blog_posts);
            true
        });
        let write = to_fields(&patch)
            .map(|data| RemoteWrite::upsert(document_path(collections::BLOG_POSTS, id), data));
        self.persist(EntityGroup::BlogPosts, write)
    }

    pub fn delete_blog_post(&self, id: &DocumentId) -> WriteHandle {
        self.content
            .update_if(|model| remove_by_id(&mut model.blog_posts, id, |p| &p.id));
        self.persist(
            EntityGroup::BlogPosts,
            Ok(RemoteWrite::Delete(document_path(collections::BLOG_POSTS, id))),
        )
    }

    // ── Remote dispatch ─────────────────────────────────────────

    /// Picks the id for a new document: store-assigned when the group
    /// persists remotely, process-local otherwise.
    fn allocate_id(&self, group: EntityGroup, collection: &str) -> DocumentId {
        match self.store.store() {
            Some(store) if self.policies.get(group).is_remote() => {
                store.new_document_id(collection)
            }
            _ => DocumentId::local(),
        }
    }

    fn persist_settings<P: Serialize>(
        &self,
        group: EntityGroup,
        key: SettingsKey,
        patch: &P,
    ) -> WriteHandle {
        let write = to_fields(patch).map(|data| RemoteWrite::upsert(key.path(), data));
        self.persist(group, write)
    }

    fn persist(&self, group: EntityGroup, write: SyncResult<RemoteWrite>) -> WriteHandle {
        let policy = self.policies.get(group);
        if !policy.is_remote() {
            debug!(group = %group, "local-only group; change kept in memory");
            return WriteHandle::local();
        }
        let Some(store) = self.store.store().cloned() else {
            self.warn_unpersisted(group);
            return WriteHandle::local();
        };
        let write = write.and_then(|write| {
            let runtime = Handle::try_current().map_err(|e| {
                SyncError::WriteTask(format!("no async runtime for remote write: {e}"))
            })?;
            Ok((write, runtime))
        });
        let (write, runtime) = match write {
            Ok(ready) => ready,
            Err(e) => return WriteHandle::settled(settle(group, policy.on_failure, Err(e))),
        };

        let session = Arc::clone(&self.session);
        WriteHandle::spawn(&runtime, async move {
            let result: SyncResult<()> = async {
                session.get_or_try_init(|| store.ensure_session()).await?;
                write.execute(store.as_ref()).await
            }
            .await;
            settle(group, policy.on_failure, result)
        })
    }

    fn warn_unpersisted(&self, group: EntityGroup) {
        if lock(&self.warned).insert(group) {
            warn!(group = %group, "no remote store configured; changes stay in memory");
        } else {
            debug!(group = %group, "no remote store configured; change kept in memory");
        }
    }
}
