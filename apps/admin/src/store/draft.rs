//! Draft store — the admin's independently-mutable working copy of the
//! content document.
//!
//! Seeding is explicit and happens at most once: the first time a published
//! document becomes available, it is deep-copied into the draft. Background
//! reloads never overwrite an existing draft, so unsaved edits survive until
//! the admin resets or publishes them.

use tracing::debug;

use crate::content::model::{SectionUpdate, SiteContent};
use crate::store::content::ContentStore;

/// Lifecycle of the draft relative to the published document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// No published document has been seen yet; there is no draft.
    Unseeded,
    /// The draft is a fresh copy of the published document.
    Clean,
    /// The draft has local edits not yet published.
    Dirty,
}

pub struct DraftStore {
    content: ContentStore,
    draft: Option<SiteContent>,
    state: DraftState,
}

impl DraftStore {
    pub fn new(content: ContentStore) -> Self {
        Self {
            content,
            draft: None,
            state: DraftState::Unseeded,
        }
    }

    /// The last-fetched published document.
    pub fn original(&self) -> Option<&SiteContent> {
        self.content.content()
    }

    pub fn draft(&self) -> Option<&SiteContent> {
        self.draft.as_ref()
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn loading(&self) -> bool {
        self.content.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.content.error()
    }

    /// Reloads the published document, then seeds the draft if and only if
    /// none exists yet. An existing draft is left untouched regardless of
    /// what the reload returned.
    pub async fn reload_content(&mut self) {
        self.content.reload().await;
        self.seed_if_unseeded();
    }

    fn seed_if_unseeded(&mut self) {
        if self.state != DraftState::Unseeded {
            return;
        }
        if let Some(original) = self.content.content() {
            self.draft = Some(original.clone());
            self.state = DraftState::Clean;
            debug!("Seeded draft from published content");
        }
    }

    /// Replaces exactly one top-level section of the draft. All other
    /// sections are untouched. No-op while unseeded.
    pub fn update_section(&mut self, update: SectionUpdate) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match update {
            SectionUpdate::Hero(hero) => draft.hero = hero,
            SectionUpdate::About(about) => draft.about = about,
            SectionUpdate::Services(services) => draft.services = services,
            SectionUpdate::Careers(careers) => draft.careers = careers,
            SectionUpdate::Contact(contact) => draft.contact = contact,
        }
        self.state = DraftState::Dirty;
    }

    /// Replaces the entire draft with a deep copy of `doc`.
    pub fn set_draft(&mut self, doc: &SiteContent) {
        self.draft = Some(doc.clone());
        self.state = DraftState::Dirty;
    }

    /// Discards all unsaved edits by re-copying the published document into
    /// the draft. No-op while no published document is available.
    pub fn reset_draft(&mut self) {
        if let Some(original) = self.content.content() {
            self.draft = Some(original.clone());
            self.state = DraftState::Clean;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::api::{ContentGateway, PublishAck};
    use crate::content::model::AboutContent;
    use crate::errors::AppError;

    struct ScriptedGateway {
        payload: Mutex<Value>,
    }

    impl ScriptedGateway {
        fn new(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                payload: Mutex::new(payload),
            })
        }

        fn set_payload(&self, payload: Value) {
            *self.payload.lock().unwrap() = payload;
        }
    }

    #[async_trait]
    impl ContentGateway for ScriptedGateway {
        async fn fetch_content(&self) -> Result<Value, AppError> {
            Ok(self.payload.lock().unwrap().clone())
        }

        async fn put_content(
            &self,
            _content: &SiteContent,
            _api_key: &str,
        ) -> Result<PublishAck, AppError> {
            unreachable!("draft store never publishes");
        }
    }

    async fn seeded_store(gateway: Arc<ScriptedGateway>) -> DraftStore {
        let mut store = DraftStore::new(ContentStore::new(gateway));
        store.reload_content().await;
        store
    }

    fn about(title: &str) -> AboutContent {
        AboutContent {
            title: title.to_string(),
            body: vec!["edited".to_string()],
        }
    }

    #[tokio::test]
    async fn test_first_load_seeds_a_clean_draft() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "Live" } }));
        let store = seeded_store(gateway).await;

        assert_eq!(store.state(), DraftState::Clean);
        assert_eq!(store.draft().unwrap(), store.original().unwrap());
    }

    #[tokio::test]
    async fn test_draft_is_an_independent_copy() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "Live" } }));
        let mut store = seeded_store(gateway).await;

        store.update_section(SectionUpdate::About(about("Edited title")));

        // The published document is unaffected by draft edits.
        assert_eq!(store.draft().unwrap().about.title, "Edited title");
        assert_ne!(
            store.original().unwrap().about.title,
            store.draft().unwrap().about.title
        );
    }

    #[tokio::test]
    async fn test_update_section_touches_only_that_section() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "Live" } }));
        let mut store = seeded_store(gateway).await;
        let before = store.draft().unwrap().clone();

        store.update_section(SectionUpdate::About(about("Edited title")));

        let after = store.draft().unwrap();
        assert_eq!(after.hero, before.hero);
        assert_eq!(after.services, before.services);
        assert_eq!(after.careers, before.careers);
        assert_eq!(after.contact, before.contact);
        assert_ne!(after.about, before.about);
        assert_eq!(store.state(), DraftState::Dirty);
    }

    #[tokio::test]
    async fn test_reload_never_overwrites_an_existing_draft() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "First" } }));
        let mut store = seeded_store(gateway.clone()).await;

        store.update_section(SectionUpdate::About(about("Unsaved edit")));
        let draft_before = store.draft().unwrap().clone();

        gateway.set_payload(json!({ "hero": { "headline": "Second" } }));
        store.reload_content().await;

        // The published side moved on, the draft did not.
        assert_eq!(store.original().unwrap().hero.headline, "Second");
        assert_eq!(store.draft().unwrap(), &draft_before);
        assert_eq!(store.state(), DraftState::Dirty);
    }

    #[tokio::test]
    async fn test_reset_draft_restores_published_content() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "Live" } }));
        let mut store = seeded_store(gateway).await;

        store.update_section(SectionUpdate::About(about("One")));
        store.update_section(SectionUpdate::Contact(
            store.original().unwrap().contact.clone(),
        ));
        assert_eq!(store.state(), DraftState::Dirty);

        store.reset_draft();

        assert_eq!(store.state(), DraftState::Clean);
        assert_eq!(store.draft().unwrap(), store.original().unwrap());
    }

    #[tokio::test]
    async fn test_set_draft_deep_copies_the_document() {
        let gateway = ScriptedGateway::new(json!({ "hero": { "headline": "Live" } }));
        let mut store = seeded_store(gateway).await;

        let mut external = store.original().unwrap().clone();
        external.hero.headline = "External doc".to_string();
        store.set_draft(&external);

        // Mutating the caller's document afterwards does not leak into the draft.
        external.hero.headline = "Mutated later".to_string();
        assert_eq!(store.draft().unwrap().hero.headline, "External doc");
        assert_eq!(store.state(), DraftState::Dirty);
    }

    #[tokio::test]
    async fn test_updates_before_seeding_are_ignored() {
        let gateway = ScriptedGateway::new(Value::Null);
        let mut store = DraftStore::new(ContentStore::new(gateway));

        store.update_section(SectionUpdate::About(about("Too early")));

        assert_eq!(store.state(), DraftState::Unseeded);
        assert!(store.draft().is_none());
    }
}
