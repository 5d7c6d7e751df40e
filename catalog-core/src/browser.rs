//! Catalog Browser
//!
//! Which catalogs the user owns, which one is selected, and the page-level
//! flows around them: sign-in, item loading, deletes and logout.

use tracing::{debug, info, warn};

use crate::api::{CatalogApi, Credentials};
use crate::domain::{Catalog, CatalogError, CatalogResult, ItemDetail};
use crate::guards;
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;

const ITEMS_UNAVAILABLE: &str = "Could not load items.";
const ITEMS_UNEXPECTED: &str = "Unexpected error while loading items.";

/// Pick the catalog to show after a reload.
///
/// Order: explicit `next`, the current selection, the stored selection if
/// it still exists, `preferred` if it exists, then the first catalog.
pub fn resolve_selected_catalog(
    catalogs: &[Catalog],
    next: Option<&str>,
    current: Option<&str>,
    stored: Option<&str>,
    preferred: Option<&str>,
) -> Option<String> {
    let exists = |id: &&str| catalogs.iter().any(|catalog| catalog.id == *id);

    next.or(current)
        .or_else(|| stored.filter(exists))
        .or_else(|| preferred.filter(exists))
        .map(str::to_string)
        .or_else(|| catalogs.first().map(|catalog| catalog.id.clone()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogBrowser {
    catalogs: Vec<Catalog>,
    selected_catalog_id: Option<String>,
    /// `None` until the first reload
    has_token: Option<bool>,
    error: Option<String>,
    preferred_catalog_id: Option<String>,
}

impl CatalogBrowser {
    pub fn new(preferred_catalog_id: Option<String>) -> Self {
        Self { preferred_catalog_id, ..Self::default() }
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn has_catalogs(&self) -> bool {
        !self.catalogs.is_empty()
    }

    pub fn has_token(&self) -> Option<bool> {
        self.has_token
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_catalog_id(&self) -> Option<&str> {
        self.selected_catalog_id.as_deref()
    }

    pub fn selected_catalog(&self) -> Option<&Catalog> {
        let id = self.selected_catalog_id.as_deref()?;
        self.catalogs.iter().find(|catalog| catalog.id == id)
    }

    pub fn select(&mut self, catalog_id: Option<String>, session: &dyn SessionStore) {
        if let Some(id) = catalog_id.as_deref() {
            session.set_selected_catalog_id(id);
        }
        self.selected_catalog_id = catalog_id;
    }

    /// Fetch the catalog list. `Ok(None)` when there is no session.
    pub async fn fetch<A>(api: &A, session: &dyn SessionStore) -> CatalogResult<Option<Vec<Catalog>>>
    where
        A: CatalogApi + ?Sized,
    {
        let Some(token) = session.token() else {
            return Ok(None);
        };
        api.list_catalogs(&token).await.map(Some)
    }

    /// Apply the outcome of `fetch`
    pub fn apply(
        &mut self,
        fetched: CatalogResult<Option<Vec<Catalog>>>,
        next: Option<&str>,
        session: &dyn SessionStore,
    ) {
        self.error = None;
        match fetched {
            Ok(None) => {
                self.catalogs.clear();
                self.selected_catalog_id = None;
                self.has_token = Some(false);
            }
            Ok(Some(catalogs)) => {
                self.has_token = Some(true);
                let stored = session.selected_catalog_id();
                let selected = resolve_selected_catalog(
                    &catalogs,
                    next,
                    self.selected_catalog_id.as_deref(),
                    stored.as_deref(),
                    self.preferred_catalog_id.as_deref(),
                );
                debug!(count = catalogs.len(), selected = ?selected, "catalogs applied");
                self.catalogs = catalogs;
                self.select(selected, session);
            }
            Err(err) => {
                self.has_token = Some(true);
                warn!(error = %err, "catalog reload failed");
                self.error = Some(err.to_string());
            }
        }
    }

    pub async fn reload<A>(&mut self, api: &A, session: &dyn SessionStore, next: Option<&str>)
    where
        A: CatalogApi + ?Sized,
    {
        let fetched = Self::fetch(api, session).await;
        self.apply(fetched, next, session);
    }

    /// Forget the session and the selection
    pub fn logout(&mut self, session: &dyn SessionStore) {
        session.clear();
        self.catalogs.clear();
        self.selected_catalog_id = None;
        self.has_token = Some(false);
        self.error = None;
        info!("logged out");
    }
}

/// Items of `catalog_id`; no catalog means an empty list
pub async fn load_items<A>(
    api: &A,
    session: &dyn SessionStore,
    catalog_id: Option<&str>,
) -> CatalogResult<Vec<ItemDetail>>
where
    A: CatalogApi + ?Sized,
{
    let Some(catalog_id) = catalog_id.filter(|id| !id.is_empty()) else {
        return Ok(Vec::new());
    };
    let token = guards::require_token(session)?;
    api.list_items(&token, catalog_id).await
}

/// Text shown in place of the item list when loading fails
pub fn load_error_message(err: &CatalogError) -> String {
    let message = err.to_string();
    if message.contains("<!DOCTYPE") {
        ITEMS_UNAVAILABLE.to_string()
    } else if message.trim().is_empty() {
        ITEMS_UNEXPECTED.to_string()
    } else {
        message
    }
}

/// Store the token returned for `credentials`
pub async fn sign_in<A>(api: &A, session: &dyn SessionStore, credentials: &Credentials) -> CatalogResult<()>
where
    A: CatalogApi + ?Sized,
{
    let token = api.login(credentials).await?;
    session.set_token(&token);
    info!(email = %credentials.email, "signed in");
    Ok(())
}

pub async fn delete_item<A>(
    api: &A,
    session: &dyn SessionStore,
    catalog_id: Option<&str>,
    item_uuid: &str,
    notifier: &dyn Notifier,
) -> CatalogResult<()>
where
    A: CatalogApi + ?Sized,
{
    let Some(catalog_id) = catalog_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };
    let result = async {
        let token = guards::require_token(session)?;
        api.delete_item(&token, item_uuid, catalog_id).await
    }
    .await;

    match &result {
        Ok(()) => notifier.notify(Notification::success("Item deleted", "The item was removed.")),
        Err(err) => {
            warn!(item_uuid, error = %err, "item delete failed");
            notifier.notify(Notification::from_error("Could not delete item", err));
        }
    }
    result
}

pub async fn delete_catalog<A>(
    api: &A,
    session: &dyn SessionStore,
    catalog_id: Option<&str>,
    notifier: &dyn Notifier,
) -> CatalogResult<()>
where
    A: CatalogApi + ?Sized,
{
    let Some(catalog_id) = catalog_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };
    let result = async {
        let token = guards::require_token(session)?;
        api.delete_catalog(&token, catalog_id).await
    }
    .await;

    match &result {
        Ok(()) => notifier.notify(Notification::success("Catalog deleted", "The catalog was removed.")),
        Err(err) => {
            warn!(catalog_id, error = %err, "catalog delete failed");
            notifier.notify(Notification::from_error("Could not delete catalog", err));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::testing::{catalog, item, FakeApi, RecordingNotifier};

    fn three() -> Vec<Catalog> {
        vec![catalog("1"), catalog("2"), catalog("3")]
    }

    #[test]
    fn test_resolve_selection_order() {
        let catalogs = three();
        assert_eq!(resolve_selected_catalog(&catalogs, Some("9"), Some("2"), None, None).as_deref(), Some("9"));
        assert_eq!(resolve_selected_catalog(&catalogs, None, Some("2"), Some("3"), None).as_deref(), Some("2"));
        assert_eq!(resolve_selected_catalog(&catalogs, None, None, Some("3"), Some("2")).as_deref(), Some("3"));
        assert_eq!(resolve_selected_catalog(&catalogs, None, None, Some("gone"), Some("2")).as_deref(), Some("2"));
        assert_eq!(resolve_selected_catalog(&catalogs, None, None, None, Some("gone")).as_deref(), Some("1"));
        assert_eq!(resolve_selected_catalog(&[], None, None, Some("3"), None), None);
    }

    #[tokio::test]
    async fn test_reload_without_token_clears() {
        let api = FakeApi::default();
        let mut browser = CatalogBrowser::new(None);
        browser.reload(&api, &MemorySessionStore::new(), None).await;

        assert_eq!(browser.has_token(), Some(false));
        assert!(!browser.has_catalogs());
        assert_eq!(browser.selected_catalog_id(), None);
    }

    #[tokio::test]
    async fn test_reload_stores_selection() {
        let api = FakeApi::default();
        api.set_catalogs(three());
        let session = MemorySessionStore::with_token("t");
        session.set_selected_catalog_id("2");
        let mut browser = CatalogBrowser::new(None);

        browser.reload(&api, &session, None).await;

        assert_eq!(browser.has_token(), Some(true));
        assert_eq!(browser.selected_catalog_id(), Some("2"));
        assert_eq!(browser.selected_catalog().map(|c| c.id.as_str()), Some("2"));

        browser.reload(&api, &session, Some("3")).await;
        assert_eq!(session.selected_catalog_id().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_previous_list() {
        let api = FakeApi::default();
        api.set_catalogs(three());
        let session = MemorySessionStore::with_token("t");
        let mut browser = CatalogBrowser::new(None);
        browser.reload(&api, &session, None).await;

        api.fail_catalogs("Unauthorized");
        browser.reload(&api, &session, None).await;

        assert_eq!(browser.error(), Some("Unauthorized"));
        assert_eq!(browser.catalogs().len(), 3);
    }

    #[test]
    fn test_logout_clears_session() {
        let session = MemorySessionStore::with_token("t");
        session.set_selected_catalog_id("1");
        let mut browser = CatalogBrowser::new(None);
        browser.logout(&session);

        assert_eq!(session.token(), None);
        assert_eq!(session.selected_catalog_id(), None);
        assert_eq!(browser.has_token(), Some(false));
    }

    #[tokio::test]
    async fn test_load_items_edges() {
        let api = FakeApi::default();
        api.set_items(vec![item("a")]);

        let none = load_items(&api, &MemorySessionStore::with_token("t"), None).await;
        assert_eq!(none, Ok(Vec::new()));

        let missing = load_items(&api, &MemorySessionStore::new(), Some("c1")).await;
        assert_eq!(missing, Err(CatalogError::Unauthenticated));

        let loaded = load_items(&api, &MemorySessionStore::with_token("t"), Some("c1")).await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_error_message_hides_html() {
        let html = CatalogError::Server { status: 500, message: "<!DOCTYPE html><p>x</p>".to_string() };
        assert_eq!(load_error_message(&html), ITEMS_UNAVAILABLE);
        let plain = CatalogError::Server { status: 404, message: "Catalog not found".to_string() };
        assert_eq!(load_error_message(&plain), "Catalog not found");
        let empty = CatalogError::Server { status: 500, message: String::new() };
        assert_eq!(load_error_message(&empty), ITEMS_UNEXPECTED);
    }

    #[tokio::test]
    async fn test_sign_in_stores_token() {
        let api = FakeApi::default();
        let session = MemorySessionStore::new();
        let credentials = Credentials { email: "ana@example.com".to_string(), password: "secret".to_string() };

        sign_in(&api, &session, &credentials).await.unwrap();
        assert_eq!(session.token().as_deref(), Some("token-ana@example.com"));
    }

    #[tokio::test]
    async fn test_delete_item_reports_outcome() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let session = MemorySessionStore::with_token("t");

        delete_item(&api, &session, Some("c1"), "a", &notifier).await.unwrap();
        assert_eq!(api.deleted_items(), vec![("a".to_string(), "c1".to_string())]);
        assert_eq!(notifier.last().unwrap().title, "Item deleted");

        let skipped = delete_item(&api, &session, None, "a", &notifier).await;
        assert_eq!(skipped, Ok(()));
        assert_eq!(api.deleted_items().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_catalog_without_token() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();

        let result = delete_catalog(&api, &MemorySessionStore::new(), Some("c1"), &notifier).await;
        assert_eq!(result, Err(CatalogError::Unauthenticated));
        assert_eq!(notifier.last().unwrap().title, "No session");
    }
}
