//! Catalog Core
//!
//! Platform-independent half of the catalog editor.
//! - domain: catalogs, items, drafts and errors
//! - api: the backend REST contract and its reqwest implementation
//! - session / notify: injected seams for token storage and user feedback
//! - edit / reorder: the item edit session and the drag reorder coordinator
//! - browser / forms / pdf: catalog selection, create/edit flows and PDF export

pub mod api;
pub mod browser;
pub mod config;
pub mod domain;
pub mod edit;
pub mod forms;
pub mod guards;
pub mod notify;
pub mod pdf;
pub mod reorder;
pub mod session;

#[cfg(test)]
mod testing;

pub use api::{CatalogApi, HttpCatalogApi};
pub use browser::CatalogBrowser;
pub use config::ClientConfig;
pub use domain::{
    format_price, Catalog, CatalogError, CatalogResult, EditDraft, EditField, EditTarget, ItemDetail, ItemPatch,
    Product, ValidationError, ViewMode,
};
pub use edit::{ItemEditSession, PendingSave, SaveOutcome};
pub use forms::{CatalogForm, FormMode, NewItemForm};
pub use notify::{Notification, Notifier, Variant};
pub use pdf::{PdfDownload, PdfSource};
pub use reorder::{
    DragReorderCoordinator, KeepOptimistic, PendingReorder, ReorderOutcome, ReorderPolicy, RollbackOnFailure,
};
pub use session::{MemorySessionStore, SessionStore};
