//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::toast::Toasts;

/// Screens of the editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Catalogs,
    Login,
    Register,
    NewCatalog,
    EditCatalog(String),
    NewItem,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Bumped to reload the catalog list
    pub catalogs_trigger: ReadSignal<u32>,
    set_catalogs_trigger: WriteSignal<u32>,
    /// Bumped to reload the items of the selected catalog
    pub items_trigger: ReadSignal<u32>,
    set_items_trigger: WriteSignal<u32>,
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        catalogs_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        items_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        toasts: Toasts,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            catalogs_trigger: catalogs_trigger.0,
            set_catalogs_trigger: catalogs_trigger.1,
            items_trigger: items_trigger.0,
            set_items_trigger: items_trigger.1,
            toasts,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn reload_catalogs(&self) {
        self.set_catalogs_trigger.update(|v| *v += 1);
    }

    pub fn reload_items(&self) {
        self.set_items_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
