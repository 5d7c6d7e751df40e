//! Empty State Components
//!
//! Placeholders shown instead of the item list.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn LoginEmptyState() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="empty-state">
            <h2>"Sign in"</h2>
            <p>"You need to sign in to see your catalogs and export PDFs."</p>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Login)>"Go to login"</button>
        </div>
    }
}

#[component]
pub fn CatalogEmptyState() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="empty-state centered">
            <h2>"No catalogs"</h2>
            <p>"Create your first catalog to start adding products."</p>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::NewCatalog)>"Create catalog"</button>
        </div>
    }
}

#[component]
pub fn ItemsEmptyState() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="empty-state">
            <h2>"This catalog has no items"</h2>
            <p>"Create the first item so the catalog has some content."</p>
            <button class="primary-btn" on:click=move |_| ctx.navigate(Page::NewItem)>"Create item"</button>
        </div>
    }
}
