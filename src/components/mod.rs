//! UI Components
//!
//! Leptos components of the catalog editor.

mod auth_form;
mod cards_view;
mod catalog_form;
mod catalog_header;
mod catalog_page;
mod checklist_view;
mod delete_confirm_button;
pub mod drop_zone;
mod empty_states;
pub mod item_actions;
mod item_edit_fields;
mod new_item_form;
mod pdf_preview;
mod table_view;
mod toast_viewport;

pub use auth_form::{AuthForm, AuthMode};
pub use cards_view::CardsView;
pub use catalog_form::{CatalogFormPanel, EditCatalogPage, NewCatalogPage};
pub use catalog_header::CatalogHeader;
pub use catalog_page::CatalogPage;
pub use checklist_view::ChecklistView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::FileDropZone;
pub use empty_states::{CatalogEmptyState, ItemsEmptyState, LoginEmptyState};
pub use item_actions::ItemActionButtons;
pub use item_edit_fields::{ItemEditField, ItemPriceEditField};
pub use new_item_form::NewItemPage;
pub use pdf_preview::PdfPreview;
pub use table_view::TableView;
pub use toast_viewport::ToastViewport;
