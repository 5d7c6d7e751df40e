//! Browser and Backend Bindings
//!
//! The catalog REST client plus the few browser APIs the editor needs,
//! organized by concern.

mod download;
mod files;
mod page;

use catalog_core::{CatalogResult, ClientConfig, HttpCatalogApi};

pub use download::*;
pub use files::*;
pub use page::*;

/// REST client for the configured backend
pub fn api() -> CatalogResult<HttpCatalogApi> {
    HttpCatalogApi::new(ClientConfig::from_env())
}
