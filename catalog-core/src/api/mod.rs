//! Catalog REST API
//!
//! `CatalogApi` is the seam between the editor and the backend.
//! `HttpCatalogApi` talks to the real service; tests use in-memory fakes.

mod error_message;
mod http;
mod payload;

use async_trait::async_trait;

use crate::domain::{Catalog, CatalogResult, ItemDetail};

pub use error_message::{extract_error_message, EMPTY_ERROR_MESSAGE, HTML_ERROR_MESSAGE};
pub use http::HttpCatalogApi;
pub use payload::{
    CatalogListResponse, CatalogPayload, Credentials, ItemListResponse, LoginResponse, NewItem,
    PdfExportRequest, PositionRequest, UpdateItemRequest, UpdatedItem, UploadFile, UploadResponse,
    UploadedImage,
};

/// Backend operations used by the editor
///
/// Futures are not `Send`: the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> CatalogResult<String>;

    async fn register(&self, credentials: &Credentials) -> CatalogResult<()>;

    async fn list_catalogs(&self, token: &str) -> CatalogResult<Vec<Catalog>>;

    async fn get_catalog(&self, token: &str, catalog_id: &str) -> CatalogResult<Catalog>;

    async fn create_catalog(&self, token: &str, payload: &CatalogPayload) -> CatalogResult<Catalog>;

    async fn update_catalog(
        &self,
        token: &str,
        catalog_id: &str,
        payload: &CatalogPayload,
    ) -> CatalogResult<Catalog>;

    async fn delete_catalog(&self, token: &str, catalog_id: &str) -> CatalogResult<()>;

    async fn list_items(&self, token: &str, catalog_id: &str) -> CatalogResult<Vec<ItemDetail>>;

    async fn create_item(&self, token: &str, item: NewItem) -> CatalogResult<()>;

    async fn update_item(
        &self,
        token: &str,
        item_uuid: &str,
        request: &UpdateItemRequest,
    ) -> CatalogResult<UpdatedItem>;

    /// Move an item to a 1-based position
    async fn set_item_position(
        &self,
        token: &str,
        item_uuid: &str,
        request: &PositionRequest,
    ) -> CatalogResult<()>;

    async fn delete_item(&self, token: &str, item_uuid: &str, catalog_id: &str) -> CatalogResult<()>;

    async fn upload_images(
        &self,
        token: &str,
        catalog_id: &str,
        files: Vec<UploadFile>,
    ) -> CatalogResult<UploadResponse>;

    /// Render posted HTML to PDF bytes
    async fn export_pdf(
        &self,
        token: &str,
        catalog_id: &str,
        request: &PdfExportRequest,
    ) -> CatalogResult<Vec<u8>>;
}
