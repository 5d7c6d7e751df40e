//! Test doubles shared by the unit tests

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::{
    CatalogApi, CatalogPayload, Credentials, ItemListResponse, NewItem, PdfExportRequest, PositionRequest, UpdateItemRequest,
    UpdatedItem, UploadFile, UploadResponse, UploadedImage,
};
use crate::domain::{Catalog, CatalogError, CatalogResult, ItemDetail};
use crate::notify::{Notification, Notifier};

pub fn item(key: &str) -> ItemDetail {
    ItemDetail {
        id: format!("id-{key}"),
        uuid: Some(key.to_string()),
        name: key.to_uppercase(),
        price: "10".to_string(),
        ..ItemDetail::default()
    }
}

pub fn keys(items: &[ItemDetail]) -> Vec<String> {
    items.iter().map(|item| item.key().to_string()).collect()
}

pub fn catalog(id: &str) -> Catalog {
    Catalog { id: id.to_string(), title: format!("Catalog {id}"), ..Catalog::default() }
}

pub fn image_file(name: &str) -> UploadFile {
    UploadFile { file_name: name.to_string(), mime: "image/png".to_string(), bytes: vec![0x89, b'P', b'N', b'G'] }
}

fn server_error(message: &str) -> CatalogError {
    CatalogError::Server { status: 500, message: message.to_string() }
}

fn fail_with(failure: &RefCell<Option<String>>) -> CatalogResult<()> {
    match failure.borrow().as_deref() {
        Some(message) => Err(server_error(message)),
        None => Ok(()),
    }
}

/// In-memory `CatalogApi` that records every call
#[derive(Default)]
pub struct FakeApi {
    catalogs: RefCell<Vec<Catalog>>,
    items: RefCell<Vec<ItemDetail>>,
    update_response: RefCell<UpdatedItem>,
    upload_response: RefCell<Option<UploadResponse>>,

    catalog_failure: RefCell<Option<String>>,
    update_failure: RefCell<Option<String>>,
    position_failure: RefCell<Option<String>>,
    create_failure: RefCell<Option<String>>,
    pdf_failure: RefCell<Option<String>>,

    updates: RefCell<Vec<(String, UpdateItemRequest)>>,
    positions: RefCell<Vec<(String, PositionRequest)>>,
    deleted_items: RefCell<Vec<(String, String)>>,
    deleted_catalogs: RefCell<Vec<String>>,
    created_catalogs: RefCell<Vec<CatalogPayload>>,
    updated_catalogs: RefCell<Vec<(String, CatalogPayload)>>,
    uploads: RefCell<Vec<(String, Vec<String>)>>,
    created_items: RefCell<Vec<NewItem>>,
    pdf_requests: RefCell<Vec<(String, PdfExportRequest)>>,
}

impl FakeApi {
    pub fn set_catalogs(&self, catalogs: Vec<Catalog>) {
        *self.catalogs.borrow_mut() = catalogs;
    }

    pub fn set_items(&self, items: Vec<ItemDetail>) {
        *self.items.borrow_mut() = items;
    }

    pub fn set_update_response(&self, response: UpdatedItem) {
        *self.update_response.borrow_mut() = response;
    }

    pub fn set_upload_response(&self, response: UploadResponse) {
        *self.upload_response.borrow_mut() = Some(response);
    }

    pub fn fail_catalogs(&self, message: &str) {
        *self.catalog_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_updates(&self, message: &str) {
        *self.update_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_positions(&self, message: &str) {
        *self.position_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_creates(&self, message: &str) {
        *self.create_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_pdf(&self, message: &str) {
        *self.pdf_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn updates(&self) -> Vec<(String, UpdateItemRequest)> {
        self.updates.borrow().clone()
    }

    pub fn positions(&self) -> Vec<(String, PositionRequest)> {
        self.positions.borrow().clone()
    }

    pub fn deleted_items(&self) -> Vec<(String, String)> {
        self.deleted_items.borrow().clone()
    }

    pub fn deleted_catalogs(&self) -> Vec<String> {
        self.deleted_catalogs.borrow().clone()
    }

    pub fn created_catalogs(&self) -> Vec<CatalogPayload> {
        self.created_catalogs.borrow().clone()
    }

    pub fn updated_catalogs(&self) -> Vec<(String, CatalogPayload)> {
        self.updated_catalogs.borrow().clone()
    }

    /// Catalog id and file names of each upload
    pub fn uploads(&self) -> Vec<(String, Vec<String>)> {
        self.uploads.borrow().clone()
    }

    pub fn created_items(&self) -> Vec<NewItem> {
        self.created_items.borrow().clone()
    }

    pub fn pdf_requests(&self) -> Vec<(String, PdfExportRequest)> {
        self.pdf_requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CatalogApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> CatalogResult<String> {
        Ok(format!("token-{}", credentials.email))
    }

    async fn register(&self, _credentials: &Credentials) -> CatalogResult<()> {
        Ok(())
    }

    async fn list_catalogs(&self, _token: &str) -> CatalogResult<Vec<Catalog>> {
        fail_with(&self.catalog_failure)?;
        Ok(self.catalogs.borrow().clone())
    }

    async fn get_catalog(&self, _token: &str, catalog_id: &str) -> CatalogResult<Catalog> {
        self.catalogs
            .borrow()
            .iter()
            .find(|catalog| catalog.id == catalog_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(catalog_id.to_string()))
    }

    async fn create_catalog(&self, _token: &str, payload: &CatalogPayload) -> CatalogResult<Catalog> {
        fail_with(&self.create_failure)?;
        self.created_catalogs.borrow_mut().push(payload.clone());
        Ok(Catalog {
            id: "new-catalog".to_string(),
            title: payload.title.clone().unwrap_or_default(),
            ..Catalog::default()
        })
    }

    async fn update_catalog(&self, _token: &str, catalog_id: &str, payload: &CatalogPayload) -> CatalogResult<Catalog> {
        self.updated_catalogs.borrow_mut().push((catalog_id.to_string(), payload.clone()));
        Ok(catalog(catalog_id))
    }

    async fn delete_catalog(&self, _token: &str, catalog_id: &str) -> CatalogResult<()> {
        self.deleted_catalogs.borrow_mut().push(catalog_id.to_string());
        Ok(())
    }

    /// Answers the way the backend does: cleared descriptions come back as `null`
    async fn list_items(&self, _token: &str, _catalog_id: &str) -> CatalogResult<Vec<ItemDetail>> {
        let records = self
            .items
            .borrow()
            .iter()
            .map(|item| -> CatalogResult<serde_json::Value> {
                let mut record = serde_json::to_value(item)?;
                if item.description.is_empty() {
                    record["description"] = serde_json::Value::Null;
                }
                Ok(record)
            })
            .collect::<CatalogResult<Vec<_>>>()?;
        let body = serde_json::to_string(&records)?;
        serde_json::from_str::<ItemListResponse>(&body)?.into_items()
    }

    async fn create_item(&self, _token: &str, item: NewItem) -> CatalogResult<()> {
        fail_with(&self.create_failure)?;
        self.created_items.borrow_mut().push(item);
        Ok(())
    }

    async fn update_item(&self, _token: &str, item_uuid: &str, request: &UpdateItemRequest) -> CatalogResult<UpdatedItem> {
        self.updates.borrow_mut().push((item_uuid.to_string(), request.clone()));
        fail_with(&self.update_failure)?;
        if let Some(stored) = self.items.borrow_mut().iter_mut().find(|item| item.key() == item_uuid) {
            stored.name = request.name.clone();
            stored.description = request.description.clone().unwrap_or_default();
            stored.price = request.price.clone();
        }
        Ok(self.update_response.borrow().clone())
    }

    async fn set_item_position(&self, _token: &str, item_uuid: &str, request: &PositionRequest) -> CatalogResult<()> {
        self.positions.borrow_mut().push((item_uuid.to_string(), request.clone()));
        fail_with(&self.position_failure)
    }

    async fn delete_item(&self, _token: &str, item_uuid: &str, catalog_id: &str) -> CatalogResult<()> {
        self.deleted_items.borrow_mut().push((item_uuid.to_string(), catalog_id.to_string()));
        Ok(())
    }

    async fn upload_images(&self, _token: &str, catalog_id: &str, files: Vec<UploadFile>) -> CatalogResult<UploadResponse> {
        let names = files.iter().map(|file| file.file_name.clone()).collect();
        self.uploads.borrow_mut().push((catalog_id.to_string(), names));
        let response = self.upload_response.borrow().clone().unwrap_or_else(|| UploadResponse {
            images: vec![UploadedImage {
                url: Some(format!("/uploads/{catalog_id}/logo.png")),
                ..UploadedImage::default()
            }],
        });
        Ok(response)
    }

    async fn export_pdf(&self, _token: &str, catalog_id: &str, request: &PdfExportRequest) -> CatalogResult<Vec<u8>> {
        self.pdf_requests.borrow_mut().push((catalog_id.to_string(), request.clone()));
        fail_with(&self.pdf_failure)?;
        Ok(b"%PDF-1.7".to_vec())
    }
}

/// `Notifier` that keeps everything it was given
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn is_empty(&self) -> bool {
        self.notifications.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications.borrow().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}
