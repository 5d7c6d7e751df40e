//! HTTP implementation of `CatalogApi`

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error_message::extract_error_message;
use super::payload::{
    CatalogListResponse, CatalogPayload, Credentials, DeleteItemRequest, ItemListResponse,
    LoginResponse, NewItem, PdfExportRequest, PositionRequest, UpdateItemRequest, UpdatedItem,
    UploadFile, UploadResponse,
};
use super::CatalogApi;
use crate::config::ClientConfig;
use crate::domain::{Catalog, CatalogError, CatalogResult, ItemDetail};

/// REST client for the catalog backend
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    config: ClientConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ClientConfig) -> CatalogResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder.build().map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    fn item_url(&self, item_uuid: &str) -> String {
        self.url(&format!("api/items/{}", encode_segment(item_uuid)))
    }

    fn catalog_url(&self, catalog_id: &str) -> String {
        self.url(&format!("api/catalogos/{}", encode_segment(catalog_id)))
    }

    /// Send with bearer auth and turn non-2xx responses into `CatalogError::Server`
    async fn send(&self, request: RequestBuilder, token: Option<&str>) -> CatalogResult<Response> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&content_type, &body);
        warn!(status = status.as_u16(), %message, "catalog api request failed");

        Err(CatalogError::Server { status: status.as_u16(), message })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder, token: Option<&str>) -> CatalogResult<T> {
        let response = self.send(request, token).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Success with a body nobody needs: 204, empty or non-JSON all count
    async fn ack(&self, request: RequestBuilder, token: Option<&str>) -> CatalogResult<()> {
        let response = self.send(request, token).await?;
        let _ = response.text().await;
        Ok(())
    }
}

/// Same unreserved set as `encodeURIComponent`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn file_part(file: UploadFile) -> CatalogResult<Part> {
    Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.mime)
        .map_err(|e| CatalogError::Config(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn login(&self, credentials: &Credentials) -> CatalogResult<String> {
        let request = self.client.post(self.url("api/auth/login")).json(credentials);
        let response: LoginResponse = self.json(request, None).await?;
        response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| CatalogError::Decode("the backend did not return a token".to_string()))
    }

    async fn register(&self, credentials: &Credentials) -> CatalogResult<()> {
        let request = self.client.post(self.url("api/auth/register")).json(credentials);
        self.ack(request, None).await
    }

    async fn list_catalogs(&self, token: &str) -> CatalogResult<Vec<Catalog>> {
        let request = self.client.get(self.url("api/catalogos")).query(&[("page", "1"), ("limit", "10")]);
        let response: CatalogListResponse = self.json(request, Some(token)).await?;
        debug!(count = response.items.len(), "catalogs loaded");
        Ok(response.items)
    }

    async fn get_catalog(&self, token: &str, catalog_id: &str) -> CatalogResult<Catalog> {
        let request = self.client.get(self.catalog_url(catalog_id));
        self.json(request, Some(token)).await
    }

    async fn create_catalog(&self, token: &str, payload: &CatalogPayload) -> CatalogResult<Catalog> {
        let request = self.client.post(self.url("api/catalogos")).json(payload);
        self.json(request, Some(token)).await
    }

    async fn update_catalog(&self, token: &str, catalog_id: &str, payload: &CatalogPayload) -> CatalogResult<Catalog> {
        let request = self.client.put(self.catalog_url(catalog_id)).json(payload);
        self.json(request, Some(token)).await
    }

    async fn delete_catalog(&self, token: &str, catalog_id: &str) -> CatalogResult<()> {
        let request = self.client.delete(self.catalog_url(catalog_id));
        self.ack(request, Some(token)).await
    }

    async fn list_items(&self, token: &str, catalog_id: &str) -> CatalogResult<Vec<ItemDetail>> {
        let request = self.client.get(self.url("api/items")).query(&[("catalogoId", catalog_id)]);
        let response: ItemListResponse = self.json(request, Some(token)).await?;
        let items = response.into_items()?;
        debug!(catalog_id, count = items.len(), "items loaded");
        Ok(items)
    }

    async fn create_item(&self, token: &str, item: NewItem) -> CatalogResult<()> {
        let form = Form::new()
            .text("catalogoId", item.catalog_id)
            .text("name", item.name)
            .text("description", item.description.unwrap_or_default())
            .text("price", item.price)
            .part("image", file_part(item.image)?);
        let request = self.client.post(self.url("api/items")).multipart(form);
        self.ack(request, Some(token)).await
    }

    async fn update_item(&self, token: &str, item_uuid: &str, request: &UpdateItemRequest) -> CatalogResult<UpdatedItem> {
        let builder = self.client.put(self.item_url(item_uuid)).json(request);
        let response = self.send(builder, Some(token)).await?;
        // Some deployments answer 200 with an empty body
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(UpdatedItem::default());
        }
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn set_item_position(&self, token: &str, item_uuid: &str, request: &PositionRequest) -> CatalogResult<()> {
        let url = format!("{}/position", self.item_url(item_uuid));
        let builder = self.client.patch(url).json(request);
        self.ack(builder, Some(token)).await
    }

    async fn delete_item(&self, token: &str, item_uuid: &str, catalog_id: &str) -> CatalogResult<()> {
        let request = self.client.delete(self.item_url(item_uuid)).json(&DeleteItemRequest { catalog_id });
        self.ack(request, Some(token)).await
    }

    async fn upload_images(&self, token: &str, catalog_id: &str, files: Vec<UploadFile>) -> CatalogResult<UploadResponse> {
        let mut form = Form::new().text("catalogoId", catalog_id.to_string());
        for file in files {
            form = form.part("images", file_part(file)?);
        }
        let request = self.client.post(self.url("api/images")).multipart(form);
        self.json(request, Some(token)).await
    }

    async fn export_pdf(&self, token: &str, catalog_id: &str, request: &PdfExportRequest) -> CatalogResult<Vec<u8>> {
        let url = format!("{}/pdf/html", self.catalog_url(catalog_id));
        let builder = self.client.post(url).json(request);
        let response = self.send(builder, Some(token)).await?;
        let bytes = response.bytes().await?;
        debug!(catalog_id, size = bytes.len(), "pdf rendered");
        Ok(bytes.to_vec())
    }
}
