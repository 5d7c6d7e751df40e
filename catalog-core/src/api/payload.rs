//! Wire types
//!
//! Request bodies and response shapes of the catalog backend.
//! Field names follow the backend (`catalogoId`, camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::wire::string_or_number;
use crate::domain::{CatalogError, CatalogResult, ItemDetail, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `PUT /api/items/{uuid}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateItemRequest {
    #[serde(rename = "catalogoId")]
    pub catalog_id: String,
    pub name: String,
    /// Omitted when the item has no description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
}

/// Item fields echoed back by an update; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdatedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal text; some deployments answer with a JSON number
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of `PATCH /api/items/{uuid}/position`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionRequest {
    #[serde(rename = "catalogoId")]
    pub catalog_id: String,
    /// 1-based
    #[serde(rename = "newPosition")]
    pub new_position: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DeleteItemRequest<'a> {
    #[serde(rename = "catalogoId")]
    pub catalog_id: &'a str,
}

/// Create/update body for `/api/catalogos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Body of `POST /api/catalogos/{id}/pdf/html`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportRequest {
    pub html: String,
    pub view_mode: ViewMode,
}

/// File picked in the browser, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Multipart fields of `POST /api/items`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub catalog_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub image: UploadFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub images: Vec<UploadedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl UploadResponse {
    /// Address of the first uploaded image, whichever field the backend filled
    pub fn first_url(&self) -> Option<String> {
        let image = self.images.first()?;
        [&image.url, &image.image_url, &image.path, &image.location]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .cloned()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogListResponse {
    #[serde(default)]
    pub items: Vec<crate::domain::Catalog>,
}

/// Every shape `GET /api/items` is known to answer with
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemListResponse {
    List(Vec<ItemDetail>),
    Wrapped { items: Vec<ItemDetail> },
    Single(ItemDetail),
    Other(Value),
}

impl ItemListResponse {
    /// Bodies without any item shape decode as an empty list. An array,
    /// an `items` key or an `id` whose records do not decode is an error.
    pub fn into_items(self) -> CatalogResult<Vec<ItemDetail>> {
        match self {
            ItemListResponse::List(items) | ItemListResponse::Wrapped { items } => Ok(items),
            ItemListResponse::Single(item) => Ok(vec![item]),
            ItemListResponse::Other(body) => reject_malformed(body),
        }
    }
}

fn reject_malformed(body: Value) -> CatalogResult<Vec<ItemDetail>> {
    let decoded = match body {
        Value::Array(items) => serde_json::from_value::<Vec<ItemDetail>>(Value::Array(items)).map(drop),
        Value::Object(mut fields) => match fields.remove("items") {
            Some(Value::Null) => return Ok(Vec::new()),
            Some(items) => serde_json::from_value::<Vec<ItemDetail>>(items).map(drop),
            None if fields.contains_key("id") => serde_json::from_value::<ItemDetail>(Value::Object(fields)).map(drop),
            None => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    match decoded {
        Err(err) => Err(CatalogError::Decode(err.to_string())),
        Ok(()) => Err(CatalogError::Decode("unrecognized item list".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<ItemDetail> {
        serde_json::from_str::<ItemListResponse>(json).unwrap().into_items().unwrap()
    }

    fn decode_err(json: &str) -> CatalogError {
        serde_json::from_str::<ItemListResponse>(json).unwrap().into_items().unwrap_err()
    }

    #[test]
    fn test_item_list_shapes() {
        assert_eq!(decode(r#"[{"id":"1","name":"A"},{"id":"2","name":"B"}]"#).len(), 2);
        assert_eq!(decode(r#"{"items":[{"id":"1","name":"A"}]}"#)[0].name, "A");
        assert_eq!(decode(r#"{"id":"9","uuid":"u9","name":"Solo"}"#)[0].key(), "u9");
        assert!(decode(r#"{"message":"nothing here"}"#).is_empty());
        assert!(decode("null").is_empty());
        assert!(decode(r#"{"items":null}"#).is_empty());
    }

    #[test]
    fn test_item_list_with_null_fields() {
        let json = r#"[
            {"id":"1","uuid":"a","catalogId":"c1","name":"Chair","description":null,"price":"25.5","image":null},
            {"id":"2","uuid":"b","catalogId":"c1","name":"Lamp","description":"Warm","price":12,"image":"/l.png"}
        ]"#;
        let items = decode(json);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].image, None);
        assert_eq!(items[1].price, "12");

        let wrapped = decode(r#"{"items":[{"id":"1","name":"Chair","description":null}]}"#);
        assert_eq!(wrapped[0].name, "Chair");
    }

    #[test]
    fn test_malformed_item_lists_are_decode_errors() {
        assert!(matches!(decode_err(r#"[{"name":"no id"}]"#), CatalogError::Decode(_)));
        assert!(matches!(decode_err(r#"{"items":[{"id":[]}]}"#), CatalogError::Decode(_)));
        assert!(matches!(decode_err(r#"{"items":"nope"}"#), CatalogError::Decode(_)));
        assert!(matches!(decode_err(r#"{"id":{"nested":true}}"#), CatalogError::Decode(_)));
    }

    #[test]
    fn test_catalog_list_with_null_fields() {
        let json = r#"{"items":[{"id":"7","title":"Spring","description":null,"logoUrl":null,"componentColor":null}]}"#;
        let response: CatalogListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].description, "");
    }

    #[test]
    fn test_update_request_omits_missing_description() {
        let request = UpdateItemRequest {
            catalog_id: "c1".to_string(),
            name: "Chair".to_string(),
            description: None,
            price: "25.5".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"catalogoId": "c1", "name": "Chair", "price": "25.5"}));
    }

    #[test]
    fn test_position_request_wire_names() {
        let json = serde_json::to_value(PositionRequest { catalog_id: "c1".to_string(), new_position: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"catalogoId": "c1", "newPosition": 3}));
    }

    #[test]
    fn test_pdf_request_wire_names() {
        let json = serde_json::to_value(PdfExportRequest { html: "<p/>".to_string(), view_mode: ViewMode::Table }).unwrap();
        assert_eq!(json, serde_json::json!({"html": "<p/>", "viewMode": "table"}));
    }

    #[test]
    fn test_upload_first_url_fallbacks() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"images":[{"url":"","imageUrl":null,"path":"/p.png"}]}"#).unwrap();
        assert_eq!(response.first_url().as_deref(), Some("/p.png"));
        assert_eq!(UploadResponse::default().first_url(), None);
    }

    #[test]
    fn test_updated_item_accepts_numeric_price() {
        let updated: UpdatedItem = serde_json::from_str(r#"{"name":"Chair","price":25.5}"#).unwrap();
        assert_eq!(updated.price.as_deref(), Some("25.5"));
        let updated: UpdatedItem = serde_json::from_str(r#"{"price":"25.50"}"#).unwrap();
        assert_eq!(updated.price.as_deref(), Some("25.50"));
    }
}
