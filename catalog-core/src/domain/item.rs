//! Item Entity
//!
//! A product entry inside a catalog, plus the view model the layouts render.

use serde::{Deserialize, Serialize};

use super::wire::{null_as_default, price_text};

/// Image shown when an item has none
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Item as returned by `/api/items`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: String,
    /// Stable key; absent on older records
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub catalog_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Empty when the item has no description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Decimal text, e.g. "25.50"
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ItemDetail {
    /// Key used for editing and reordering: the UUID, or the id when there is none
    pub fn key(&self) -> &str {
        match self.uuid.as_deref() {
            Some(uuid) if !uuid.is_empty() => uuid,
            _ => &self.id,
        }
    }

    /// Merge fields confirmed by a save
    pub fn apply_patch(&mut self, patch: &ItemPatch) {
        self.name = patch.name.clone();
        self.description = patch.description.clone().unwrap_or_default();
        self.price = patch.price.clone();
        if patch.image.is_some() {
            self.image = patch.image.clone();
        }
    }
}

/// Position of the item whose key matches
pub fn find_item_index(items: &[ItemDetail], key: &str) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// Fields confirmed by a successful item update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: String,
    /// `None` means the item has no description
    pub description: Option<String>,
    pub price: String,
    pub image: Option<String>,
}

/// Item shaped for the layouts
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub item_uuid: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Build the view models, unparseable prices render as 0
pub fn map_items_to_products(items: &[ItemDetail]) -> Vec<Product> {
    items
        .iter()
        .map(|item| Product {
            id: item.id.clone(),
            item_uuid: item.key().to_string(),
            title: item.name.clone(),
            description: item.description.clone(),
            price: item.price.trim().parse::<f64>().ok().filter(|p| p.is_finite()).unwrap_or(0.0),
            image: item
                .image
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        })
        .collect()
}

/// Peso amount with `.` thousands and `,` decimals, e.g. `$ 1.234,50`
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut whole = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            whole.push('.');
        }
        whole.push(ch);
    }
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}$ {whole},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, uuid: Option<&str>) -> ItemDetail {
        ItemDetail {
            id: id.to_string(),
            uuid: uuid.map(str::to_string),
            name: format!("Item {}", id),
            price: "10".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_key_falls_back_to_id() {
        assert_eq!(make_item("1", Some("u-1")).key(), "u-1");
        assert_eq!(make_item("2", None).key(), "2");
        assert_eq!(make_item("3", Some("")).key(), "3");
    }

    #[test]
    fn test_find_item_index() {
        let items = vec![make_item("1", Some("a")), make_item("2", None)];
        assert_eq!(find_item_index(&items, "a"), Some(0));
        assert_eq!(find_item_index(&items, "2"), Some(1));
        assert_eq!(find_item_index(&items, "1"), None);
    }

    #[test]
    fn test_map_items_to_products() {
        let mut item = make_item("1", None);
        item.price = "abc".to_string();
        let products = map_items_to_products(&[item]);
        assert_eq!(products[0].price, 0.0);
        assert_eq!(products[0].image, PLACEHOLDER_IMAGE);
        assert_eq!(products[0].item_uuid, "1");
    }

    #[test]
    fn test_apply_patch_clears_description() {
        let mut item = make_item("1", None);
        item.description = "old".to_string();
        item.image = Some("/a.png".to_string());
        item.apply_patch(&ItemPatch {
            name: "Chair".to_string(),
            description: None,
            price: "25.5".to_string(),
            image: None,
        });
        assert_eq!(item.name, "Chair");
        assert_eq!(item.description, "");
        assert_eq!(item.price, "25.5");
        assert_eq!(item.image.as_deref(), Some("/a.png"));
    }

    #[test]
    fn test_null_text_fields_decode_empty() {
        let json = r#"{"id":"1","uuid":"a","name":null,"description":null,"price":null,"image":null}"#;
        let item: ItemDetail = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
        assert_eq!(item.price, "");
        assert_eq!(item.image, None);

        let item: ItemDetail = serde_json::from_str(r#"{"id":"2","price":25.5}"#).unwrap();
        assert_eq!(item.price, "25.5");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$ 0,00");
        assert_eq!(format_price(25.5), "$ 25,50");
        assert_eq!(format_price(1234.5), "$ 1.234,50");
        assert_eq!(format_price(1_000_000.0), "$ 1.000.000,00");
    }
}
