//! Catalog Entity
//!
//! List-level summary of a catalog as returned by `/api/catalogos`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::wire::null_as_default;

/// Page background used when a catalog has no valid color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
/// Card background used when a catalog has no valid color
pub const DEFAULT_COMPONENT_COLOR: &str = "#F2BADE";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex color pattern is valid")
});

/// A catalog owned by the logged-in user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub component_color: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

impl Catalog {
    /// Card color, falling back to white like the rendered views do
    pub fn component_color_or_default(&self) -> String {
        normalize_hex_color(self.component_color.as_deref())
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string())
    }

    /// Page color, `None` when the stored value is not a hex color
    pub fn page_background(&self) -> Option<String> {
        normalize_hex_color(self.background_color.as_deref())
    }
}

/// Trim and accept `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
pub fn normalize_hex_color(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    HEX_COLOR.is_match(trimmed).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_color() {
        assert_eq!(normalize_hex_color(Some(" #abc ")), Some("#abc".to_string()));
        assert_eq!(normalize_hex_color(Some("#A1B2C3D4")), Some("#A1B2C3D4".to_string()));
        assert_eq!(normalize_hex_color(Some("#abcde")), None);
        assert_eq!(normalize_hex_color(Some("red")), None);
        assert_eq!(normalize_hex_color(None), None);
    }

    #[test]
    fn test_catalog_deserializes_camel_case() {
        let json = r##"{"id":"7","title":"Spring","logoUrl":null,"backgroundColor":"#fff","componentColor":"bad"}"##;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.id, "7");
        assert_eq!(catalog.description, "");
        assert_eq!(catalog.page_background(), Some("#fff".to_string()));
        assert_eq!(catalog.component_color_or_default(), "#FFFFFF");
    }

    #[test]
    fn test_catalog_null_fields() {
        let json = r#"{"id":"3","title":null,"description":null,"componentColor":null,"isPublished":null}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.title, "");
        assert_eq!(catalog.description, "");
        assert_eq!(catalog.component_color, None);
        assert_eq!(catalog.page_background(), None);
    }
}
