//! Domain Layer
//!
//! Catalog entities, the edit draft and the error taxonomy.
//! No I/O happens here.

mod catalog;
mod draft;
mod error;
mod item;
mod view_mode;
pub(crate) mod wire;

pub use catalog::{
    normalize_hex_color, Catalog, DEFAULT_BACKGROUND_COLOR, DEFAULT_COMPONENT_COLOR,
};
pub use draft::{EditDraft, EditField, EditTarget};
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use item::{find_item_index, format_price, map_items_to_products, ItemDetail, ItemPatch, Product, PLACEHOLDER_IMAGE};
pub use view_mode::ViewMode;
