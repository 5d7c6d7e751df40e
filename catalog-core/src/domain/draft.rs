//! Edit Draft
//!
//! Unsaved values of the item being edited. Lives only in memory.

/// Draft field addressed by `change_edit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Description,
    Price,
}

/// Buffered form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl EditDraft {
    /// Seed from the item being edited, price with two decimals
    pub fn from_target(target: &EditTarget) -> Self {
        Self {
            name: target.title.clone(),
            description: target.description.clone(),
            price: format!("{:.2}", target.price),
        }
    }

    pub fn set(&mut self, field: EditField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditField::Name => self.name = value,
            EditField::Description => self.description = value,
            EditField::Price => self.price = value,
        }
    }

    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Description => &self.description,
            EditField::Price => &self.price,
        }
    }
}

/// The row a user asked to edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub item_uuid: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl From<&super::Product> for EditTarget {
    fn from(product: &super::Product) -> Self {
        Self {
            item_uuid: Some(product.item_uuid.clone()).filter(|uuid| !uuid.is_empty()),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_target_formats_price() {
        let draft = EditDraft::from_target(&EditTarget {
            item_uuid: Some("a".to_string()),
            title: "Lamp".to_string(),
            description: String::new(),
            price: 25.5,
        });
        assert_eq!(draft.price, "25.50");
        assert_eq!(draft.name, "Lamp");
    }

    #[test]
    fn test_set_field() {
        let mut draft = EditDraft::default();
        draft.set(EditField::Price, "12");
        assert_eq!(draft.get(EditField::Price), "12");
        assert_eq!(draft.get(EditField::Name), "");
    }
}
