//! User notifications
//!
//! Outcomes are reported as title + description pairs. The UI renders
//! them as toasts.

use crate::domain::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: Variant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: Variant::Destructive }
    }

    /// Report `err` under an operation-specific title.
    /// Validation failures carry their own title and hint.
    pub fn from_error(title: &str, err: &CatalogError) -> Self {
        match err {
            CatalogError::Validation(v) => Self::error(v.title(), v.hint()),
            CatalogError::Unauthenticated => Self::error("No session", err.to_string()),
            other => Self::error(title, other.to_string()),
        }
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_from_error_uses_validation_text() {
        let n = Notification::from_error("Save failed", &ValidationError::MissingName.into());
        assert_eq!(n.title, "Missing name");
        assert_eq!(n.variant, Variant::Destructive);
    }

    #[test]
    fn test_from_error_keeps_server_message() {
        let err = CatalogError::Server { status: 500, message: "boom".to_string() };
        let n = Notification::from_error("Save failed", &err);
        assert_eq!(n.title, "Save failed");
        assert_eq!(n.description, "boom");
    }
}
