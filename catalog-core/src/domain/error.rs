//! Domain Layer - Errors
//!
//! Every failure the editor can report. All of them end up as a
//! notification; the variant only decides which state transition happens.

use thiserror::Error;

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No session token available
    #[error("No active session. Log in to continue.")]
    Unauthenticated,

    /// Form input rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing catalog or item context
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response, message extracted from the body
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Client could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Input validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,
    #[error("missing price")]
    MissingPrice,
    #[error("invalid price")]
    InvalidPrice,
    #[error("missing title")]
    MissingTitle,
    #[error("title must have at least 2 characters")]
    TitleTooShort,
    #[error("missing image")]
    MissingFile,
    #[error("unsupported image format")]
    InvalidImageType,
    #[error("missing catalog html")]
    MissingHtml,
    #[error("missing pdf root container")]
    MissingPdfRoot,
}

impl ValidationError {
    /// Notification title shown for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "Missing name",
            ValidationError::MissingPrice => "Missing price",
            ValidationError::InvalidPrice => "Invalid price",
            ValidationError::MissingTitle => "Missing title",
            ValidationError::TitleTooShort => "Title too short",
            ValidationError::MissingFile => "Missing image",
            ValidationError::InvalidImageType => "Unsupported format",
            ValidationError::MissingHtml | ValidationError::MissingPdfRoot => "Export failed",
        }
    }

    /// Notification body shown for this failure
    pub fn hint(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "Enter a name for the item.",
            ValidationError::MissingPrice => "Enter a valid price.",
            ValidationError::InvalidPrice => "Use digits only, for example 25 or 25.50.",
            ValidationError::MissingTitle => "Enter a title for the catalog.",
            ValidationError::TitleTooShort => "Use at least 2 characters.",
            ValidationError::MissingFile => "Upload an image.",
            ValidationError::InvalidImageType => "Upload a JPG, PNG or WebP image.",
            ValidationError::MissingHtml => "Could not render the catalog HTML.",
            ValidationError::MissingPdfRoot => "Could not prepare the PDF HTML.",
        }
    }
}
