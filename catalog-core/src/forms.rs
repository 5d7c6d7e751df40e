//! Catalog and item forms
//!
//! Field state, validation and submit flows for the "new / edit catalog"
//! dialog and the "new item" dialog.

use tracing::{debug, info, warn};

use crate::api::{CatalogApi, CatalogPayload, NewItem, UploadFile};
use crate::domain::{
    normalize_hex_color, Catalog, CatalogError, CatalogResult, ValidationError, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_COMPONENT_COLOR,
};
use crate::guards;
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

// ========================
// Catalog form
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogForm {
    mode: FormMode,
    catalog_id: Option<String>,
    pub title: String,
    pub description: String,
    pub background_color: String,
    pub component_color: String,
    pub is_published: bool,
    /// Logo already stored on the catalog
    pub logo_url: Option<String>,
    /// Newly picked logo, uploaded on submit
    pub logo_file: Option<UploadFile>,
}

/// Checked catalog form, ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCatalogForm {
    pub token: String,
    pub payload: CatalogPayload,
    pub logo: Option<UploadFile>,
}

impl CatalogForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            catalog_id: None,
            title: String::new(),
            description: String::new(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            component_color: DEFAULT_COMPONENT_COLOR.to_string(),
            is_published: true,
            logo_url: None,
            logo_file: None,
        }
    }

    /// Seeded from an existing catalog; invalid colors fall back to the defaults
    pub fn edit(catalog: &Catalog) -> Self {
        Self {
            mode: FormMode::Edit,
            catalog_id: Some(catalog.id.clone()),
            title: catalog.title.clone(),
            description: catalog.description.clone(),
            background_color: normalize_hex_color(catalog.background_color.as_deref())
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            component_color: normalize_hex_color(catalog.component_color.as_deref())
                .unwrap_or_else(|| DEFAULT_COMPONENT_COLOR.to_string()),
            is_published: catalog.is_published.unwrap_or(false),
            logo_url: catalog.logo_url.clone(),
            logo_file: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn catalog_id(&self) -> Option<&str> {
        self.catalog_id.as_deref()
    }

    pub fn is_title_valid(&self) -> bool {
        self.title.trim().chars().count() >= guards::MIN_TITLE_CHARS
    }

    /// Only images are accepted; anything else keeps the previous pick
    pub fn select_logo(&mut self, file: UploadFile) -> Result<(), ValidationError> {
        guards::require_image_type(&file.mime)?;
        self.logo_file = Some(file);
        Ok(())
    }

    pub fn validate(&self, session: &dyn SessionStore) -> CatalogResult<ValidCatalogForm> {
        let token = guards::require_token(session)?;
        if self.mode == FormMode::Edit && self.catalog_id.is_none() {
            return Err(CatalogError::NotFound("catalog".to_string()));
        }
        let title = guards::require_title(&self.title)?;
        let logo = match self.mode {
            FormMode::Create => Some(self.logo_file.clone().ok_or(ValidationError::MissingFile)?),
            FormMode::Edit => self.logo_file.clone(),
        };

        let payload = CatalogPayload {
            title: Some(title),
            description: guards::normalize_optional_description(&self.description),
            background_color: normalize_hex_color(Some(&self.background_color)),
            component_color: normalize_hex_color(Some(&self.component_color)),
            logo_url: None,
            is_published: Some(self.is_published),
        };
        Ok(ValidCatalogForm { token, payload, logo })
    }

    /// Validate and save. Returns the id of the created or updated catalog.
    pub async fn submit<A>(&self, api: &A, session: &dyn SessionStore, notifier: &dyn Notifier) -> CatalogResult<String>
    where
        A: CatalogApi + ?Sized,
    {
        let failure_title = match self.mode {
            FormMode::Create => "Could not create catalog",
            FormMode::Edit => "Could not save",
        };

        let result = match self.validate(session) {
            Ok(valid) => match self.mode {
                FormMode::Create => self.submit_create(api, valid).await,
                FormMode::Edit => self.submit_edit(api, valid).await,
            },
            Err(err) => Err(err),
        };

        match &result {
            Ok(_) if self.mode == FormMode::Create => notifier.notify(Notification::success("Catalog created", "")),
            Ok(_) => notifier.notify(Notification::success("Catalog updated", "Changes saved.")),
            Err(err) => {
                warn!(error = %err, "catalog form rejected");
                notifier.notify(Notification::from_error(failure_title, err));
            }
        }
        result
    }

    async fn submit_create<A>(&self, api: &A, valid: ValidCatalogForm) -> CatalogResult<String>
    where
        A: CatalogApi + ?Sized,
    {
        let created = api.create_catalog(&valid.token, &valid.payload).await?;
        info!(catalog_id = %created.id, "catalog created");

        if let Some(logo) = valid.logo {
            let uploaded = api.upload_images(&valid.token, &created.id, vec![logo]).await?;
            if let Some(logo_url) = uploaded.first_url() {
                let patch = CatalogPayload { logo_url: Some(logo_url), ..CatalogPayload::default() };
                api.update_catalog(&valid.token, &created.id, &patch).await?;
            } else {
                debug!(catalog_id = %created.id, "upload returned no image url");
            }
        }
        Ok(created.id)
    }

    async fn submit_edit<A>(&self, api: &A, valid: ValidCatalogForm) -> CatalogResult<String>
    where
        A: CatalogApi + ?Sized,
    {
        let catalog_id = guards::require_catalog_id(self.catalog_id.as_deref())?;
        let mut logo_url = self.logo_url.clone().filter(|url| !url.is_empty());

        if let Some(logo) = valid.logo {
            let uploaded = api.upload_images(&valid.token, &catalog_id, vec![logo]).await?;
            logo_url = uploaded.first_url().or(logo_url);
        }

        let payload = CatalogPayload { logo_url, ..valid.payload };
        api.update_catalog(&valid.token, &catalog_id, &payload).await?;
        info!(catalog_id = %catalog_id, "catalog updated");
        Ok(catalog_id)
    }
}

// ========================
// New item form
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<UploadFile>,
}

impl NewItemForm {
    /// Enables the submit button; `validate` still runs on submit
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && guards::is_valid_price(&self.price)
    }

    pub fn select_image(&mut self, file: UploadFile) -> Result<(), ValidationError> {
        guards::require_image_type(&file.mime)?;
        self.image = Some(file);
        Ok(())
    }

    pub fn validate(&self, session: &dyn SessionStore, catalog_id: Option<&str>) -> CatalogResult<(String, NewItem)> {
        let token = guards::require_token(session)?;
        let catalog_id = guards::require_catalog_id(catalog_id)?;
        let name = guards::require_non_empty(&self.name, ValidationError::MissingName)?;
        let price = guards::require_valid_price(&self.price)?;
        let image = self.image.clone().ok_or(ValidationError::MissingFile)?;

        Ok((
            token,
            NewItem {
                catalog_id,
                name,
                description: guards::normalize_optional_description(&self.description),
                price,
                image,
            },
        ))
    }

    pub async fn submit<A>(
        &self,
        api: &A,
        session: &dyn SessionStore,
        catalog_id: Option<&str>,
        notifier: &dyn Notifier,
    ) -> CatalogResult<()>
    where
        A: CatalogApi + ?Sized,
    {
        let result = match self.validate(session, catalog_id) {
            Ok((token, item)) => api.create_item(&token, item).await,
            Err(err) => Err(err),
        };

        match &result {
            Ok(()) => {
                info!(catalog_id = ?catalog_id, "item created");
                notifier.notify(Notification::success("Item created", "The item was added to the catalog."));
            }
            Err(err) => {
                warn!(error = %err, "item form rejected");
                notifier.notify(Notification::from_error("Could not create item", err));
            }
        }
        result
    }
}
