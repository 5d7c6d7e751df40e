//! Item Edit Session
//!
//! Inline editing of one item's name, description and price.
//!
//! ```text
//! Idle --start_edit--> Editing --begin_save--> Saving --finish_save(ok)--> Idle
//!                        ^                        |
//!                        +----finish_save(err)----+
//! ```
//!
//! Saving is split in two so a reactive UI can run the request between
//! `begin_save` and `finish_save`; `save_edit` does all three in one call.

use tracing::{debug, warn};

use crate::api::{CatalogApi, UpdateItemRequest, UpdatedItem};
use crate::domain::{CatalogError, CatalogResult, EditDraft, EditField, EditTarget, ItemPatch, ValidationError};
use crate::guards;
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;

const SAVE_FAILED: &str = "Could not save";

/// Edit state of the item list. At most one item is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEditSession {
    editing_item_uuid: Option<String>,
    saving_item_uuid: Option<String>,
    draft: EditDraft,
}

/// Validated update, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub item_uuid: String,
    pub token: String,
    pub request: UpdateItemRequest,
}

/// Result of a full `save_edit` round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to save, or a save is already running
    Skipped,
    /// Rejected before any request was sent
    Rejected(CatalogError),
    /// Request sent and refused
    Failed(CatalogError),
    Saved(ItemPatch),
}

impl ItemEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_item_uuid(&self) -> Option<&str> {
        self.editing_item_uuid.as_deref()
    }

    /// Row whose save is in flight
    pub fn saving_item_uuid(&self) -> Option<&str> {
        self.saving_item_uuid.as_deref()
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn is_editing(&self, item_uuid: &str) -> bool {
        self.editing_item_uuid() == Some(item_uuid)
    }

    pub fn is_saving(&self) -> bool {
        self.saving_item_uuid.is_some()
    }

    /// Rows other than the one being saved cannot enter edit mode
    pub fn is_locked(&self, item_uuid: &str) -> bool {
        self.saving_item_uuid().is_some_and(|saving| saving != item_uuid)
    }

    /// Clear the way for deleting `item_uuid`. Refused while any save is in
    /// flight; an editor open on that row is closed without saving.
    pub fn release_for_delete(&mut self, item_uuid: &str) -> bool {
        if self.is_saving() {
            debug!(item_uuid, "delete refused: save in flight");
            return false;
        }
        if self.is_editing(item_uuid) {
            self.cancel_edit();
        }
        true
    }

    /// Open the editor on `target`. Returns false when ignored.
    pub fn start_edit(&mut self, target: &EditTarget) -> bool {
        if self.is_saving() {
            debug!("start_edit ignored: save in flight");
            return false;
        }
        let Some(uuid) = target.item_uuid.as_deref().filter(|uuid| !uuid.is_empty()) else {
            debug!("start_edit ignored: item has no uuid");
            return false;
        };

        self.editing_item_uuid = Some(uuid.to_string());
        self.draft = EditDraft::from_target(target);
        debug!(item_uuid = uuid, "edit started");
        true
    }

    pub fn change_edit(&mut self, field: EditField, value: impl Into<String>) {
        if self.editing_item_uuid.is_some() {
            self.draft.set(field, value);
        }
    }

    /// Close the editor and drop the draft. A save already sent keeps running.
    pub fn cancel_edit(&mut self) {
        if let Some(uuid) = self.editing_item_uuid.take() {
            debug!(item_uuid = %uuid, "edit cancelled");
        }
        self.draft = EditDraft::default();
    }

    /// Validate the draft and mark the save as in flight.
    ///
    /// `Ok(None)` when there is nothing to do. Errors are also reported to
    /// `notifier`; the session stays in Editing either way.
    pub fn begin_save(
        &mut self,
        catalog_id: Option<&str>,
        session: &dyn SessionStore,
        notifier: &dyn Notifier,
    ) -> CatalogResult<Option<PendingSave>> {
        let Some(item_uuid) = self.editing_item_uuid.clone() else {
            return Ok(None);
        };
        let Some(catalog_id) = catalog_id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        if self.is_saving() {
            debug!(item_uuid = %item_uuid, "save ignored: another save in flight");
            return Ok(None);
        }

        let validated = guards::require_token(session).and_then(|token| {
            let request = self.validated_request(catalog_id)?;
            Ok((token, request))
        });
        let (token, request) = match validated {
            Ok(ok) => ok,
            Err(err) => {
                warn!(item_uuid = %item_uuid, error = %err, "save rejected");
                notifier.notify(Notification::from_error(SAVE_FAILED, &err));
                return Err(err);
            }
        };

        self.saving_item_uuid = Some(item_uuid.clone());
        Ok(Some(PendingSave { item_uuid, token, request }))
    }

    fn validated_request(&self, catalog_id: &str) -> Result<UpdateItemRequest, ValidationError> {
        let name = guards::require_non_empty(&self.draft.name, ValidationError::MissingName)?;
        let price = guards::require_valid_price(&self.draft.price)?;
        Ok(UpdateItemRequest {
            catalog_id: catalog_id.to_string(),
            name,
            description: guards::normalize_optional_description(&self.draft.description),
            price,
        })
    }

    /// Apply the response of a save started by `begin_save`.
    ///
    /// On success the confirmed fields come back as a patch, falling back to
    /// the submitted values for anything the server left out.
    pub fn finish_save(
        &mut self,
        pending: &PendingSave,
        result: CatalogResult<UpdatedItem>,
        notifier: &dyn Notifier,
    ) -> CatalogResult<ItemPatch> {
        if self.saving_item_uuid.as_deref() != Some(pending.item_uuid.as_str()) {
            debug!(item_uuid = %pending.item_uuid, "stale save response ignored");
            return result.map(|updated| merge_patch(&pending.request, updated));
        }
        self.saving_item_uuid = None;

        match result {
            Ok(updated) => {
                if self.is_editing(&pending.item_uuid) {
                    self.editing_item_uuid = None;
                    self.draft = EditDraft::default();
                } else {
                    debug!(item_uuid = %pending.item_uuid, "save finished after the editor was closed");
                }
                notifier.notify(Notification::success("Item updated", "Changes saved."));
                Ok(merge_patch(&pending.request, updated))
            }
            Err(err) => {
                warn!(item_uuid = %pending.item_uuid, error = %err, "save failed");
                notifier.notify(Notification::from_error(SAVE_FAILED, &err));
                Err(err)
            }
        }
    }

    /// Validate, send and apply in one go. `on_saved` receives the item
    /// UUID and the confirmed patch.
    pub async fn save_edit<A>(
        &mut self,
        api: &A,
        session: &dyn SessionStore,
        catalog_id: Option<&str>,
        notifier: &dyn Notifier,
        on_saved: impl FnOnce(&str, &ItemPatch),
    ) -> SaveOutcome
    where
        A: CatalogApi + ?Sized,
    {
        let pending = match self.begin_save(catalog_id, session, notifier) {
            Ok(Some(pending)) => pending,
            Ok(None) => return SaveOutcome::Skipped,
            Err(err) => return SaveOutcome::Rejected(err),
        };

        let result = api.update_item(&pending.token, &pending.item_uuid, &pending.request).await;
        match self.finish_save(&pending, result, notifier) {
            Ok(patch) => {
                on_saved(&pending.item_uuid, &patch);
                SaveOutcome::Saved(patch)
            }
            Err(err) => SaveOutcome::Failed(err),
        }
    }
}

fn merge_patch(request: &UpdateItemRequest, updated: UpdatedItem) -> ItemPatch {
    ItemPatch {
        name: updated.name.unwrap_or_else(|| request.name.clone()),
        description: updated.description.or_else(|| request.description.clone()),
        price: updated.price.unwrap_or_else(|| request.price.clone()),
        image: updated.image,
    }
}
