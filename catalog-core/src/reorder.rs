//! Drag Reorder Coordinator
//!
//! Drag-and-drop reordering of the item list. A drop is applied to the
//! list immediately, then persisted with
//! `PATCH /api/items/{uuid}/position`. What happens to the local order when
//! the request fails is decided by a `ReorderPolicy`.

use tracing::{debug, warn};

use crate::api::{CatalogApi, PositionRequest};
use crate::domain::{find_item_index, CatalogResult, ItemDetail};
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;

// ========================
// Ordering
// ========================

/// Remove at `from`, insert at `to`. Out of range indexes leave the list alone.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

/// A drop that was applied locally and still has to reach the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReorder {
    pub item_uuid: String,
    pub from_index: usize,
    pub to_index: usize,
    /// Order before the drop
    pub snapshot: Vec<ItemDetail>,
}

impl PendingReorder {
    /// 1-based position sent to the backend
    pub fn new_position(&self) -> usize {
        self.to_index + 1
    }
}

/// How a persisted reorder ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    Persisted,
    /// No token or catalog; the local order stands unsaved
    Unsaved,
    Failed { rolled_back: bool },
}

// ========================
// Policies
// ========================

/// Decides what a failed position update does to the local list
pub trait ReorderPolicy {
    /// Returns true when `items` was changed
    fn on_failure(&self, pending: &PendingReorder, items: &mut Vec<ItemDetail>) -> bool;
}

/// Leave the optimistic order in place
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOptimistic;

impl ReorderPolicy for KeepOptimistic {
    fn on_failure(&self, _pending: &PendingReorder, _items: &mut Vec<ItemDetail>) -> bool {
        false
    }
}

/// Put the order back the way it was before the drop
#[derive(Debug, Clone, Copy, Default)]
pub struct RollbackOnFailure;

impl ReorderPolicy for RollbackOnFailure {
    fn on_failure(&self, pending: &PendingReorder, items: &mut Vec<ItemDetail>) -> bool {
        if *items == pending.snapshot {
            return false;
        }
        *items = pending.snapshot.clone();
        true
    }
}

// ========================
// Coordinator
// ========================

#[derive(Debug, Clone, Default)]
pub struct DragReorderCoordinator<P = KeepOptimistic> {
    dragging_item_uuid: Option<String>,
    drag_over_item_uuid: Option<String>,
    policy: P,
}

impl DragReorderCoordinator<KeepOptimistic> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ReorderPolicy> DragReorderCoordinator<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { dragging_item_uuid: None, drag_over_item_uuid: None, policy }
    }

    pub fn dragging_item_uuid(&self) -> Option<&str> {
        self.dragging_item_uuid.as_deref()
    }

    /// Item currently highlighted as the drop target
    pub fn drag_over_item_uuid(&self) -> Option<&str> {
        self.drag_over_item_uuid.as_deref()
    }

    /// `editing` is the item open in the inline editor, if any.
    /// No drag can start while an edit is open.
    pub fn drag_start(&mut self, item_uuid: &str, editing: Option<&str>) -> bool {
        if let Some(editing) = editing {
            debug!(item_uuid, editing, "drag rejected: edit in progress");
            return false;
        }
        self.dragging_item_uuid = Some(item_uuid.to_string());
        self.drag_over_item_uuid = None;
        true
    }

    pub fn drag_enter(&mut self, item_uuid: &str) {
        match self.dragging_item_uuid.as_deref() {
            Some(source) if source != item_uuid => {
                self.drag_over_item_uuid = Some(item_uuid.to_string());
            }
            _ => {}
        }
    }

    pub fn drag_leave(&mut self) {
        self.drag_over_item_uuid = None;
    }

    /// Drag ended without a drop
    pub fn drag_end(&mut self) {
        self.dragging_item_uuid = None;
        self.drag_over_item_uuid = None;
    }

    /// Apply the drop to `items`. The drag state is cleared whatever happens.
    pub fn drop(
        &mut self,
        target_uuid: &str,
        items: &mut Vec<ItemDetail>,
        editing: Option<&str>,
    ) -> Option<PendingReorder> {
        let source = self.dragging_item_uuid.take();
        self.drag_over_item_uuid = None;

        let source = source.filter(|source| source != target_uuid)?;
        if editing.is_some() {
            debug!(source = %source, target_uuid, "drop rejected: edit in progress");
            return None;
        }

        let (Some(from_index), Some(to_index)) =
            (find_item_index(items, &source), find_item_index(items, target_uuid))
        else {
            warn!(source = %source, target_uuid, "drop ignored: item not in list");
            return None;
        };

        let snapshot = items.clone();
        move_item(items, from_index, to_index);
        debug!(item_uuid = %source, from_index, to_index, "items reordered");

        Some(PendingReorder { item_uuid: source, from_index, to_index, snapshot })
    }

    /// Token and body for the position update; `None` when there is no
    /// session or no catalog selected.
    pub fn persist_request(
        pending: &PendingReorder,
        session: &dyn SessionStore,
        catalog_id: Option<&str>,
    ) -> Option<(String, PositionRequest)> {
        let token = session.token()?;
        let catalog_id = catalog_id.filter(|id| !id.is_empty())?;
        Some((
            token,
            PositionRequest { catalog_id: catalog_id.to_string(), new_position: pending.new_position() },
        ))
    }

    /// Report the position update and let the policy handle failures
    pub fn reconcile(
        &self,
        pending: &PendingReorder,
        result: CatalogResult<()>,
        items: &mut Vec<ItemDetail>,
        notifier: &dyn Notifier,
    ) -> ReorderOutcome {
        match result {
            Ok(()) => {
                notifier.notify(Notification::success("Order updated", "The item was moved."));
                ReorderOutcome::Persisted
            }
            Err(err) => {
                warn!(item_uuid = %pending.item_uuid, error = %err, "position update failed");
                let rolled_back = self.policy.on_failure(pending, items);
                notifier.notify(Notification::from_error("Could not reorder", &err));
                ReorderOutcome::Failed { rolled_back }
            }
        }
    }

    /// Drop, persist and reconcile in one go. `None` when the drop was not applied.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_drop<A>(
        &mut self,
        target_uuid: &str,
        items: &mut Vec<ItemDetail>,
        editing: Option<&str>,
        api: &A,
        session: &dyn SessionStore,
        catalog_id: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Option<ReorderOutcome>
    where
        A: CatalogApi + ?Sized,
    {
        let pending = self.drop(target_uuid, items, editing)?;
        let Some((token, request)) = Self::persist_request(&pending, session, catalog_id) else {
            debug!(item_uuid = %pending.item_uuid, "reorder not persisted: no session or catalog");
            return Some(ReorderOutcome::Unsaved);
        };

        let result = api.set_item_position(&token, &pending.item_uuid, &request).await;
        Some(self.reconcile(&pending, result, items, notifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Variant;
    use crate::session::MemorySessionStore;
    use crate::testing::{item, keys, FakeApi, RecordingNotifier};

    fn abc() -> Vec<ItemDetail> {
        vec![item("a"), item("b"), item("c")]
    }

    #[test]
    fn test_move_item_splice() {
        let mut v = vec![1, 2, 3, 4];
        move_item(&mut v, 0, 2);
        assert_eq!(v, vec![2, 3, 1, 4]);
        move_item(&mut v, 3, 0);
        assert_eq!(v, vec![4, 2, 3, 1]);
        move_item(&mut v, 9, 0);
        assert_eq!(v, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_drag_enter_ignores_source_and_idle() {
        let mut coordinator = DragReorderCoordinator::new();
        coordinator.drag_enter("b");
        assert_eq!(coordinator.drag_over_item_uuid(), None);

        assert!(coordinator.drag_start("a", None));
        coordinator.drag_enter("a");
        assert_eq!(coordinator.drag_over_item_uuid(), None);
        coordinator.drag_enter("b");
        assert_eq!(coordinator.drag_over_item_uuid(), Some("b"));
        coordinator.drag_leave();
        assert_eq!(coordinator.drag_over_item_uuid(), None);
        assert_eq!(coordinator.dragging_item_uuid(), Some("a"));
    }

    #[test]
    fn test_drag_start_rejected_while_editing() {
        let mut coordinator = DragReorderCoordinator::new();
        assert!(!coordinator.drag_start("a", Some("b")));
        assert_eq!(coordinator.dragging_item_uuid(), None);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();
        coordinator.drag_start("a", None);
        assert!(coordinator.drop("a", &mut items, None).is_none());
        assert_eq!(keys(&items), ["a", "b", "c"]);
        assert_eq!(coordinator.dragging_item_uuid(), None);
    }

    #[test]
    fn test_drop_rejected_when_edit_opened_mid_drag() {
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();
        coordinator.drag_start("a", None);
        assert!(coordinator.drop("c", &mut items, Some("c")).is_none());
        assert_eq!(keys(&items), ["a", "b", "c"]);
        assert_eq!(coordinator.dragging_item_uuid(), None);
    }

    #[test]
    fn test_drop_unknown_target_leaves_list() {
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();
        coordinator.drag_start("a", None);
        coordinator.drag_enter("zz");
        assert!(coordinator.drop("zz", &mut items, None).is_none());
        assert_eq!(keys(&items), ["a", "b", "c"]);
        assert_eq!(coordinator.drag_over_item_uuid(), None);
    }

    #[test]
    fn test_drop_falls_back_to_id() {
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();
        items[2].uuid = None;
        items[2].id = "legacy-3".to_string();

        coordinator.drag_start("legacy-3", None);
        let pending = coordinator.drop("a", &mut items, None).unwrap();

        assert_eq!(keys(&items), ["legacy-3", "a", "b"]);
        assert_eq!(pending.new_position(), 1);
    }

    #[tokio::test]
    async fn test_drag_first_onto_last() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();

        coordinator.drag_start("a", None);
        coordinator.drag_enter("c");
        let outcome = coordinator
            .handle_drop("c", &mut items, None, &api, &MemorySessionStore::with_token("t"), Some("c1"), &notifier)
            .await;

        assert_eq!(outcome, Some(ReorderOutcome::Persisted));
        assert_eq!(keys(&items), ["b", "c", "a"]);
        let positions = api.positions();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].0, "a");
        assert_eq!(positions[0].1, PositionRequest { catalog_id: "c1".to_string(), new_position: 3 });
        assert_eq!(notifier.last().unwrap().title, "Order updated");
    }

    #[tokio::test]
    async fn test_failed_persist_keeps_new_order() {
        let api = FakeApi::default();
        api.fail_positions("Position out of range");
        let notifier = RecordingNotifier::default();
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();

        coordinator.drag_start("c", None);
        let outcome = coordinator
            .handle_drop("a", &mut items, None, &api, &MemorySessionStore::with_token("t"), Some("c1"), &notifier)
            .await;

        assert_eq!(outcome, Some(ReorderOutcome::Failed { rolled_back: false }));
        assert_eq!(keys(&items), ["c", "a", "b"]);
        let last = notifier.last().unwrap();
        assert_eq!(last.variant, Variant::Destructive);
        assert_eq!(last.description, "Position out of range");
    }

    #[tokio::test]
    async fn test_rollback_policy_restores_snapshot() {
        let api = FakeApi::default();
        api.fail_positions("nope");
        let notifier = RecordingNotifier::default();
        let mut coordinator = DragReorderCoordinator::with_policy(RollbackOnFailure);
        let mut items = abc();

        coordinator.drag_start("a", None);
        let outcome = coordinator
            .handle_drop("b", &mut items, None, &api, &MemorySessionStore::with_token("t"), Some("c1"), &notifier)
            .await;

        assert_eq!(outcome, Some(ReorderOutcome::Failed { rolled_back: true }));
        assert_eq!(keys(&items), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_missing_token_leaves_order_unsaved() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let mut coordinator = DragReorderCoordinator::new();
        let mut items = abc();

        coordinator.drag_start("b", None);
        let outcome = coordinator
            .handle_drop("a", &mut items, None, &api, &MemorySessionStore::new(), Some("c1"), &notifier)
            .await;

        assert_eq!(outcome, Some(ReorderOutcome::Unsaved));
        assert_eq!(keys(&items), ["b", "a", "c"]);
        assert!(api.positions().is_empty());
        assert!(notifier.is_empty());
    }
}
