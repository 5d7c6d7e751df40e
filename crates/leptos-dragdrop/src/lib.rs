//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop handlers for Leptos lists.
//! Rows are identified by string keys; the list owner decides what a
//! drag start, enter or drop means through callbacks.

use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type used to carry the dragged key
const DRAG_FORMAT: &str = "text/plain";

/// dragstart handler for a draggable row.
///
/// `on_start` returns false to refuse the drag; the browser drag is then
/// cancelled.
pub fn make_on_dragstart(key: String, on_start: Callback<String, bool>) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if !on_start.run(key.clone()) {
            ev.prevent_default();
            return;
        }
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data(DRAG_FORMAT, &key);
        }
    }
}

/// dragenter handler, reports which row the pointer entered
pub fn make_on_dragenter(key: String, on_enter: Callback<String>) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| on_enter.run(key.clone())
}

pub fn make_on_dragleave(on_leave: Callback<()>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| on_leave.run(())
}

/// dragover handler. Without `prevent_default` the row is not a drop target.
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    }
}

/// drop handler, reports the key of the row dropped on
pub fn make_on_drop(key: String, on_drop: Callback<String>) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        on_drop.run(key.clone());
    }
}

/// dragend handler; fires after drop, or alone when the drag was abandoned
pub fn make_on_dragend(on_end: Callback<()>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| on_end.run(())
}

/// First file of a drop coming from outside the page
pub fn first_dropped_file(ev: &DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()?.files()?.get(0)
}

/// dragover/dragenter/dragleave/drop handlers for a file drop area.
///
/// `set_active` follows whether a file is hovering; `on_file` gets the
/// first dropped file.
#[derive(Clone, Copy)]
pub struct FileDropHandlers {
    set_active: Callback<bool>,
    on_file: Callback<web_sys::File>,
}

impl FileDropHandlers {
    pub fn new(set_active: Callback<bool>, on_file: Callback<web_sys::File>) -> Self {
        Self { set_active, on_file }
    }

    pub fn on_dragover(self) -> impl Fn(DragEvent) + Copy + 'static {
        move |ev: DragEvent| {
            ev.prevent_default();
            self.set_active.run(true);
        }
    }

    pub fn on_dragleave(self) -> impl Fn(DragEvent) + Copy + 'static {
        move |_ev: DragEvent| self.set_active.run(false)
    }

    pub fn on_drop(self) -> impl Fn(DragEvent) + Copy + 'static {
        move |ev: DragEvent| {
            ev.prevent_default();
            self.set_active.run(false);
            if let Some(file) = first_dropped_file(&ev) {
                self.on_file.run(file);
            }
        }
    }
}
