//! Toast Notifications
//!
//! `Notifier` implementation for the page. Toasts stack at the bottom
//! right and dismiss themselves after a few seconds.

use catalog_core::{Notification, Notifier};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_DURATION_MS: u32 = 4_000;
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { list: RwSignal::new(Vec::new()), next_id: StoredValue::new(0) }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.list.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|list| list.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.list.update(|list| {
            list.push(Toast { id, notification });
            if list.len() > MAX_TOASTS {
                list.remove(0);
            }
        });

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.dismiss(id);
        });
    }
}
