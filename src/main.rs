//! Catalog Studio Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod context;
mod logging;
mod storage;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger();
    mount_to_body(App);
}
