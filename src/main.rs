//! Reservation Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let logging = board_logger::init(board_logger::DEFAULT_CAPACITY, &config.log_level)
        .or_else(|_| board_logger::init(board_logger::DEFAULT_CAPACITY, "info"));
    let logs = match logging {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&format!("[BOARD] logging disabled: {}", e).into());
            None
        }
    };
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "ignoring #{} block, using defaults", config::CONFIG_ELEMENT_ID);
    }

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
