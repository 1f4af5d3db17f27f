//! Reservation Board App
//!
//! Root component: owns the board store and lays out form and table.

use board_logger::LogBuffer;
use leptos::prelude::*;

use crate::components::{ActivityLog, BookingForm, ReservationTable};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::new_board_store;

#[component]
pub fn App(config: BoardConfig, logs: Option<LogBuffer>) -> impl IntoView {
    // State lives for the lifetime of this mount
    let store = new_board_store(&config);
    provide_context(BoardContext::new(store, &config, logs));

    tracing::info!(capacity = config.capacity, menu_items = config.menu.len(), "reservation board mounted");

    view! {
        <div class="App">
            <h1>"Restaurant Reservation System"</h1>
            <BookingForm />
            <ReservationTable />
            <ActivityLog />
        </div>
    }
}
