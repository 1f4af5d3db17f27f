//! Activity Log Component
//!
//! Collapsible view of the logger's recent lines.

use leptos::prelude::*;

use crate::board::BoardStateStoreFields;
use crate::context::use_board_context;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_board_context();
    let (cleared, set_cleared) = signal(0u32);

    // The ring is not reactive; re-read it whenever the board or the clear counter changes
    let lines = move || {
        ctx.store.reservations().track();
        ctx.store.error().track();
        cleared.track();
        ctx.recent_log_lines()
    };

    view! {
        <Show when=move || ctx.has_log()>
            <details class="activity-log">
                <summary>"Activity Log"</summary>
                <button
                    type="button"
                    class="clear-log-btn"
                    on:click=move |_| {
                        ctx.clear_log();
                        set_cleared.update(|v| *v += 1);
                    }
                >
                    "Clear"
                </button>
                <ul>
                    {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </details>
        </Show>
    }
}
