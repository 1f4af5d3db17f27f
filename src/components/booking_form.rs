//! Booking Form Component
//!
//! Guest details, party size and menu selection for a new reservation.

use chrono::Local;
use leptos::prelude::*;

use crate::board::{Action, BoardStateStoreFields, ReservationFormStoreFields};
use crate::components::MenuSelection;
use crate::context::use_board_context;

/// Form for booking a new reservation
#[component]
pub fn BookingForm() -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;
    let form = store.form();

    let book = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::Submit { checked_in_at: Local::now().time() });
    };

    view! {
        <div class="reservation-form">
            <h2>"Make a Reservation"</h2>
            <form on:submit=book>
                <input
                    type="text"
                    placeholder="Customer Name"
                    required
                    prop:value=move || form.name().get()
                    on:input=move |ev| ctx.dispatch(Action::SetName(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Phone Number"
                    required
                    prop:value=move || form.phone().get()
                    on:input=move |ev| ctx.dispatch(Action::SetPhone(event_target_value(&ev)))
                />
                <input
                    type="number"
                    placeholder="Guest Count"
                    min="1"
                    max=move || store.seats_left().get().to_string()
                    required
                    prop:value=move || form.guest_count().get().to_string()
                    on:input=move |ev| {
                        // Half-typed or empty input keeps the last valid count
                        if let Ok(count) = event_target_value(&ev).trim().parse::<u32>() {
                            ctx.dispatch(Action::SetGuestCount(count));
                        }
                    }
                />
                <div class="seats-left">
                    <strong>"Seats Left: " {move || store.seats_left().get()}</strong>
                </div>

                <MenuSelection />

                <button type="submit">"Book Reservation"</button>
            </form>

            <Show when=move || store.error().get().is_some()>
                <div class="error">{move || store.read().error_message()}</div>
            </Show>
        </div>
    }
}
