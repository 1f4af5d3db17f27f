//! Reservation Table Component
//!
//! Lists committed reservations in booking order.

use leptos::prelude::*;

use crate::board::BoardStateStoreFields;
use crate::components::ReservationRow;
use crate::context::use_board_context;

#[component]
pub fn ReservationTable() -> impl IntoView {
    let ctx = use_board_context();
    let rows = move || {
        ctx.store
            .reservations()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="reservations-table">
            <h2>"Reservations"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Check-in Time"</th>
                        <th>"Selected Menu Items"</th>
                        <th>"Checkout"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        // Index is part of the key: rows after a deleted one must re-bind
                        key=|(index, reservation)| (*index, reservation.name.clone(), reservation.checked_out)
                        children=move |(index, reservation)| {
                            view! { <ReservationRow index=index reservation=reservation /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
