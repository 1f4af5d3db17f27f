//! Reservation Row Component

use leptos::prelude::*;

use crate::board::Action;
use crate::context::use_board_context;
use crate::models::{Reservation, ReservationStatus};

/// A single reservation in the table
#[component]
pub fn ReservationRow(index: usize, reservation: Reservation) -> impl IntoView {
    let ctx = use_board_context();

    let summary = reservation.menu_summary();
    let row_class = match reservation.status() {
        ReservationStatus::Booked => "reservation-row",
        ReservationStatus::CheckedOut => "reservation-row checked-out",
    };
    let checkout = match reservation.status() {
        ReservationStatus::CheckedOut => view! { "Checked Out" }.into_any(),
        ReservationStatus::Booked => view! {
            <button class="checkout-btn" on:click=move |_| ctx.dispatch(Action::Checkout(index))>
                "Click to Checkout"
            </button>
        }.into_any(),
    };

    view! {
        <tr class=row_class>
            <td>{reservation.name}</td>
            <td>{reservation.phone}</td>
            <td>{reservation.check_in_time}</td>
            <td>{summary}</td>
            <td>{checkout}</td>
            <td>
                <button class="delete-btn" on:click=move |_| ctx.dispatch(Action::Delete(index))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
