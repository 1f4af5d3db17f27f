//! UI Components
//!
//! Leptos components for the booking form and reservation table.

mod booking_form;
mod menu_selection;
mod reservation_table;
mod reservation_row;
mod activity_log;

pub use booking_form::BookingForm;
pub use menu_selection::MenuSelection;
pub use reservation_table::ReservationTable;
pub use reservation_row::ReservationRow;
pub use activity_log::ActivityLog;
