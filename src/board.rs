//! Reservation Board State
//!
//! All board mutations are tagged [`Action`]s applied by a single
//! state-transition function. Components only dispatch actions.

use chrono::NaiveTime;
use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::error::BookingError;
use crate::models::{format_check_in, Reservation};

/// Transient booking form fields
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub guest_count: u32,
    /// Ticked menu item names, in tick order
    pub selected_menu_items: Vec<String>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            guest_count: 1,
            selected_menu_items: Vec::new(),
        }
    }
}

impl ReservationForm {
    fn toggle(&mut self, item: String, selected: bool) {
        if selected {
            if !self.selected_menu_items.contains(&item) {
                self.selected_menu_items.push(item);
            }
        } else {
            self.selected_menu_items.retain(|name| *name != item);
        }
    }
}

/// Everything the board can be asked to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetName(String),
    SetPhone(String),
    /// Values below 1 are raised to 1
    SetGuestCount(u32),
    ToggleMenuItem { item: String, selected: bool },
    /// Commit the form; `checked_in_at` is the wall-clock time of the click
    Submit { checked_in_at: NaiveTime },
    Checkout(usize),
    Delete(usize),
}

/// Complete board state
///
/// Invariant: `seats_left + Σ guest_count == capacity`.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct BoardState {
    pub capacity: u32,
    pub seats_left: u32,
    pub reservations: Vec<Reservation>,
    pub form: ReservationForm,
    pub error: Option<BookingError>,
}

impl BoardState {
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            seats_left: capacity,
            reservations: Vec::new(),
            form: ReservationForm::default(),
            error: None,
        }
    }

    /// Pure transition: `(state, action) -> state`
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// In-place transition used by the store
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetName(name) => self.form.name = name,
            Action::SetPhone(phone) => self.form.phone = phone,
            Action::SetGuestCount(count) => self.form.guest_count = count.max(1),
            Action::ToggleMenuItem { item, selected } => {
                tracing::debug!(%item, selected, "menu selection changed");
                self.form.toggle(item, selected);
            }
            Action::Submit { checked_in_at } => match self.submit(checked_in_at) {
                Ok(()) => self.error = None,
                Err(e) => {
                    tracing::warn!(name = %self.form.name, guests = self.form.guest_count, seats_left = self.seats_left, "booking rejected: {}", e);
                    self.error = Some(e);
                }
            },
            Action::Checkout(index) => self.checkout(index),
            Action::Delete(index) => self.delete(index),
        }
        debug_assert_eq!(self.seats_left + self.reserved_seats(), self.capacity);
    }

    /// Check the form against current bookings without changing anything
    pub fn validate_form(&self) -> Result<(), BookingError> {
        if self.reservations.iter().any(|r| r.name == self.form.name) {
            return Err(BookingError::DuplicateReservation);
        }
        if self.form.guest_count > self.seats_left {
            return Err(BookingError::InsufficientSeats);
        }
        Ok(())
    }

    fn submit(&mut self, checked_in_at: NaiveTime) -> Result<(), BookingError> {
        self.validate_form()?;

        let form = std::mem::take(&mut self.form);
        let reservation = Reservation {
            name: form.name,
            phone: form.phone,
            guest_count: form.guest_count,
            selected_menu_items: form.selected_menu_items,
            check_in_time: format_check_in(checked_in_at),
            checked_out: false,
        };
        self.seats_left -= reservation.guest_count;
        tracing::info!(name = %reservation.name, guests = reservation.guest_count, seats_left = self.seats_left, "reservation booked");
        self.reservations.push(reservation);
        Ok(())
    }

    /// Mark as checked out; seats stay taken until the row is deleted
    fn checkout(&mut self, index: usize) {
        match self.reservations.get_mut(index) {
            Some(reservation) if !reservation.checked_out => {
                reservation.checked_out = true;
                tracing::info!(name = %reservation.name, "reservation checked out");
            }
            Some(_) => {}
            None => tracing::warn!(index, "checkout ignored: no such reservation"),
        }
    }

    fn delete(&mut self, index: usize) {
        if index >= self.reservations.len() {
            tracing::warn!(index, "delete ignored: no such reservation");
            return;
        }
        let reservation = self.reservations.remove(index);
        self.seats_left += reservation.guest_count;
        tracing::info!(name = %reservation.name, seats_left = self.seats_left, "reservation deleted");
    }

    /// Seats held by current reservations, checked out or not
    pub fn reserved_seats(&self) -> u32 {
        self.reservations.iter().map(|r| r.guest_count).sum()
    }

    /// Banner text; empty when there is no error
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}
