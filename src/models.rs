//! Board Models
//!
//! Menu catalog entries and committed reservations.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A dish on the fixed menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Checkbox label, e.g. `Pasta - ₹300`
    pub fn label(&self, currency_symbol: &str) -> String {
        format!("{} - {}{}", self.name, currency_symbol, self.price)
    }
}

/// The catalog seeded at startup
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Pasta", 300),
        MenuItem::new("Burger", 150),
        MenuItem::new("Pizza", 500),
        MenuItem::new("Salad", 120),
        MenuItem::new("Ice Cream", 80),
    ]
}

/// Service state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Booked,
    CheckedOut,
}

/// A committed booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub phone: String,
    pub guest_count: u32,
    /// Menu item names in the order they were ticked
    pub selected_menu_items: Vec<String>,
    /// Captured once at booking, never recomputed
    pub check_in_time: String,
    pub checked_out: bool,
}

impl Reservation {
    pub fn status(&self) -> ReservationStatus {
        if self.checked_out {
            ReservationStatus::CheckedOut
        } else {
            ReservationStatus::Booked
        }
    }

    /// Selected items as shown in the table
    pub fn menu_summary(&self) -> String {
        self.selected_menu_items.join(", ")
    }
}

/// Format a wall-clock time the way an en-US locale time string reads
pub fn format_check_in(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reservation(items: &[&str]) -> Reservation {
        Reservation {
            name: "Alice".to_string(),
            phone: "555-0100".to_string(),
            guest_count: 2,
            selected_menu_items: items.iter().map(|s| s.to_string()).collect(),
            check_in_time: "7:30:00 PM".to_string(),
            checked_out: false,
        }
    }

    #[test]
    fn test_default_menu() {
        let menu = default_menu();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0], MenuItem::new("Pasta", 300));
        assert_eq!(menu[4], MenuItem::new("Ice Cream", 80));
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(MenuItem::new("Pizza", 500).label("₹"), "Pizza - ₹500");
    }

    #[test]
    fn test_menu_summary() {
        assert_eq!(make_reservation(&[]).menu_summary(), "");
        assert_eq!(make_reservation(&["Pizza", "Salad"]).menu_summary(), "Pizza, Salad");
    }

    #[test]
    fn test_status() {
        let mut reservation = make_reservation(&[]);
        assert_eq!(reservation.status(), ReservationStatus::Booked);
        reservation.checked_out = true;
        assert_eq!(reservation.status(), ReservationStatus::CheckedOut);
    }

    #[test]
    fn test_format_check_in() {
        let afternoon = NaiveTime::from_hms_opt(15, 4, 5).unwrap();
        assert_eq!(format_check_in(afternoon), "3:04:05 PM");
        let midnight = NaiveTime::from_hms_opt(0, 0, 9).unwrap();
        assert_eq!(format_check_in(midnight), "12:00:09 AM");
    }
}
