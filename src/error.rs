//! Board Errors

use thiserror::Error;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Duplicate reservation detected!")]
    DuplicateReservation,

    #[error("Not enough seats available!")]
    InsufficientSeats,
}

/// Invalid host-page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seat capacity must be at least 1")]
    ZeroCapacity,

    #[error("Menu item name must not be empty")]
    EmptyMenuItemName,

    #[error("Duplicate menu item: {0}")]
    DuplicateMenuItem(String),
}
