//! Board Configuration
//!
//! Defaults can be overridden by an inline JSON block in the host page:
//! `<script id="board-config" type="application/json">{ "capacity": 30 }</script>`

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{default_menu, MenuItem};

/// Element id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "board-config";

pub const DEFAULT_CAPACITY: u32 = 20;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Total seats in the dining room
    pub capacity: u32,
    pub currency_symbol: String,
    pub menu: Vec<MenuItem>,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            currency_symbol: "₹".to_string(),
            menu: default_menu(),
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let mut seen = HashSet::new();
        for item in &self.menu {
            if item.name.trim().is_empty() {
                return Err(ConfigError::EmptyMenuItemName);
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateMenuItem(item.name.clone()));
            }
        }
        Ok(())
    }
}

/// Read the config block from the current document
///
/// A page without the block yields the defaults.
pub fn load() -> Result<BoardConfig, ConfigError> {
    match inline_config_text() {
        Some(json) => BoardConfig::from_json(&json),
        None => Ok(BoardConfig::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn inline_config_text() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn inline_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.capacity, 20);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.menu.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "capacity": 32 }"#).unwrap();
        assert_eq!(config.capacity, 32);
        assert_eq!(config.menu, default_menu());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_custom_menu() {
        let config = BoardConfig::from_json(
            r#"{ "menu": [{ "name": "Dosa", "price": 90 }], "currency_symbol": "$" }"#,
        )
        .unwrap();
        assert_eq!(config.menu, vec![MenuItem::new("Dosa", 90)]);
        assert_eq!(config.menu[0].label(&config.currency_symbol), "Dosa - $90");
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = BoardConfig::from_json(r#"{ "capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_rejects_duplicate_menu_item() {
        let err = BoardConfig::from_json(
            r#"{ "menu": [{ "name": "Tea", "price": 10 }, { "name": "Tea", "price": 20 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateMenuItem(ref name) if name == "Tea"));
    }

    #[test]
    fn test_rejects_blank_menu_item() {
        let err = BoardConfig::from_json(r#"{ "menu": [{ "name": " ", "price": 10 }] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMenuItemName));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = BoardConfig::from_json("{ capacity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_without_document_uses_defaults() {
        assert_eq!(load().unwrap(), BoardConfig::default());
    }
}
