//! Board Context
//!
//! Shared handles provided via Leptos Context API.

use board_logger::LogBuffer;
use leptos::prelude::*;

use crate::board::Action;
use crate::config::BoardConfig;
use crate::models::MenuItem;
use crate::store::{store_dispatch, BoardStore};

/// Store plus read-only settings, provided to all children
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
    menu: StoredValue<Vec<MenuItem>>,
    currency_symbol: StoredValue<String>,
    /// Ring of recent log lines; `None` when the logger failed to install
    logs: StoredValue<Option<LogBuffer>>,
}

impl BoardContext {
    pub fn new(store: BoardStore, config: &BoardConfig, logs: Option<LogBuffer>) -> Self {
        Self {
            store,
            menu: StoredValue::new(config.menu.clone()),
            currency_symbol: StoredValue::new(config.currency_symbol.clone()),
            logs: StoredValue::new(logs),
        }
    }

    pub fn dispatch(&self, action: Action) {
        store_dispatch(&self.store, action);
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        self.menu.get_value()
    }

    pub fn currency_symbol(&self) -> String {
        self.currency_symbol.get_value()
    }

    pub fn has_log(&self) -> bool {
        self.logs.with_value(Option::is_some)
    }

    /// Recent log lines, newest first
    pub fn recent_log_lines(&self) -> Vec<String> {
        self.logs.with_value(|logs| {
            logs.as_ref()
                .map(|buffer| buffer.snapshot().into_iter().rev().collect())
                .unwrap_or_default()
        })
    }

    pub fn clear_log(&self) {
        self.logs.with_value(|logs| {
            if let Some(buffer) = logs {
                buffer.clear();
            }
        });
    }
}

pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::new_board_store;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_recent_log_lines_newest_first() {
        let owner = Owner::new();
        owner.with(|| {
            let config = BoardConfig::default();
            let buffer = LogBuffer::new(3);
            let ctx = BoardContext::new(new_board_store(&config), &config, Some(buffer.clone()));

            buffer.push("booked Alice".to_string());
            buffer.push("booked Bob".to_string());
            assert!(ctx.has_log());
            assert_eq!(ctx.recent_log_lines(), vec!["booked Bob", "booked Alice"]);

            ctx.clear_log();
            assert!(ctx.recent_log_lines().is_empty());
            assert!(buffer.is_empty());
        });
    }

    #[test]
    fn test_without_logger() {
        let owner = Owner::new();
        owner.with(|| {
            let config = BoardConfig::default();
            let ctx = BoardContext::new(new_board_store(&config), &config, None);
            assert!(!ctx.has_log());
            assert!(ctx.recent_log_lines().is_empty());
            ctx.clear_log();
        });
    }
}
