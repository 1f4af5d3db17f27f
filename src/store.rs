//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Action, BoardState};
use crate::config::BoardConfig;

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

pub fn new_board_store(config: &BoardConfig) -> BoardStore {
    Store::new(BoardState::new(config))
}

/// Run one action through the reducer
pub fn store_dispatch(store: &BoardStore, action: Action) {
    store.update(|state| state.apply(action));
}
