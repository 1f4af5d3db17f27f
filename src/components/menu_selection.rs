//! Menu Selection Component

use leptos::prelude::*;

use crate::board::{Action, BoardStateStoreFields, ReservationFormStoreFields};
use crate::context::use_board_context;

/// One checkbox per menu item, bound to the form's selection
#[component]
pub fn MenuSelection() -> impl IntoView {
    let ctx = use_board_context();
    let selected = ctx.store.form().selected_menu_items();
    let currency = ctx.currency_symbol();

    view! {
        <div class="menu-selection">
            <h3>"Select Menu Items"</h3>
            {ctx.menu().into_iter().map(|item| {
                let label = item.label(&currency);
                let name = item.name.clone();
                let checked_name = item.name.clone();
                let is_checked = move || selected.with(|items| items.contains(&checked_name));
                view! {
                    <div class="menu-item">
                        <input
                            type="checkbox"
                            name=item.name
                            prop:checked=is_checked
                            on:change=move |ev| ctx.dispatch(Action::ToggleMenuItem {
                                item: name.clone(),
                                selected: event_target_checked(&ev),
                            })
                        />
                        <label>{label}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
