//! Reset button clearing the period filter back to "All".

use crate::state::AppState;
use dioxus::prelude::*;

/// Clears the period selection; the render effect reacts to the signal change.
#[component]
pub fn ResetButton() -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_| {
        state.selected_period.set(String::new());
    };

    rsx! {
        button {
            style: "margin: 8px 0; padding: 4px 12px; cursor: pointer;",
            onclick: on_click,
            "Reset"
        }
    }
}
