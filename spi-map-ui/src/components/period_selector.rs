//! Dropdown selector for the Month/Year period filter.

use crate::state::AppState;
use dioxus::prelude::*;

/// Month/Year dropdown selector.
/// Reads available periods from AppState and updates selected_period on change.
/// The first option is always "All" (empty value, no filtering).
#[component]
pub fn PeriodSelector() -> Element {
    let mut state = use_context::<AppState>();
    let periods = state.periods.read().clone();
    let selected = (state.selected_period)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_period.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "period-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Month/Year: "
            }
            select {
                id: "period-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All"
                }
                for period in periods.iter() {
                    option {
                        value: "{period}",
                        selected: *period == selected,
                        "{period}"
                    }
                }
            }
        }
    }
}
