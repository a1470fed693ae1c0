//! Loading indicator component.

use dioxus::prelude::*;

/// Shown in place of the filter controls while the GeoJSON fetch resolves.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 12px 0; color: #666; font-size: 13px; font-style: italic;",
            "Loading station observations\u{2026}"
        }
    }
}
