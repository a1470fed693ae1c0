//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Error banner shown above the map when the station load failed.
///
/// A load failure is terminal for the session: the banner stays up and the
/// map remains unpopulated (tiles and legend still render).
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #FDECEA; color: #B71C1C; border-left: 4px solid #D32F2F; border-radius: 2px; font-size: 13px;",
            strong { "Could not load station data. " }
            "{props.message}"
        }
    }
}
