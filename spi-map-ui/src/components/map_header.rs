//! Page header component with title and data description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    /// Page title
    pub title: String,
    /// Short description of the displayed index
    #[props(default = String::new())]
    pub description: String,
}

/// Header for the map page showing title and optional index description.
#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
