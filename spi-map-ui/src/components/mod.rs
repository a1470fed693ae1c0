//! Reusable Dioxus RSX components for the SPI drought map.

mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;
mod period_selector;
mod reset_button;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
pub use period_selector::PeriodSelector;
pub use reset_button::ResetButton;
