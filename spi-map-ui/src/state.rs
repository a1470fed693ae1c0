//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use spi_data::feature::StationFeature;

/// Shared application state for the SPI station map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// All station features, written once after the load succeeds.
    pub stations: Signal<Vec<StationFeature>>,
    /// Distinct Month/Year values for the selector, sorted ascending.
    pub periods: Signal<Vec<String>>,
    /// Currently selected Month/Year period; empty string means "All".
    pub selected_period: Signal<String>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            stations: Signal::new(Vec::new()),
            periods: Signal::new(Vec::new()),
            selected_period: Signal::new(String::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
