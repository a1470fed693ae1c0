//! Shared Dioxus components and Leaflet bridge for the SPI drought map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`,
//!   plus the one-shot GeoJSON fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (period selector, map container, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
