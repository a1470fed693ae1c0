//! Core types and logic for the SPI drought station map.
//!
//! This crate is WASM-agnostic: it parses the station GeoJSON into typed
//! records, classifies SPI values into drought severity bins, formats popup
//! content, filters by Month/Year period, and computes marker specs and map
//! bounds for the Leaflet bridge to consume.

pub mod classify;
pub mod feature;
pub mod filter;
pub mod format;
pub mod js;
pub mod marker;
