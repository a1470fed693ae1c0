//! SPI Drought Station Map
//!
//! Displays Standardized Precipitation Index station observations on an
//! interactive Leaflet map, filterable by a single Month/Year period.
//! Each station is a circle marker colored by its drought severity bin,
//! with a popup (region, period, SPI + classification, humidity,
//! temperature, dewpoint) and a region tooltip.
//!
//! Data flow:
//! 1. On mount, `data/qatar.geojson` is fetched once (served alongside the
//!    WASM bundle) and parsed into typed station features.
//! 2. The distinct Month/Year values populate the period selector; the
//!    legend and map tiles are set up independently of load success.
//! 3. Every selector change (or reset) rebuilds the marker layer wholesale
//!    from the filtered subset and refits the viewport. An empty subset
//!    keeps the current view.

use spi_data::classify;
use spi_data::feature::{StationCollection, StationFeature};
use spi_data::filter;
use spi_data::marker;
use spi_map_ui::components::{
    ErrorDisplay, LoadingSpinner, MapContainer, MapHeader, PeriodSelector, ResetButton,
};
use spi_map_ui::js_bridge;
use spi_map_ui::state::AppState;

use dioxus::prelude::*;

/// Station observations served next to the WASM bundle.
const STATIONS_GEOJSON_URL: &str = "data/qatar.geojson";

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "spi-station-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("spi-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Map tiles and legend are independent of load success: a failed fetch
    // leaves an empty map with a legend, not a blank page.
    use_effect(move || {
        js_bridge::init_map(MAP_ID);
        let legend_json =
            serde_json::to_string(&classify::LEGEND_ENTRIES).unwrap_or_default();
        js_bridge::add_legend(&legend_json);
    });

    // One-shot data load on mount; a failure here is terminal for the session.
    use_effect(move || {
        spawn(async move {
            match load_stations().await {
                Ok(collection) => {
                    state.periods.set(filter::period_options(collection.features()));
                    state.stations.set(collection.into_features());
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("GeoJSON load error: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                    state.loading.set(false);
                }
            }
        });
    });

    // Rebuild the marker layer whenever the period selection changes
    use_effect(move || {
        let period = (state.selected_period)();

        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        render_stations(&state.stations.read(), &period);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapHeader {
                title: "SPI Drought Station Map".to_string(),
                description: "Standardized Precipitation Index (SPI) - negative values indicate drier than normal conditions, positive values wetter".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    PeriodSelector {}
                    ResetButton {}
                }
            }

            // The map container always renders so the tile layer and legend
            // exist even when the data load failed.
            MapContainer {
                id: MAP_ID.to_string(),
            }
        }
    }
}

/// Fetch and parse the station GeoJSON. Exactly one load per session.
async fn load_stations() -> anyhow::Result<StationCollection> {
    let body = js_bridge::fetch_text(STATIONS_GEOJSON_URL).await?;
    let collection = StationCollection::from_geojson_str(&body)?;
    log::info!("loaded {} station features", collection.len());
    Ok(collection)
}

/// Filter stations by period and hand the marker layer to the Leaflet glue.
fn render_stations(stations: &[StationFeature], period: &str) {
    let filtered = filter::filter_by_period(stations, period);
    let markers = marker::markers_for(&filtered);
    let markers_json = serde_json::to_string(&markers).unwrap_or_default();

    match marker::bounds_of(&filtered) {
        Some(bounds) => {
            let bounds_json = serde_json::to_string(&bounds).unwrap_or_default();
            js_bridge::render_stations(&markers_json, Some(&bounds_json));
        }
        None => {
            // Empty subset: no valid bounds, keep the current viewport.
            log::debug!("no stations match period {:?}; keeping viewport", period);
            js_bridge::render_stations(&markers_json, None);
        }
    }
}
