//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/spi-map.js` and is evaluated as
//! globals (no ES modules), exposed via `window.*`. Leaflet itself is loaded
//! from a script tag, so every wrapper polls for readiness before calling
//! into the glue. This module also provides the one-shot GeoJSON fetch.

use spi_data::feature::LoadError;
use spi_data::js::js_string_literal;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

// Embed the Leaflet glue at compile time
static SPI_MAP_JS: &str = include_str!("../assets/js/spi-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SPI map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map with a wait-for-Leaflet polling loop.
///
/// The glue defines `initSpiMap(...)` and friends via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), we evaluate them at
/// global scope via indirect `eval()` once Leaflet and the container DOM
/// element are ready, promote each function to `window.*`, then create the
/// map and set the ready flag other wrappers poll on.
pub fn init_map(container_id: &str) {
    log::debug!("initializing Leaflet map in #{}", container_id);
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__spiMapScript = {};",
        js_string_literal(SPI_MAP_JS)
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' &&
                    document.getElementById('{container_id}') &&
                    window.__spiMapScript) {{
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__spiMapScript);
                    delete window.__spiMapScript;
                    // Promote function declarations to window explicitly
                    if (typeof initSpiMap !== 'undefined') window.initSpiMap = initSpiMap;
                    if (typeof renderStationMarkers !== 'undefined') window.renderStationMarkers = renderStationMarkers;
                    if (typeof addSpiLegend !== 'undefined') window.addSpiLegend = addSpiLegend;
                    window.initSpiMap('{container_id}');
                    window.__spiMapReady = true;
                    console.log('SPI map initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the station marker layer and optionally fit the viewport.
///
/// `bounds_json` is `None` for an empty subset; the glue then leaves the
/// current view untouched. Polls the ready flag set by [`init_map`].
///
/// Payloads are embedded as JSON-encoded string literals: marker JSON
/// always carries `\"` escapes from the popup HTML, which single-quote
/// wrapping would strip at evaluation time and break the glue's
/// `JSON.parse`.
pub fn render_stations(markers_json: &str, bounds_json: Option<&str>) {
    let markers_literal = js_string_literal(markers_json);
    let bounds_literal = match bounds_json {
        Some(b) => js_string_literal(b),
        None => "null".to_string(),
    };
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spiMapReady &&
                    typeof window.renderStationMarkers !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.renderStationMarkers({markers_literal}, {bounds_literal});
                    }} catch(e) {{ console.error('[SPI] renderStationMarkers error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Add the static legend control. Call once after [`init_map`].
pub fn add_legend(entries_json: &str) {
    let entries_literal = js_string_literal(entries_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spiMapReady &&
                    typeof window.addSpiLegend !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.addSpiLegend({entries_literal});
                    }} catch(e) {{ console.error('[SPI] addSpiLegend error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Fetch a text resource served alongside the WASM bundle.
///
/// One-shot, no retry. A non-success status maps to [`LoadError::Http`];
/// transport failures map to [`LoadError::Fetch`].
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Fetch("no window object".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Fetch(js_error_string(&e)))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text_promise = response
        .text()
        .map_err(|e| LoadError::Fetch(js_error_string(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| LoadError::Fetch(js_error_string(&e)))?;
    text.as_string()
        .ok_or_else(|| LoadError::Fetch("response body was not text".to_string()))
}

fn js_error_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
