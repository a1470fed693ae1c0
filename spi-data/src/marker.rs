//! Marker specs and viewport bounds for the Leaflet bridge.
//!
//! Each filtered station becomes one serializable [`MarkerSpec`]; the bridge
//! hands the JSON to the Leaflet glue, which rebuilds the layer wholesale on
//! every render. Field names serialize in camelCase so they line up with
//! Leaflet's circle marker options.

use crate::classify::classify;
use crate::feature::StationFeature;
use crate::format::popup_html;
use serde::Serialize;

/// Fixed circle marker style; only the fill color varies per station.
pub const MARKER_RADIUS: u32 = 6;
pub const MARKER_STROKE: &str = "#111827";
pub const MARKER_WEIGHT: u32 = 1;
pub const MARKER_FILL_OPACITY: f64 = 0.9;

/// Everything the Leaflet glue needs to draw one station marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
    pub color: &'static str,
    pub weight: u32,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub popup_html: String,
    pub tooltip: String,
}

impl MarkerSpec {
    pub fn from_feature(feature: &StationFeature) -> MarkerSpec {
        let class = classify(feature.properties.spi);
        MarkerSpec {
            lat: feature.lat,
            lng: feature.lon,
            radius: MARKER_RADIUS,
            color: MARKER_STROKE,
            weight: MARKER_WEIGHT,
            fill_color: class.color,
            fill_opacity: MARKER_FILL_OPACITY,
            popup_html: popup_html(&feature.properties),
            tooltip: feature
                .properties
                .region
                .clone()
                .unwrap_or_else(|| "Region".to_string()),
        }
    }
}

/// Build marker specs for a filtered station subset, preserving order.
pub fn markers_for(features: &[&StationFeature]) -> Vec<MarkerSpec> {
    features.iter().map(|f| MarkerSpec::from_feature(f)).collect()
}

/// A lat/lon bounding box for the viewport fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Compute the bounding box of a station subset.
///
/// Returns `None` for the empty subset: there is no valid viewport fit, and
/// the caller keeps the current view instead.
pub fn bounds_of(features: &[&StationFeature]) -> Option<MapBounds> {
    let first = features.first()?;
    let mut bounds = MapBounds {
        south: first.lat,
        west: first.lon,
        north: first.lat,
        east: first.lon,
    };
    for f in &features[1..] {
        bounds.south = bounds.south.min(f.lat);
        bounds.west = bounds.west.min(f.lon);
        bounds.north = bounds.north.max(f.lat);
        bounds.east = bounds.east.max(f.lon);
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::StationProperties;

    fn station(lat: f64, lon: f64, spi: Option<f64>) -> StationFeature {
        StationFeature {
            lat,
            lon,
            properties: StationProperties {
                region: Some("Doha".to_string()),
                month_year: Some("2020-01".to_string()),
                spi,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_marker_style_and_fill() {
        let f = station(25.3, 51.2, Some(-2.5));
        let marker = MarkerSpec::from_feature(&f);
        assert_eq!(marker.radius, 6);
        assert_eq!(marker.color, "#111827");
        assert_eq!(marker.weight, 1);
        assert!((marker.fill_opacity - 0.9).abs() < f64::EPSILON);
        assert_eq!(marker.fill_color, "#7f1d1d");
        assert_eq!(marker.tooltip, "Doha");
        assert!(marker.popup_html.contains("Extremely Dry"));
    }

    #[test]
    fn test_tooltip_fallback() {
        let mut f = station(25.3, 51.2, None);
        f.properties.region = None;
        let marker = MarkerSpec::from_feature(&f);
        assert_eq!(marker.tooltip, "Region");
        assert_eq!(marker.fill_color, "#9ca3af");
    }

    #[test]
    fn test_marker_json_is_camel_case() {
        let f = station(25.3, 51.2, Some(0.0));
        let json = serde_json::to_string(&MarkerSpec::from_feature(&f)).unwrap();
        assert!(json.contains("\"fillColor\""));
        assert!(json.contains("\"fillOpacity\""));
        assert!(json.contains("\"popupHtml\""));
        assert!(json.contains("\"lng\":51.2"));
    }

    #[test]
    fn test_bounds_of_empty_is_none() {
        assert_eq!(bounds_of(&[]), None);
    }

    #[test]
    fn test_bounds_of_single_station() {
        let f = station(25.3, 51.2, None);
        let bounds = bounds_of(&[&f]).unwrap();
        assert_eq!(bounds.south, bounds.north);
        assert_eq!(bounds.west, bounds.east);
        assert!((bounds.south - 25.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_of_spread() {
        let a = station(24.5, 50.8, None);
        let b = station(26.1, 51.6, None);
        let c = station(25.3, 51.2, None);
        let bounds = bounds_of(&[&a, &b, &c]).unwrap();
        assert!((bounds.south - 24.5).abs() < f64::EPSILON);
        assert!((bounds.north - 26.1).abs() < f64::EPSILON);
        assert!((bounds.west - 50.8).abs() < f64::EPSILON);
        assert!((bounds.east - 51.6).abs() < f64::EPSILON);
    }
}
