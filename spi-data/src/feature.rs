//! Typed station feature model parsed from the drought GeoJSON.
//!
//! The raw payload is a GeoJSON `FeatureCollection` of Point features whose
//! properties arrive with loose typing (numbers as strings, fields absent).
//! Everything is normalized once at parse time: numeric fields become
//! `Option<f64>`, string fields are trimmed with blanks collapsed to `None`.
//! Display code then works with explicit optionals instead of re-checking
//! raw JSON shapes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Errors that can occur when fetching or parsing the station data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The fetch completed with a non-success HTTP status.
    Http { status: u16, url: String },
    /// The fetch itself failed (network error, no window, non-text body).
    Fetch(String),
    /// The payload was not a valid station FeatureCollection.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Http { status, url } => write!(f, "HTTP {} for {}", status, url),
            LoadError::Fetch(msg) => write!(f, "fetch failed: {}", msg),
            LoadError::Parse(msg) => write!(f, "invalid station GeoJSON: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Per-station observation properties, normalized at parse time.
///
/// Any field may be absent or malformed in the source data; consumers use
/// the formatting helpers to fall back to sentinel strings per field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StationProperties {
    /// Region name the station reports for.
    #[serde(default, deserialize_with = "de_opt_string")]
    pub region: Option<String>,
    /// Observation period label, e.g. "2020-01". Opaque, lexicographically
    /// sortable; no format is enforced.
    #[serde(default, deserialize_with = "de_opt_string")]
    pub month_year: Option<String>,
    /// Standardized Precipitation Index value.
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub spi: Option<f64>,
    /// Relative humidity, percent.
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub rh: Option<f64>,
    /// Air temperature, degrees Celsius.
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub temperature: Option<f64>,
    /// Dewpoint temperature, degrees Celsius.
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub dewpoint: Option<f64>,
}

/// A single station observation placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct StationFeature {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    pub properties: StationProperties,
}

/// The full set of station features for the session, loaded exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationCollection {
    features: Vec<StationFeature>,
}

impl StationCollection {
    /// Parse a GeoJSON FeatureCollection string into typed station features.
    ///
    /// Features without a usable Point geometry are dropped with a warning;
    /// they cannot be placed on the map. Property normalization never fails,
    /// so a malformed properties bag yields a station of all-`None` fields
    /// rather than an error.
    pub fn from_geojson_str(body: &str) -> Result<StationCollection, LoadError> {
        let raw: RawFeatureCollection =
            serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
        if raw.kind != "FeatureCollection" {
            return Err(LoadError::Parse(format!(
                "expected a FeatureCollection, got \"{}\"",
                raw.kind
            )));
        }

        let total = raw.features.len();
        let features: Vec<StationFeature> = raw
            .features
            .into_iter()
            .filter_map(|f| {
                let (lon, lat) = f.geometry.as_ref().and_then(point_coords)?;
                Some(StationFeature {
                    lat,
                    lon,
                    properties: f.properties,
                })
            })
            .collect();

        if features.len() < total {
            log::warn!(
                "dropped {} of {} features without Point geometry",
                total - features.len(),
                total
            );
        }

        Ok(StationCollection { features })
    }

    pub fn features(&self) -> &[StationFeature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<StationFeature> {
        self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: StationProperties,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Extract `(lon, lat)` from a GeoJSON Point geometry, tolerating a trailing
/// altitude element. Returns `None` for any other geometry type or shape.
fn point_coords(geometry: &RawGeometry) -> Option<(f64, f64)> {
    if geometry.kind != "Point" {
        return None;
    }
    let coords = geometry.coordinates.as_array()?;
    let lon = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    Some((lon, lat))
}

/// Accept a JSON number or numeric string; anything else becomes `None`.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Accept a JSON string or number, trimmed; blank strings become `None`.
fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
