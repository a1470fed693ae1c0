//! Display formatting for station popups.

use crate::classify::classify;
use crate::feature::StationProperties;

/// Sentinel shown for missing or non-numeric values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a value to fixed precision, or [`NOT_AVAILABLE`] when missing.
pub fn fmt_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.*}", decimals, v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Build the popup HTML for one station observation.
///
/// Every field falls back independently: a missing region, period, or
/// reading never suppresses the rest of the popup.
pub fn popup_html(p: &StationProperties) -> String {
    let region = p.region.as_deref().unwrap_or("Unknown");
    let month_year = p.month_year.as_deref().unwrap_or(NOT_AVAILABLE);
    let class = classify(p.spi);

    format!(
        "<div style=\"font-size:13px;line-height:1.4\">\
         <strong>{region}</strong><br/>\
         <b>Month/Year:</b> {month_year}<br/>\
         <b>SPI:</b> {spi} <span style=\"color:{color};font-weight:600\">({label})</span><br/>\
         <b>Humidity (RH):</b> {rh}%<br/>\
         <b>Temperature:</b> {temperature} &deg;C &nbsp; \
         <b>Dewpoint:</b> {dewpoint} &deg;C\
         </div>",
        region = region,
        month_year = month_year,
        spi = fmt_value(p.spi, 2),
        color = class.color,
        label = class.label,
        rh = fmt_value(p.rh, 1),
        temperature = fmt_value(p.temperature, 1),
        dewpoint = fmt_value(p.dewpoint, 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(Some(3.14159), 2), "3.14");
        assert_eq!(fmt_value(Some(-1.0), 1), "-1.0");
        assert_eq!(fmt_value(Some(2.0), 0), "2");
        assert_eq!(fmt_value(None, 1), "N/A");
        assert_eq!(fmt_value(Some(f64::NAN), 1), "N/A");
    }

    #[test]
    fn test_popup_full() {
        let props = StationProperties {
            region: Some("Doha".to_string()),
            month_year: Some("2020-01".to_string()),
            spi: Some(-1.25),
            rh: Some(61.54),
            temperature: Some(22.4),
            dewpoint: Some(14.02),
        };
        let html = popup_html(&props);
        assert!(html.contains("<strong>Doha</strong>"));
        assert!(html.contains("<b>Month/Year:</b> 2020-01"));
        assert!(html.contains("-1.25"));
        assert!(html.contains("Moderately Dry"));
        assert!(html.contains("#ef4444"));
        assert!(html.contains("61.5%"));
        assert!(html.contains("22.4 &deg;C"));
        assert!(html.contains("14.0 &deg;C"));
    }

    #[test]
    fn test_popup_fields_degrade_independently() {
        let props = StationProperties {
            region: None,
            month_year: None,
            spi: None,
            rh: Some(55.0),
            temperature: None,
            dewpoint: None,
        };
        let html = popup_html(&props);
        assert!(html.contains("<strong>Unknown</strong>"));
        assert!(html.contains("<b>Month/Year:</b> N/A"));
        assert!(html.contains("No Data"));
        assert!(html.contains("#9ca3af"));
        // The one present field still renders
        assert!(html.contains("55.0%"));
    }
}
