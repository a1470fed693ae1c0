//! SPI value classification into drought severity bins.
//!
//! The Standardized Precipitation Index is binned into seven severity
//! categories. Bins are half-open intervals evaluated low-to-high; the first
//! matching rule wins, so every finite value lands in exactly one bin.

use serde::Serialize;

/// A severity bin: display label plus marker fill color. Legend rows reuse
/// this shape with range-bearing labels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct SpiClass {
    pub label: &'static str,
    pub color: &'static str,
}

/// Classification for missing or non-numeric SPI values.
pub const NO_DATA: SpiClass = SpiClass {
    label: "No Data",
    color: "#9ca3af",
};

/// Classify an SPI value into its severity bin.
///
/// `None` and `NaN` map to [`NO_DATA`]. Boundary values belong to the lower
/// bin on the dry side (`-1.0` is Moderately Dry) and to the upper bin on
/// the wet side (`1.0` is Moderately Wet).
pub fn classify(value: Option<f64>) -> SpiClass {
    let v = match value {
        Some(v) if !v.is_nan() => v,
        _ => return NO_DATA,
    };
    if v <= -2.0 {
        SpiClass { label: "Extremely Dry", color: "#7f1d1d" }
    } else if v <= -1.5 {
        SpiClass { label: "Severely Dry", color: "#b91c1c" }
    } else if v <= -1.0 {
        SpiClass { label: "Moderately Dry", color: "#ef4444" }
    } else if v < 1.0 {
        SpiClass { label: "Near Normal", color: "#fbbf24" }
    } else if v < 1.5 {
        SpiClass { label: "Moderately Wet", color: "#60a5fa" }
    } else if v < 2.0 {
        SpiClass { label: "Very Wet", color: "#2563eb" }
    } else {
        SpiClass { label: "Extremely Wet", color: "#1e3a8a" }
    }
}

/// Classify a raw string value (trimmed, parsed as f64).
pub fn classify_str(raw: &str) -> SpiClass {
    classify(raw.trim().parse::<f64>().ok())
}

/// The seven legend rows, in display order: the same [`SpiClass`] shape with
/// range-bearing labels. Colors match [`classify`] verbatim.
pub const LEGEND_ENTRIES: [SpiClass; 7] = [
    SpiClass { label: "Extremely Dry (\u{2264} -2.0)", color: "#7f1d1d" },
    SpiClass { label: "Severely Dry (-2.0 to -1.5)", color: "#b91c1c" },
    SpiClass { label: "Moderately Dry (-1.5 to -1.0)", color: "#ef4444" },
    SpiClass { label: "Near Normal (-1.0 to 1.0)", color: "#fbbf24" },
    SpiClass { label: "Moderately Wet (1.0 to 1.5)", color: "#60a5fa" },
    SpiClass { label: "Very Wet (1.5 to 2.0)", color: "#2563eb" },
    SpiClass { label: "Extremely Wet (\u{2265} 2.0)", color: "#1e3a8a" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(classify(Some(-2.0)).label, "Extremely Dry");
        assert_eq!(classify(Some(-1.9999)).label, "Severely Dry");
        assert_eq!(classify(Some(-1.5)).label, "Severely Dry");
        assert_eq!(classify(Some(-1.0)).label, "Moderately Dry");
        assert_eq!(classify(Some(-0.9999)).label, "Near Normal");
        assert_eq!(classify(Some(0.9999)).label, "Near Normal");
        assert_eq!(classify(Some(1.0)).label, "Moderately Wet");
        assert_eq!(classify(Some(1.5)).label, "Very Wet");
        assert_eq!(classify(Some(2.0)).label, "Extremely Wet");
        assert_eq!(classify(Some(3.7)).label, "Extremely Wet");
    }

    #[test]
    fn test_missing_and_nan_are_no_data() {
        assert_eq!(classify(None), NO_DATA);
        assert_eq!(classify(Some(f64::NAN)), NO_DATA);
        assert_eq!(classify(None).color, "#9ca3af");
    }

    #[test]
    fn test_classify_str() {
        assert_eq!(classify_str("-2.0").label, "Extremely Dry");
        assert_eq!(classify_str(" 0.5 ").label, "Near Normal");
        assert_eq!(classify_str("abc"), NO_DATA);
        assert_eq!(classify_str(""), NO_DATA);
    }

    #[test]
    fn test_every_value_lands_in_one_bin() {
        // Sweep a range of values; every classification must be one of the
        // seven legend colors (No Data is unreachable for finite input).
        let legend_colors: Vec<&str> = LEGEND_ENTRIES.iter().map(|e| e.color).collect();
        let mut v = -4.0;
        while v <= 4.0 {
            let class = classify(Some(v));
            assert!(
                legend_colors.contains(&class.color),
                "value {} classified outside the legend: {:?}",
                v,
                class
            );
            v += 0.01;
        }
    }

    #[test]
    fn test_legend_matches_classifier_colors() {
        assert_eq!(LEGEND_ENTRIES[0].color, classify(Some(-2.5)).color);
        assert_eq!(LEGEND_ENTRIES[1].color, classify(Some(-1.7)).color);
        assert_eq!(LEGEND_ENTRIES[2].color, classify(Some(-1.2)).color);
        assert_eq!(LEGEND_ENTRIES[3].color, classify(Some(0.0)).color);
        assert_eq!(LEGEND_ENTRIES[4].color, classify(Some(1.2)).color);
        assert_eq!(LEGEND_ENTRIES[5].color, classify(Some(1.7)).color);
        assert_eq!(LEGEND_ENTRIES[6].color, classify(Some(2.5)).color);
    }
}
