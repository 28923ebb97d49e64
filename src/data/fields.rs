//! Static field descriptors and water-quality-index banding.
//!
//! The four tracked fields are fixed at compile time. Each descriptor carries
//! the display metadata the card, chart and table renderers share, including
//! the vertical axis range the field is plotted against.

/// Identifies one of the four tracked fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Ph,
    TemperatureC,
    TurbidityNtu,
    WqiPrediction,
}

impl FieldKind {
    /// All fields in display order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Ph,
        FieldKind::TemperatureC,
        FieldKind::TurbidityNtu,
        FieldKind::WqiPrediction,
    ];

    /// Stable index into per-field series arrays.
    pub fn index(self) -> usize {
        match self {
            FieldKind::Ph => 0,
            FieldKind::TemperatureC => 1,
            FieldKind::TurbidityNtu => 2,
            FieldKind::WqiPrediction => 3,
        }
    }
}

/// Vertical scale a field is plotted against.
///
/// The four quantities have incomparable magnitudes, so each gets its own
/// range rather than sharing one scale.
#[derive(Debug, Clone, Copy)]
pub enum AxisRange {
    /// Hard bounds.
    Fixed { min: f64, max: f64 },
    /// Lower bound with an upper bound that grows to fit observed data.
    SuggestedMax { min: f64, suggested_max: f64 },
}

impl AxisRange {
    /// Resolve to concrete bounds, widening a suggested maximum when the
    /// observed data exceeds it.
    pub fn resolve(&self, observed_max: Option<f64>) -> (f64, f64) {
        match *self {
            AxisRange::Fixed { min, max } => (min, max),
            AxisRange::SuggestedMax { min, suggested_max } => {
                let max = observed_max.map_or(suggested_max, |m| m.max(suggested_max));
                (min, max)
            }
        }
    }
}

/// Display metadata for one tracked field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Record field name in the source document.
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub tooltip: &'static str,
    /// Decimal places used in the history table.
    pub table_decimals: usize,
    /// Suffix appended to history table cells (empty for unitless fields).
    pub table_suffix: &'static str,
    pub axis: AxisRange,
}

/// The tracked fields, in card/table/series order.
pub const FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        kind: FieldKind::Ph,
        name: "ph",
        label: "pH",
        unit: "",
        tooltip: "Measures acidity of water. Ideal range: 6.5-8.5. Outside this range can harm aquatic life.",
        table_decimals: 2,
        table_suffix: "",
        axis: AxisRange::Fixed { min: 0.0, max: 14.0 },
    },
    FieldSpec {
        kind: FieldKind::TemperatureC,
        name: "temperature_c",
        label: "Temperature",
        unit: "°C",
        tooltip: "Affects oxygen levels. Normal range: 0-30°C. Sudden changes stress organisms.",
        table_decimals: 1,
        table_suffix: "°C",
        axis: AxisRange::Fixed { min: 0.0, max: 50.0 },
    },
    FieldSpec {
        kind: FieldKind::TurbidityNtu,
        name: "turbidity_ntu",
        label: "Turbidity",
        unit: "NTU",
        tooltip: "Cloudiness caused by suspended particles. Ideal: <5 NTU. High turbidity blocks sunlight.",
        table_decimals: 1,
        table_suffix: " NTU",
        axis: AxisRange::SuggestedMax { min: 0.0, suggested_max: 1000.0 },
    },
    FieldSpec {
        kind: FieldKind::WqiPrediction,
        name: "wqi_24h_prediction",
        label: "WQI 24h Prediction",
        unit: "",
        tooltip: "Water Quality Index (0-100). >75 = Good, 50-75 = Fair, <50 = Poor.",
        table_decimals: 2,
        table_suffix: "",
        axis: AxisRange::Fixed { min: 0.0, max: 100.0 },
    },
];

/// Water-quality-index status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WqiBand {
    Poor,
    Fair,
    Good,
}

impl WqiBand {
    /// Classify a WQI value. Boundary values belong to the higher band:
    /// 50 is Fair, 75 is Good.
    pub fn classify(value: f64) -> Self {
        if value < 50.0 {
            WqiBand::Poor
        } else if value < 75.0 {
            WqiBand::Fair
        } else {
            WqiBand::Good
        }
    }

    /// Returns the status label for display.
    pub fn label(&self) -> &'static str {
        match self {
            WqiBand::Poor => "Poor",
            WqiBand::Fair => "Fair",
            WqiBand::Good => "Good",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(WqiBand::classify(49.99), WqiBand::Poor);
        assert_eq!(WqiBand::classify(50.0), WqiBand::Fair);
        assert_eq!(WqiBand::classify(74.99), WqiBand::Fair);
        assert_eq!(WqiBand::classify(75.0), WqiBand::Good);
        assert_eq!(WqiBand::classify(0.0), WqiBand::Poor);
        assert_eq!(WqiBand::classify(100.0), WqiBand::Good);
    }

    #[test]
    fn test_axis_resolve_fixed_ignores_observed() {
        let axis = AxisRange::Fixed { min: 0.0, max: 14.0 };
        assert_eq!(axis.resolve(Some(99.0)), (0.0, 14.0));
        assert_eq!(axis.resolve(None), (0.0, 14.0));
    }

    #[test]
    fn test_axis_resolve_suggested_widens() {
        let axis = AxisRange::SuggestedMax { min: 0.0, suggested_max: 1000.0 };
        assert_eq!(axis.resolve(None), (0.0, 1000.0));
        assert_eq!(axis.resolve(Some(250.0)), (0.0, 1000.0));
        assert_eq!(axis.resolve(Some(2500.0)), (0.0, 2500.0));
    }

    #[test]
    fn test_field_order_matches_indices() {
        for (i, spec) in FIELDS.iter().enumerate() {
            assert_eq!(spec.kind.index(), i);
        }
    }
}
