//! Reading normalization.
//!
//! Converts a raw heterogeneous record into a typed [`Reading`]. The
//! conversion is total: malformed input degrades to absent values and
//! display markers, never an error.

use serde_json::Value;

use super::fields::FieldKind;
use super::timestamp::Timestamp;
use crate::source::RawRecord;

/// One timestamped set of sensor and derived values.
///
/// `None` is the only representation of a missing value. A reading of zero
/// is present data, not a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: Timestamp,
    pub ph: Option<f64>,
    pub temperature_c: Option<f64>,
    pub turbidity_ntu: Option<f64>,
    pub wqi_24h_prediction: Option<f64>,
}

impl Reading {
    /// Normalize a raw record.
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            timestamp: Timestamp::from_value(&raw.timestamp),
            ph: coerce(&raw.ph),
            temperature_c: coerce(&raw.temperature_c),
            turbidity_ntu: coerce(&raw.turbidity_ntu),
            wqi_24h_prediction: coerce(&raw.wqi_24h_prediction),
        }
    }

    /// The value of one tracked field.
    pub fn value(&self, kind: FieldKind) -> Option<f64> {
        match kind {
            FieldKind::Ph => self.ph,
            FieldKind::TemperatureC => self.temperature_c,
            FieldKind::TurbidityNtu => self.turbidity_ntu,
            FieldKind::WqiPrediction => self.wqi_24h_prediction,
        }
    }
}

/// Coerce a raw value to a float. Null, absent, and non-numeric values are
/// absent; they never become zero or carry a prior value forward.
fn coerce(value: &Value) -> Option<f64> {
    value.as_f64()
}
