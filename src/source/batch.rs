//! Wire types for reading batches.
//!
//! These types match the document shape pushed by the readings store. Field
//! values are kept as raw JSON so that partially-missing or oddly-typed
//! records still deserialize; normalization happens downstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of readings per batch. The store delivers at most the 24
/// most recent documents, newest first.
pub const MAX_BATCH: usize = 24;

/// One raw reading document as delivered by the store.
///
/// Every field defaults to JSON null so any record shape deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub ph: Value,
    #[serde(default)]
    pub temperature_c: Value,
    #[serde(default)]
    pub turbidity_ntu: Value,
    #[serde(default)]
    pub wqi_24h_prediction: Value,
}

/// An ordered batch of raw readings, newest first.
pub type ReadingBatch = Vec<RawRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "timestamp": {"seconds": 1700000000, "nanoseconds": 0},
            "ph": 7.2,
            "temperature_c": 21.5,
            "turbidity_ntu": 3.4,
            "wqi_24h_prediction": 82.1
        }"#;

        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ph.as_f64(), Some(7.2));
        assert!(record.timestamp.is_object());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: RawRecord = serde_json::from_str(r#"{"ph": 6.8}"#).unwrap();
        assert_eq!(record.ph.as_f64(), Some(6.8));
        assert!(record.temperature_c.is_null());
        assert!(record.timestamp.is_null());
    }

    #[test]
    fn test_deserialize_batch() {
        let json = r#"[{"ph": 7.0}, {"ph": 6.9}, {}]"#;
        let batch: ReadingBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.len(), 3);
    }
}
