//! The atomic unit of state driving one render cycle.

use super::reading::Reading;
use crate::source::{RawRecord, MAX_BATCH};

/// Normalized window of recent readings, newest first.
///
/// A new snapshot replaces the previous one wholesale on every push; it is
/// never patched incrementally. Each render cycle (cards, chart, table)
/// reads from a single snapshot, so the three views can never disagree.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    /// Newest-first readings, at most [`MAX_BATCH`].
    pub readings: Vec<Reading>,
}

impl RenderSnapshot {
    /// Normalize a raw batch, capping it at the window size.
    pub fn from_batch(batch: &[RawRecord]) -> Self {
        Self {
            readings: batch.iter().take(MAX_BATCH).map(Reading::from_raw).collect(),
        }
    }

    /// The most recent reading, if any.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.first()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_batch_caps_window() {
        let batch: Vec<RawRecord> = (0..40)
            .map(|i| serde_json::from_value(json!({"ph": i as f64})).unwrap())
            .collect();

        let snapshot = RenderSnapshot::from_batch(&batch);
        assert_eq!(snapshot.len(), MAX_BATCH);
        // Head of the batch is the newest reading and must survive the cap
        assert_eq!(snapshot.latest().unwrap().ph, Some(0.0));
    }

    #[test]
    fn test_empty_batch() {
        let snapshot = RenderSnapshot::from_batch(&[]);
        assert!(snapshot.is_empty());
        assert!(snapshot.latest().is_none());
    }
}
