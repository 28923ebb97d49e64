//! Chart series projection.
//!
//! Projects the ordered reading window into per-field chart series. The
//! window arrives newest-first; the chart reads left-to-right chronological,
//! so projection reverses it.

use super::fields::FieldKind;
use super::reading::Reading;

/// Per-field chart series sharing one label axis.
///
/// All four value vectors and the label vector have the same length within
/// one projection. A `None` value is a gap; a present zero plots as zero.
#[derive(Debug, Clone, Default)]
pub struct SeriesSet {
    /// Chronological hour:minute labels, oldest first.
    pub labels: Vec<String>,
    /// One value sequence per field, indexed by [`FieldKind::index`].
    pub values: [Vec<Option<f64>>; 4],
}

impl SeriesSet {
    /// Project a newest-first window into chronological series.
    pub fn project(window: &[Reading]) -> Self {
        let mut labels = Vec::with_capacity(window.len());
        let mut values: [Vec<Option<f64>>; 4] =
            std::array::from_fn(|_| Vec::with_capacity(window.len()));

        for reading in window.iter().rev() {
            labels.push(reading.timestamp.display());
            for kind in FieldKind::ALL {
                values[kind.index()].push(reading.value(kind));
            }
        }

        Self { labels, values }
    }

    /// Number of points on the shared label axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest present value of one field, for widening suggested axis ranges.
    pub fn observed_max(&self, kind: FieldKind) -> Option<f64> {
        self.values[kind.index()]
            .iter()
            .flatten()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawRecord;
    use serde_json::json;

    fn reading(ph: serde_json::Value, label: &str) -> Reading {
        let raw: RawRecord =
            serde_json::from_value(json!({"ph": ph, "timestamp": label})).unwrap();
        Reading::from_raw(&raw)
    }

    #[test]
    fn test_projection_reverses_to_chronological() {
        // Newest first: 12:02 is the most recent reading
        let window = vec![
            reading(json!(7.3), "12:02"),
            reading(json!(7.2), "12:01"),
            reading(json!(7.1), "12:00"),
        ];

        let series = SeriesSet::project(&window);
        assert_eq!(series.labels, vec!["12:00", "12:01", "12:02"]);
        assert_eq!(
            series.values[FieldKind::Ph.index()],
            vec![Some(7.1), Some(7.2), Some(7.3)]
        );
    }

    #[test]
    fn test_all_series_share_window_length() {
        let window = vec![reading(json!(7.0), "a"), reading(json!(null), "b")];
        let series = SeriesSet::project(&window);
        assert_eq!(series.len(), 2);
        for values in &series.values {
            assert_eq!(values.len(), 2);
        }
    }

    #[test]
    fn test_absent_is_gap_not_zero() {
        let window = vec![
            reading(json!(null), "12:01"),
            reading(json!(0.0), "12:00"),
        ];

        let series = SeriesSet::project(&window);
        // Chronological: the zero reading comes first, then the gap
        assert_eq!(series.values[FieldKind::Ph.index()], vec![Some(0.0), None]);
    }

    #[test]
    fn test_empty_window() {
        let series = SeriesSet::project(&[]);
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_observed_max_skips_gaps() {
        let window = vec![
            reading(json!(null), "c"),
            reading(json!(8.1), "b"),
            reading(json!(6.4), "a"),
        ];
        let series = SeriesSet::project(&window);
        assert_eq!(series.observed_max(FieldKind::Ph), Some(8.1));
        assert_eq!(series.observed_max(FieldKind::TemperatureC), None);
    }
}
