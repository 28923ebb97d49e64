//! Time-series chart rendering.
//!
//! Draws the four tracked fields over the reading window. Each field is
//! bound to its own vertical scale (pH 0-14, temperature 0-50, turbidity
//! auto, WQI 0-100) and all share one horizontal time axis; plotting the raw
//! magnitudes on a single scale would flatten most of them to invisibility.
//! The whole plot is rebuilt from the snapshot on every draw, so updates are
//! immediate and never animated.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{SeriesSet, FIELDS};

/// Render the multi-scale trend chart from the snapshot window.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref snapshot) = app.snapshot else {
        render_placeholder(frame, area, app, "Waiting for readings...");
        return;
    };

    let series = SeriesSet::project(&snapshot.readings);
    if series.is_empty() {
        render_placeholder(frame, area, app, "No readings in window");
        return;
    }

    // Normalize each field onto its own axis range, then split at gaps so
    // absent values break the line instead of bridging it.
    let mut field_lines: Vec<(usize, String, Vec<Vec<(f64, f64)>>)> = Vec::new();
    for spec in FIELDS.iter() {
        let idx = spec.kind.index();
        let bounds = spec.axis.resolve(series.observed_max(spec.kind));
        let normalized: Vec<Option<f64>> = series.values[idx]
            .iter()
            .map(|v| v.map(|v| normalize(v, bounds)))
            .collect();
        let name = format!("{} [{:.0}..{:.0}]", spec.label, bounds.0, bounds.1);
        field_lines.push((idx, name, segments(&normalized)));
    }

    let mut datasets = Vec::new();
    for (idx, name, segs) in &field_lines {
        for (i, seg) in segs.iter().enumerate() {
            let graph_type = if seg.len() == 1 {
                GraphType::Scatter
            } else {
                GraphType::Line
            };
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(app.theme.series[*idx]))
                .data(seg);
            // Name only the first segment so the legend lists each field once
            if i == 0 {
                dataset = dataset.name(name.clone());
            }
            datasets.push(dataset);
        }
    }

    let x_max = (series.len().saturating_sub(1) as f64).max(1.0);
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" Trends ({} readings) ", series.len()))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(
            Axis::default()
                .title("Time".dark_gray())
                .bounds([0.0, x_max])
                .labels(time_labels(&series)),
        )
        // Each field carries its own scale (shown in the legend), so the
        // shared vertical axis is unit-less.
        .y_axis(Axis::default().bounds([0.0, 1.0]));

    frame.render_widget(chart, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, app: &App, message: &str) {
    let block = Block::default()
        .title(" Trends ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().dim())
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Map a value into [0, 1] within the field's axis range.
fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Split a series into contiguous runs of present points.
///
/// Gaps (absent values) separate runs so the plot shows a break rather than
/// a line drawn across missing data.
fn segments(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((i as f64, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// First, middle, and last time labels for the shared horizontal axis.
fn time_labels(series: &SeriesSet) -> Vec<Line<'static>> {
    let labels = &series.labels;
    match labels.len() {
        0 => Vec::new(),
        1 => vec![Line::from(labels[0].clone())],
        2 => vec![Line::from(labels[0].clone()), Line::from(labels[1].clone())],
        n => vec![
            Line::from(labels[0].clone()),
            Line::from(labels[n / 2].clone()),
            Line::from(labels[n - 1].clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_split_at_gaps() {
        let values = vec![Some(0.1), Some(0.2), None, Some(0.4), Some(0.5)];
        let runs = segments(&values);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 0.1), (1.0, 0.2)]);
        assert_eq!(runs[1], vec![(3.0, 0.4), (4.0, 0.5)]);
    }

    #[test]
    fn test_segments_all_absent() {
        assert!(segments(&[None, None]).is_empty());
    }

    #[test]
    fn test_segments_keep_zero_points() {
        // A zero reading is a point on the baseline, not a gap
        let runs = segments(&[Some(0.0), None]);
        assert_eq!(runs, vec![vec![(0.0, 0.0)]]);
    }

    #[test]
    fn test_normalize_within_bounds() {
        assert_eq!(normalize(7.0, (0.0, 14.0)), 0.5);
        assert_eq!(normalize(0.0, (0.0, 14.0)), 0.0);
        assert_eq!(normalize(20.0, (0.0, 14.0)), 1.0); // clamped
        assert_eq!(normalize(5.0, (5.0, 5.0)), 0.0); // degenerate range
    }
}
