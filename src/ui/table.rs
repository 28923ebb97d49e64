//! History table rendering.
//!
//! Renders the reading window as tabular rows, newest first: the mirror
//! image of the chart's chronological order, since a table is scanned
//! top-down for the most recent entry. The table body is fully rebuilt from
//! the snapshot on every draw; with the window capped at 24 rows there is
//! nothing to gain from diffing.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::{RenderSnapshot, FIELDS};

/// Column headers, also used by the CSV export.
pub const COLUMNS: [&str; 5] = ["Timestamp", "pH", "Temperature (°C)", "Turbidity (NTU)", "WQI"];

/// Build the display rows for the snapshot window, newest first.
///
/// This is the rendered form the CSV export consumes: numeric cells carry
/// their unit suffix, absent values show the placeholder.
pub fn history_rows(snapshot: &RenderSnapshot) -> Vec<[String; 5]> {
    snapshot
        .readings
        .iter()
        .map(|reading| {
            let mut row = [
                reading.timestamp.display(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ];
            for (spec, cell) in FIELDS.iter().zip(row[1..].iter_mut()) {
                *cell = format_cell(reading.value(spec.kind), spec.table_decimals, spec.table_suffix);
            }
            row
        })
        .collect()
}

fn format_cell(value: Option<f64>, decimals: usize, suffix: &str) -> String {
    match value {
        Some(v) => format!("{:.*}{}", decimals, v, suffix),
        None => "--".to_string(),
    }
}

/// Render the history table from the snapshot window.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<[String; 5]> = app
        .snapshot
        .as_ref()
        .map(history_rows)
        .unwrap_or_default();

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .height(1)
        .style(app.theme.header);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.clone()))))
        .collect();

    let widths = [
        Constraint::Fill(2), // Timestamp
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .title(format!(" History ({} readings) ", rows.len()))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawRecord;
    use serde_json::json;

    fn snapshot_from(records: serde_json::Value) -> RenderSnapshot {
        let batch: Vec<RawRecord> = serde_json::from_value(records).unwrap();
        RenderSnapshot::from_batch(&batch)
    }

    #[test]
    fn test_rows_preserve_newest_first_order() {
        let snapshot = snapshot_from(json!([
            {"timestamp": "12:02", "ph": 7.3},
            {"timestamp": "12:01", "ph": 7.2},
            {"timestamp": "12:00", "ph": 7.1}
        ]));

        let rows = history_rows(&snapshot);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "12:02");
        assert_eq!(rows[2][0], "12:00");
    }

    #[test]
    fn test_cells_carry_unit_suffixes() {
        let snapshot = snapshot_from(json!([{
            "timestamp": "12:00",
            "ph": 7.234,
            "temperature_c": 21.56,
            "turbidity_ntu": 3.44,
            "wqi_24h_prediction": 82.126
        }]));

        let rows = history_rows(&snapshot);
        assert_eq!(rows[0][1], "7.23");
        assert_eq!(rows[0][2], "21.6°C");
        assert_eq!(rows[0][3], "3.4 NTU");
        assert_eq!(rows[0][4], "82.13");
    }

    #[test]
    fn test_absent_cells_show_placeholder() {
        let snapshot = snapshot_from(json!([{"timestamp": "12:00"}]));
        let rows = history_rows(&snapshot);
        assert_eq!(rows[0][1], "--");
        assert_eq!(rows[0][2], "--");
        assert_eq!(rows[0][3], "--");
        assert_eq!(rows[0][4], "--");
    }

    #[test]
    fn test_zero_renders_as_zero() {
        let snapshot = snapshot_from(json!([{"turbidity_ntu": 0.0}]));
        let rows = history_rows(&snapshot);
        assert_eq!(rows[0][3], "0.0 NTU");
    }
}
