//! Metric card rendering.
//!
//! Displays the most recent reading as four labeled value cards. The WQI
//! card additionally shows its status band. Cards read only the head of the
//! snapshot; chart and table state is never touched here.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{FieldKind, Reading, WqiBand, FIELDS};

/// Placeholder shown for absent values and before the first reading.
pub const PLACEHOLDER: &str = "--";

/// Format a card value: two decimals for numeric values, the placeholder
/// otherwise.
pub fn card_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render the four metric cards from the latest reading.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    let latest: Option<&Reading> = app.snapshot.as_ref().and_then(|s| s.latest());

    for (spec, chunk) in FIELDS.iter().zip(chunks.iter()) {
        let value = latest.and_then(|r| r.value(spec.kind));

        let mut lines = vec![
            Line::from(Span::styled(card_value(value), app.theme.value)).alignment(Alignment::Center),
            Line::from(Span::styled(spec.unit, app.theme.unit)).alignment(Alignment::Center),
        ];

        // The WQI card carries a status band; absent values show no band.
        if spec.kind == FieldKind::WqiPrediction {
            let band_line = match value {
                Some(v) => {
                    let band = WqiBand::classify(v);
                    Line::from(Span::styled(band.label(), app.theme.band_style(band)))
                        .alignment(Alignment::Center)
                }
                None => Line::from(""),
            };
            lines.push(band_line);
        }

        let card = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", spec.label))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(ratatui::style::Style::default().fg(app.theme.border)),
        );

        frame.render_widget(card, *chunk);
    }
}
