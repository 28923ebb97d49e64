//! Common UI components shared across the dashboard.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FeedState};
use crate::data::FIELDS;

/// Render the header bar with feed state and freshness.
///
/// Displays: feed indicator, dashboard name, source description, and the
/// "last updated" / "no data" line.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (feed_icon, feed_style) = match app.feed_state {
        FeedState::Uninitialized => ("○", Style::default().add_modifier(Modifier::DIM)),
        FeedState::Subscribed => ("●", Style::default().fg(app.theme.success)),
        FeedState::Error => ("●", Style::default().fg(app.theme.alert)),
    };

    let freshness = if let Some(ref err) = app.feed_error {
        Span::styled(format!("Error: {}", err), Style::default().fg(app.theme.alert))
    } else if let Some(ref status) = app.feed_status {
        Span::raw(status.clone())
    } else {
        Span::styled("Connecting...", Style::default().add_modifier(Modifier::DIM))
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", feed_icon), feed_style),
        Span::styled("HYDRA ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.source_description().to_string()),
        Span::raw(" │ "),
        freshness,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows available controls, or a temporary status message (e.g. export
/// feedback) when one is active.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.feed_state {
        FeedState::Error => " e:export csv r:retry ?:help q:quit",
        _ => " e:export csv ?:help q:quit",
    };

    let paragraph = Paragraph::new(controls).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts and field notes.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  e         Export history to CSV"),
        Line::from("  r         Retry after a feed error"),
        Line::from("  q         Quit"),
        Line::from("  ?         Toggle this help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Fields",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    for spec in FIELDS.iter() {
        help_text.push(Line::from(vec![
            Span::styled(format!("  {:<20}", spec.label), app.theme.header),
        ]));
        help_text.push(Line::from(Span::styled(
            format!("    {}", spec.tooltip),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )]));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text)
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 64u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
