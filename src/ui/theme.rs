//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::WqiBand;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the Good WQI band.
    pub success: Color,
    /// Color for the Fair WQI band.
    pub warning: Color,
    /// Color for the Poor WQI band.
    pub alert: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for the big card values.
    pub value: Style,
    /// Style for unit captions.
    pub unit: Style,
    /// One line color per tracked field, in field order.
    pub series: [Color; 4],
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            alert: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            unit: Style::default().add_modifier(Modifier::DIM),
            series: [Color::LightRed, Color::Cyan, Color::Yellow, Color::Green],
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            alert: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            unit: Style::default().add_modifier(Modifier::DIM),
            series: [Color::Red, Color::Blue, Color::Magenta, Color::Green],
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a WQI status band
    pub fn band_style(&self, band: WqiBand) -> Style {
        match band {
            WqiBand::Good => Style::default().fg(self.success),
            WqiBand::Fair => Style::default().fg(self.warning),
            WqiBand::Poor => Style::default().fg(self.alert).add_modifier(Modifier::BOLD),
        }
    }
}
