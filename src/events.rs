use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export the history table to CSV
        KeyCode::Char('e') => match app.export_csv() {
            Ok(path) => {
                app.set_status_message(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                app.set_status_message(format!("Export failed: {}", e));
            }
        },

        // Retry after a terminal feed error (operator action, never automatic)
        KeyCode::Char('r') => {
            app.re_arm();
            let _ = app.poll_feed();
        }

        _ => {}
    }
}
