//! Application state and subscription lifecycle.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use tracing::{debug, error};

use crate::data::RenderSnapshot;
use crate::export;
use crate::source::DataSource;
use crate::ui::{table, Theme};

/// Status text shown when a push delivers an empty batch.
pub const NO_DATA: &str = "No data available";

/// Lifecycle of the live subscription.
///
/// A feed starts uninitialized, becomes subscribed on its first delivery,
/// and an error is terminal until an operator re-arms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Uninitialized,
    Subscribed,
    Error,
}

/// Main application state.
///
/// Owns the data source and the single [`RenderSnapshot`] every view reads
/// from. Each push replaces the snapshot wholesale; the draw pass then fans
/// out to cards, chart, and table independently.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Feed
    source: Box<dyn DataSource>,
    pub feed_state: FeedState,
    pub snapshot: Option<RenderSnapshot>,
    /// Terminal feed failure, shown in the header.
    pub feed_error: Option<String>,
    /// "Last updated: ..." or "No data available".
    pub feed_status: Option<String>,

    // UI
    pub theme: Theme,
    pub export_dir: PathBuf,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            feed_state: FeedState::Uninitialized,
            snapshot: None,
            feed_error: None,
            feed_status: None,
            theme: Theme::auto_detect(),
            export_dir: PathBuf::from("."),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and apply any delivered batch.
    ///
    /// Returns true if the snapshot was replaced. An errored feed is left
    /// untouched: the last snapshot stays on screen and no further polls
    /// are attempted until [`App::re_arm`].
    pub fn poll_feed(&mut self) -> bool {
        if self.feed_state == FeedState::Error {
            return false;
        }

        match self.source.poll() {
            Some(batch) => {
                self.feed_state = FeedState::Subscribed;

                if batch.is_empty() {
                    // Keep the previous snapshot; blanking the widgets would
                    // lose the last known values.
                    self.feed_status = Some(NO_DATA.to_string());
                    return false;
                }

                let snapshot = RenderSnapshot::from_batch(&batch);
                self.feed_status = snapshot
                    .latest()
                    .map(|r| format!("Last updated: {}", r.timestamp.display()));
                debug!(readings = snapshot.len(), "applied reading batch");
                self.snapshot = Some(snapshot);
                true
            }
            None => {
                if let Some(err) = self.source.error() {
                    error!(error = %err, "subscription failed");
                    self.feed_error = Some(err.to_string());
                    self.feed_state = FeedState::Error;
                }
                false
            }
        }
    }

    /// Clear a terminal feed error so polling resumes.
    ///
    /// This is an explicit operator action; the feed never retries on its
    /// own.
    pub fn re_arm(&mut self) {
        if self.feed_state == FeedState::Error {
            self.feed_error = None;
            self.feed_state = if self.snapshot.is_some() {
                FeedState::Subscribed
            } else {
                FeedState::Uninitialized
            };
        }
    }

    /// Export the rendered history table to CSV.
    ///
    /// Reads the same rows the table displays, so the file matches the
    /// screen exactly.
    pub fn export_csv(&self) -> Result<PathBuf> {
        let Some(ref snapshot) = self.snapshot else {
            anyhow::bail!("No data to export");
        };

        let rows = table::history_rows(snapshot);
        export::write_csv(&rows, &self.export_dir, Local::now().date_naive())
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
