//! Data source abstraction for receiving reading batches.
//!
//! This module provides a trait-based abstraction for receiving reading
//! batches from various sources (files, live subscriptions, in-memory
//! channels). The subscription transport itself is a black box behind
//! [`DataSource`]; the dashboard only sees ordered batches and a terminal
//! error channel.

mod batch;
mod channel;
mod file;
mod stream;

pub use batch::{RawRecord, ReadingBatch, MAX_BATCH};
pub use channel::ChannelSource;
pub use file::FileSource;
pub use stream::StreamSource;

use std::fmt::Debug;

/// Trait for receiving reading batches from various sources.
///
/// Implementations deliver batches newest-first, pushed on every change.
/// A source that fails reports the failure through [`DataSource::error`];
/// such failures are terminal for that source instance.
///
/// # Example
///
/// ```
/// use hydra_watch::{DataSource, FileSource};
///
/// let mut source = FileSource::new("readings.json");
/// if let Some(batch) = source.poll() {
///     println!("Got {} readings", batch.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest batch.
    ///
    /// Returns `Some(batch)` if new data is available, `None` otherwise.
    /// This method must be non-blocking.
    fn poll(&mut self) -> Option<ReadingBatch>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the header bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if the source has failed. A reported error
    /// is terminal: the source will not deliver further batches.
    fn error(&self) -> Option<&str>;
}
