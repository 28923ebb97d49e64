//! Channel-based data source.
//!
//! Receives reading batches via a tokio watch channel. This is useful for
//! embedding the dashboard behind an in-process push producer, where batches
//! are pushed rather than polled from a file.

use tokio::sync::watch;

use super::{DataSource, ReadingBatch};

/// A data source that receives reading batches via a channel.
///
/// The producer (e.g., a store subscription bridge) sends batches through
/// the channel, and this source provides them to the dashboard. Dropping
/// the sender is a terminal failure.
///
/// # Example
///
/// ```
/// use hydra_watch::ChannelSource;
///
/// // Create a channel pair
/// let (tx, source) = ChannelSource::create("readings/live");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<ReadingBatch>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
    closed: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - A description of where batches come from
    ///   (e.g., "readings/live", "wss://store.example/readings")
    pub fn new(receiver: watch::Receiver<ReadingBatch>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
            closed: false,
        }
    }

    /// Create a channel pair for sending batches to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender can be used to push
    /// batches and the source can be used with the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<ReadingBatch>, Self) {
        let (tx, rx) = watch::channel(ReadingBatch::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<ReadingBatch> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        // Check if there's a new value without blocking
        match self.receiver.has_changed() {
            Ok(true) => Some(self.receiver.borrow_and_update().clone()),
            Ok(false) => None,
            Err(_) => {
                // Sender dropped: the subscription is gone
                self.closed = true;
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.closed.then_some("Subscription channel closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawRecord;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) batch
        let batch = source.poll();
        assert!(batch.is_some());
        assert!(batch.unwrap().is_empty());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Send a new batch
        let record: RawRecord = serde_json::from_str(r#"{"ph": 7.1}"#).unwrap();
        tx.send(vec![record]).unwrap();

        // Now poll returns the new batch
        let batch = source.poll();
        assert!(batch.is_some());
        assert_eq!(batch.unwrap().len(), 1);
    }

    #[test]
    fn test_channel_source_sender_dropped_is_terminal() {
        let (tx, mut source) = ChannelSource::create("test");
        let _ = source.poll();
        assert!(source.error().is_none());

        drop(tx);
        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("Subscription channel closed"));
    }
}
