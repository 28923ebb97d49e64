//! Stream-based data source.
//!
//! Receives reading batches from an async byte stream, one newline-delimited
//! JSON array per push. This is how the dashboard attaches to a live feed
//! bridged over TCP.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

use super::{DataSource, ReadingBatch};

/// A data source that receives reading batches from an async stream.
///
/// Spawns a background task that reads newline-delimited JSON from the
/// provided async reader and makes batches available via `poll()`. Any
/// read failure, parse failure, or EOF is terminal: the task stops and the
/// failure is surfaced through [`DataSource::error`].
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use hydra_watch::StreamSource;
///
/// # tokio_test::block_on(async {
/// let data = b"[]\n";
/// let stream = Cursor::new(data.to_vec());
/// let source = StreamSource::spawn(stream, "example");
/// # });
/// ```
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<ReadingBatch>,
    description: String,
    shared_error: Arc<Mutex<Option<String>>>,
    // Owned copy of the shared error, refreshed on poll, so error() can
    // hand out a borrow without holding the lock.
    error_cache: Option<String>,
}

impl StreamSource {
    /// Spawn a background task that reads from the given async reader.
    ///
    /// Each line is parsed as a complete newest-first `ReadingBatch`.
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(16);
        let shared_error = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();
        let desc = description.to_string();

        tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut line = String::new();

            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => {
                        // EOF
                        *error_handle.lock().unwrap() = Some("Connection closed".to_string());
                        break;
                    }
                    Ok(_) => match serde_json::from_str::<ReadingBatch>(line.trim()) {
                        Ok(batch) => {
                            if tx.send(batch).await.is_err() {
                                // Receiver dropped
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(source = %desc, error = %e, "malformed batch on stream");
                            *error_handle.lock().unwrap() = Some(format!("Parse error: {}", e));
                            break;
                        }
                    },
                    Err(e) => {
                        *error_handle.lock().unwrap() = Some(format!("Read error: {}", e));
                        break;
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", description),
            shared_error,
            error_cache: None,
        }
    }

    /// Create a StreamSource from a raw bytes channel.
    ///
    /// This is useful when another component pushes serialized batches
    /// (e.g., a store subscription bridge) without exposing an AsyncRead.
    pub fn from_bytes_channel(mut rx: mpsc::Receiver<Vec<u8>>, description: &str) -> Self {
        let (tx, batch_rx) = mpsc::channel(16);
        let shared_error = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();
        let desc = description.to_string();

        tokio::spawn(async move {
            while let Some(bytes) = rx.recv().await {
                match serde_json::from_slice::<ReadingBatch>(&bytes) {
                    Ok(batch) => {
                        if tx.send(batch).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(source = %desc, error = %e, "malformed batch on channel");
                        *error_handle.lock().unwrap() = Some(format!("Parse error: {}", e));
                        break;
                    }
                }
            }
        });

        Self {
            receiver: batch_rx,
            description: format!("stream: {}", description),
            shared_error,
            error_cache: None,
        }
    }
}

impl DataSource for StreamSource {
    fn poll(&mut self) -> Option<ReadingBatch> {
        let polled = match self.receiver.try_recv() {
            Ok(batch) => Some(batch),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                let mut err = self.shared_error.lock().unwrap();
                if err.is_none() {
                    *err = Some("Stream disconnected".to_string());
                }
                None
            }
        };

        if polled.is_none() {
            self.error_cache = self.shared_error.lock().unwrap().clone();
        }
        polled
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.error_cache.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_json() -> &'static str {
        r#"[{"timestamp": "12:01", "ph": 7.2}, {"timestamp": "12:00", "ph": 7.1}]"#
    }

    #[tokio::test]
    async fn test_stream_source_spawn() {
        // Create a cursor with newline-delimited JSON
        let data = format!("{}\n", sample_json());
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        // Give the background task time to process
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        // Should receive the batch
        let batch = source.poll();
        assert!(batch.is_some());
        assert_eq!(batch.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_stream_source_multiple_batches() {
        let data = format!("{}\n{}\n", sample_json(), sample_json());
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        // Should receive both batches
        assert!(source.poll().is_some());
        assert!(source.poll().is_some());

        // No more data
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_stream_source_description() {
        let cursor = Cursor::new("");
        let source = StreamSource::spawn(cursor, "tcp://localhost:9090");
        assert_eq!(source.description(), "stream: tcp://localhost:9090");
    }

    #[tokio::test]
    async fn test_stream_source_from_bytes_channel() {
        let (tx, rx) = mpsc::channel::<Vec<u8>>(16);
        let mut source = StreamSource::from_bytes_channel(rx, "test-channel");

        // Send a batch
        tx.send(sample_json().as_bytes().to_vec()).await.unwrap();

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let batch = source.poll();
        assert!(batch.is_some());
        assert_eq!(batch.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_stream_source_invalid_json_is_terminal() {
        let data = "not valid json\n";
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        // No batch is delivered and the failure is surfaced
        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }

    #[tokio::test]
    async fn test_stream_source_eof_reports_connection_closed() {
        let cursor = Cursor::new("");
        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("Connection closed"));
    }
}
