// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # hydra-watch
//!
//! A realtime TUI dashboard and library for monitoring Hydra water-quality
//! sensor readings.
//!
//! This crate consumes already-computed readings (pH, temperature,
//! turbidity, and a derived 24h water-quality-index prediction) pushed from
//! a remote readings store and renders them as live metric cards, a
//! multi-scale trend chart, and a tabular history with CSV export.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(normalize)    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | StreamSource | ChannelSource  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Subscription lifecycle, the render snapshot, and export
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   implementations for file polling, byte streams, and channel-based input
//! - **[`data`]**: Normalization of heterogeneous records into typed
//!   [`Reading`]s, chart series projection, and WQI banding
//! - **[`ui`]**: Terminal rendering using ratatui - metric cards, trend
//!   chart, history table, and theme support
//! - **[`export`]**: CSV export of the rendered history table
//!
//! Every push from the store replaces the render snapshot wholesale; cards,
//! chart and table all read from that one snapshot, so the three views can
//! never disagree within a frame.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch a JSON file of readings (newest first)
//! hydra-watch --file readings.json
//!
//! # Attach to a live feed over TCP
//! hydra-watch --connect localhost:9090
//! ```
//!
//! ### As a library with file source
//!
//! ```
//! use hydra_watch::{App, FileSource};
//!
//! let source = Box::new(FileSource::new("readings.json"));
//! let app = App::new(source);
//! ```
//!
//! ### As a library with channel source (for push integration)
//!
//! ```
//! use hydra_watch::{App, ChannelSource};
//!
//! // Create a channel for receiving batches
//! let (tx, source) = ChannelSource::create("readings/live");
//!
//! // Create the app
//! let app = App::new(Box::new(source));
//! ```
//!
//! ### Bridging serialized batches
//!
//! ```no_run
//! use hydra_watch::StreamSource;
//! use tokio::sync::mpsc;
//!
//! # tokio_test::block_on(async {
//! // Create a bytes channel
//! let (tx, rx) = mpsc::channel::<Vec<u8>>(16);
//! let source = StreamSource::from_bytes_channel(rx, "store-bridge");
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod export;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, FeedState};
pub use data::{
    AxisRange, FieldKind, FieldSpec, Reading, RenderSnapshot, SeriesSet, Timestamp, WqiBand,
    FIELDS,
};
pub use source::{ChannelSource, DataSource, FileSource, RawRecord, ReadingBatch, StreamSource};
