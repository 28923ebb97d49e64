//! Data models and processing for reading batches.
//!
//! This module handles the transformation of raw reading batches into
//! normalized, display-ready data.
//!
//! ## Submodules
//!
//! - [`fields`]: Static descriptors for the four tracked fields and WQI banding
//! - [`reading`]: Normalization of raw records into typed [`Reading`]s
//! - [`series`]: Projection of the reading window into chart series
//! - [`snapshot`]: The [`RenderSnapshot`] driving one render cycle
//! - [`timestamp`]: Timestamp decoding and hour:minute formatting
//!
//! ## Data Flow
//!
//! ```text
//! ReadingBatch (raw JSON, newest first)
//!        │
//!        ▼
//! RenderSnapshot::from_batch()
//!        │
//!        ├──▶ latest()             (metric cards)
//!        ├──▶ SeriesSet::project() (chart, chronological)
//!        └──▶ readings             (history table, newest first)
//! ```

pub mod fields;
pub mod reading;
pub mod series;
pub mod snapshot;
pub mod timestamp;

pub use fields::{AxisRange, FieldKind, FieldSpec, WqiBand, FIELDS};
pub use reading::Reading;
pub use series::SeriesSet;
pub use snapshot::RenderSnapshot;
pub use timestamp::Timestamp;
