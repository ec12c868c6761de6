//! certplot crate root: re-exports and module wiring.
//!
//! Interactive certification charts built on egui/eframe:
//! - `data`: point types, nearest-sample lookup, run segmentation, fixtures,
//!   hover readouts and date labels (no UI dependencies beyond colors)
//! - `panels`: the certification chart and the status timeline
//! - `app`: the native window hosting the panels
//! - `config`: YAML-backed configuration
//! - `error`: the crate-wide error type

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;

pub use app::{run_certplot, CertPlotApp};
pub use config::{ChartConfig, DataSources, FeatureFlags};
pub use data::fixture::Fixture;
pub use data::highlight::{CertificationHighlight, LabelPlacement, StatusHighlight};
pub use data::nearest::{bisect_left, closest};
pub use data::points::{Dated, LabeledPoint, Labeled, TimedPoint, Timestamp};
pub use data::segments::{segment, segment_bridged, Segment};
pub use data::status::ValidityStatus;
pub use error::{ChartError, Result};
