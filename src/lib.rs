//! plotgrid: chart axis-scaling and geometry layout engine.
//!
//! This crate turns raw numeric series, a chart style, and a viewport into a
//! "nice" axis tick layout plus deterministic 2D geometry (polylines, smooth
//! cubic paths, rectangles, sectors) with per-value hit-test bounds. It does
//! not render anything; any 2D backend can consume the output.

pub mod api;
pub mod build;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartLayoutEngine, LayoutConfig, LayoutSnapshot};
pub use error::{ChartError, ChartResult};
