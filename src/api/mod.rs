mod config;
mod engine;
mod snapshot;

pub use config::{DEFAULT_EXPLICIT_MAX, LayoutConfig};
pub use engine::ChartLayoutEngine;
pub use snapshot::{LayoutSnapshot, axis_tick_labels};
