pub mod aggregate;
pub mod axis;
pub mod color;
pub mod direction;
pub mod frame;
pub mod geometry;
pub mod series;
pub mod smooth;
pub mod style;
pub mod types;
pub mod value;

pub use axis::{AxisContext, AxisMeasure, AxisOrientation, ZeroPoint, resolve_axis};
pub use color::Color;
pub use direction::{Direction, classify_direction};
pub use frame::{BoundaryMode, FlowDirection, PlotFrame};
pub use geometry::{GeometryPrimitive, SeriesGeometry};
pub use series::{Series, SeriesSet};
pub use smooth::{CubicSegment, smooth_polyline};
pub use style::{ChartStyle, GeometryFamily, Stacking};
pub use types::{FontMetrics, PlotPoint, PlotRect, Viewport};
pub use value::SeriesValue;
