//! Backend-agnostic geometry output: typed primitives plus per-value
//! hit-test bounds, rebuilt in full on every layout pass.

use serde::{Deserialize, Serialize};

use crate::core::smooth::CubicSegment;
use crate::core::types::{PlotPoint, PlotRect};

/// Open point sequence rendered as straight segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<PlotPoint>,
}

/// Closed point sequence rendered as a filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub points: Vec<PlotPoint>,
}

/// Smoothed path: one cubic segment per adjacent data pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothPath {
    pub segments: Vec<CubicSegment>,
    /// Closes the smoothed outline back to these trailing points (area
    /// styles close to the baseline); empty for open curves.
    pub closure: Vec<PlotPoint>,
}

/// Filled rectangle; `negative` records which side of the zero line the
/// source value sat on so hosts can brush rises and falls differently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub rect: PlotRect,
    pub negative: bool,
}

/// Circular sector: arc between two radial edges, optionally ring-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorShape {
    pub center: PlotPoint,
    pub radius: f64,
    /// Hole radius for doughnut styles; 0 renders a solid sector.
    pub inner_radius: f64,
    /// Degrees, measured clockwise from 12 o'clock.
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
}

impl SectorShape {
    /// Point on the arc at `t` in `0..=1` across the sweep.
    #[must_use]
    pub fn arc_point(&self, t: f64) -> PlotPoint {
        let angle_deg = self.start_angle_deg + self.sweep_angle_deg * t;
        let radians = (angle_deg - 90.0).to_radians();
        PlotPoint::new(
            self.center.x + self.radius * radians.cos(),
            self.center.y + self.radius * radians.sin(),
        )
    }
}

/// Axis-aligned ellipse given by center and radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub center: PlotPoint,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl EllipseShape {
    #[must_use]
    pub fn bounds(&self) -> PlotRect {
        PlotRect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.radius_x * 2.0,
            self.radius_y * 2.0,
        )
    }
}

/// One drawable primitive, consumable by any 2D backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryPrimitive {
    Polyline(Polyline),
    Polygon(PolygonShape),
    SmoothPath(SmoothPath),
    Rect(RectShape),
    Sector(SectorShape),
    Ellipse(EllipseShape),
}

/// Value label anchored near its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub text: String,
    pub anchor: PlotPoint,
}

/// Full geometry output for one series on one layout pass.
///
/// `hit_rects` and `hit_points` are keyed by value index and are the current
/// frame's state: the builder returns them fresh, the host replaces its
/// previous snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub series_index: usize,
    pub primitives: Vec<GeometryPrimitive>,
    pub hit_rects: Vec<PlotRect>,
    pub hit_points: Vec<PlotPoint>,
    pub labels: Vec<ValueLabel>,
}

impl SeriesGeometry {
    #[must_use]
    pub fn empty(series_index: usize) -> Self {
        Self {
            series_index,
            primitives: Vec::new(),
            hit_rects: Vec::new(),
            hit_points: Vec::new(),
            labels: Vec::new(),
        }
    }
}
