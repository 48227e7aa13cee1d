use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Point in pixel coordinates, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from two opposite corners regardless of their order.
    #[must_use]
    pub fn from_corners(a: PlotPoint, b: PlotPoint) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Builds a square rect centered on a point.
    #[must_use]
    pub fn centered_square(center: PlotPoint, size: f64) -> Self {
        let half = size * 0.5;
        Self {
            x: center.x - half,
            y: center.y - half,
            width: size,
            height: size,
        }
    }

    #[must_use]
    pub fn center(self) -> PlotPoint {
        PlotPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[must_use]
    pub fn contains(self, point: PlotPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Host-measured font metrics for a reference label string.
///
/// The layout engine only needs the rendered line height; it is used to
/// enforce the minimum readable tick spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub height_px: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { height_px: 12.0 }
    }
}

impl FontMetrics {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.height_px.is_finite() || self.height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font height must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
