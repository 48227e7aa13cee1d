//! Plot frame: the drawable area and category-axis placement rules.

use serde::{Deserialize, Serialize};

use crate::core::types::{PlotPoint, Viewport};

/// Where the first and last category anchors sit relative to the plot edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryMode {
    /// First anchor flush on the axis, last on the far edge.
    #[default]
    OnAxis,
    /// Anchors inset by half a category band so boundary points never touch
    /// the axis.
    WithOffset,
}

/// Horizontal reading direction of the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlowDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Pixel-space drawable area derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom_left(&self) -> PlotPoint {
        PlotPoint::new(self.left, self.bottom())
    }

    #[must_use]
    pub fn center(&self) -> PlotPoint {
        PlotPoint::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Width of one category slot.
    #[must_use]
    pub fn category_band(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            self.width / count as f64
        }
    }

    /// Pixel x of category anchor `i` for vertical-value charts.
    #[must_use]
    pub fn category_anchor_x(
        &self,
        i: usize,
        count: usize,
        boundary: BoundaryMode,
        flow: FlowDirection,
    ) -> f64 {
        let offset = anchor_along(self.width, i, count, boundary);
        match flow {
            FlowDirection::LeftToRight => self.left + offset,
            FlowDirection::RightToLeft => self.right() - offset,
        }
    }

    /// Pixel y of category anchor `i` for horizontal-value (bar) charts.
    /// Categories run top to bottom.
    #[must_use]
    pub fn category_anchor_y(&self, i: usize, count: usize, boundary: BoundaryMode) -> f64 {
        self.top + anchor_along(self.height, i, count, boundary)
    }
}

fn anchor_along(span: f64, i: usize, count: usize, boundary: BoundaryMode) -> f64 {
    if count == 0 {
        return 0.0;
    }

    match boundary {
        BoundaryMode::WithOffset => (i as f64 + 0.5) * span / count as f64,
        BoundaryMode::OnAxis => {
            if count == 1 {
                span * 0.5
            } else {
                i as f64 * span / (count - 1) as f64
            }
        }
    }
}
