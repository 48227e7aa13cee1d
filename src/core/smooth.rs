//! Polyline smoothing into cubic bezier segments.
//!
//! Chord-length-weighted midpoint construction: for each segment the two
//! control points are derived from the midpoints of the three surrounding
//! chords, blended toward the segment ends with a fixed smoothing constant.
//! Pure and stateless.

use serde::{Deserialize, Serialize};

use crate::core::types::PlotPoint;

/// Fixed blend factor between the straight chord and the midpoint offset.
pub const SMOOTH_VALUE: f64 = 0.8;

/// One cubic bezier segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: PlotPoint,
    pub ctrl1: PlotPoint,
    pub ctrl2: PlotPoint,
    pub to: PlotPoint,
}

/// Smooths an ordered point list into one cubic segment per adjacent pair.
///
/// Open curves keep their endpoints: the first segment's first control point
/// is its start point and the last segment's second control point is its end
/// point, so the smoothed path never overshoots the data extremes. Closed
/// curves wrap their neighbor lookup instead.
///
/// Fewer than 3 points yield no segments; the caller falls back to a
/// straight polyline.
#[must_use]
pub fn smooth_polyline(points: &[PlotPoint], closed: bool) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let segment_count = if closed { n } else { n - 1 };
    let mut segments = Vec::with_capacity(segment_count);

    for i in 0..segment_count {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let ctrl1 = match previous_neighbor(points, i, closed) {
            Some(p0) => control_toward_end(p0, p1, p2),
            None => p1,
        };
        let ctrl2 = match next_neighbor(points, i, closed) {
            Some(p3) => control_toward_start(p1, p2, p3),
            None => p2,
        };

        segments.push(CubicSegment {
            from: p1,
            ctrl1,
            ctrl2,
            to: p2,
        });
    }

    segments
}

fn previous_neighbor(points: &[PlotPoint], i: usize, closed: bool) -> Option<PlotPoint> {
    if i > 0 {
        Some(points[i - 1])
    } else if closed {
        Some(points[points.len() - 1])
    } else {
        None
    }
}

fn next_neighbor(points: &[PlotPoint], i: usize, closed: bool) -> Option<PlotPoint> {
    let n = points.len();
    if i + 2 < n {
        Some(points[i + 2])
    } else if closed {
        Some(points[(i + 2) % n])
    } else {
        None
    }
}

/// First control point of the segment `p1 -> p2`, using the previous point.
fn control_toward_end(p0: PlotPoint, p1: PlotPoint, p2: PlotPoint) -> PlotPoint {
    let mid_prev = p0.midpoint(p1);
    let mid_next = p1.midpoint(p2);

    let len_prev = p0.distance_to(p1);
    let len_next = p1.distance_to(p2);
    let total = len_prev + len_next;
    if total == 0.0 {
        return p1;
    }

    let k = len_prev / total;
    let anchor = PlotPoint::new(
        mid_prev.x + (mid_next.x - mid_prev.x) * k,
        mid_prev.y + (mid_next.y - mid_prev.y) * k,
    );
    PlotPoint::new(
        p1.x + (mid_next.x - anchor.x) * SMOOTH_VALUE,
        p1.y + (mid_next.y - anchor.y) * SMOOTH_VALUE,
    )
}

/// Second control point of the segment `p1 -> p2`, using the following point.
fn control_toward_start(p1: PlotPoint, p2: PlotPoint, p3: PlotPoint) -> PlotPoint {
    let mid_prev = p1.midpoint(p2);
    let mid_next = p2.midpoint(p3);

    let len_prev = p1.distance_to(p2);
    let len_next = p2.distance_to(p3);
    let total = len_prev + len_next;
    if total == 0.0 {
        return p2;
    }

    let k = len_prev / total;
    let anchor = PlotPoint::new(
        mid_prev.x + (mid_next.x - mid_prev.x) * k,
        mid_prev.y + (mid_next.y - mid_prev.y) * k,
    );
    PlotPoint::new(
        p2.x + (mid_prev.x - anchor.x) * SMOOTH_VALUE,
        p2.y + (mid_prev.y - anchor.y) * SMOOTH_VALUE,
    )
}
