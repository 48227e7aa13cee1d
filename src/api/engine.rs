use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::build::{BuildContext, RADIAL_RADIUS_RATIO, build_chart_geometry};
use crate::core::aggregate::{
    full_stacked_percents, padded_plain_matrix, signed_stack_extents, stacked_prefix_sums,
    waterfall_running_total,
};
use crate::core::axis::{AxisContext, AxisOrientation, resolve_axis};
use crate::core::direction::classify_direction;
use crate::core::frame::{FlowDirection, PlotFrame};
use crate::core::series::SeriesSet;
use crate::core::style::{ChartStyle, GeometryFamily, Stacking};
use crate::core::types::{PlotPoint, Viewport};
use crate::core::value::SeriesValue;
use crate::error::{ChartError, ChartResult};

use super::config::LayoutConfig;
use super::snapshot::{LayoutSnapshot, axis_tick_labels};

/// Main layout facade consumed by host applications.
///
/// The engine owns the series set and configuration, tracks a dirty flag,
/// and rebuilds the full [`LayoutSnapshot`] on demand. Change notification
/// is explicit: hosts mutate, then call [`ChartLayoutEngine::compute_layout`]
/// once per invalidation instead of wiring property bindings.
#[derive(Debug)]
pub struct ChartLayoutEngine {
    config: LayoutConfig,
    series: SeriesSet,
    metadata: IndexMap<String, String>,
    dirty: bool,
    snapshot: Option<LayoutSnapshot>,
}

impl ChartLayoutEngine {
    pub fn new(config: LayoutConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            series: SeriesSet::new(),
            metadata: IndexMap::new(),
            dirty: true,
            snapshot: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Latest computed snapshot, if any pass has run since the last change.
    #[must_use]
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        if self.dirty { None } else { self.snapshot.as_ref() }
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        if self.config.style != style {
            debug!(?style, "set chart style");
            self.config.style = style;
            self.invalidate();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        if self.config.viewport != viewport {
            self.config.viewport = viewport;
            self.invalidate();
        }
        Ok(())
    }

    /// Replaces the whole configuration after validating it.
    pub fn set_config(&mut self, config: LayoutConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    pub fn add_series(
        &mut self,
        name: impl Into<String>,
        values: Vec<SeriesValue>,
    ) -> ChartResult<usize> {
        let index = self.series.add(name, values)?;
        self.invalidate();
        Ok(index)
    }

    pub fn remove_series(&mut self, index: usize) -> ChartResult<()> {
        self.series.remove(index)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_series_values(&mut self, index: usize, values: Vec<SeriesValue>) -> ChartResult<()> {
        self.series.set_values(index, values)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn series_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Marks the engine dirty; the next [`Self::compute_layout`] rebuilds.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Runs one full layout pass and returns the fresh snapshot.
    ///
    /// The pass is synchronous and atomic: aggregation first, then direction
    /// classification, axis resolution, and per-series geometry builds. A
    /// clean engine returns the cached snapshot untouched.
    pub fn compute_layout(&mut self) -> ChartResult<&LayoutSnapshot> {
        if !self.dirty && self.snapshot.is_some() {
            trace!("layout unchanged, returning cached snapshot");
            return Ok(self.snapshot.as_ref().ok_or_else(unreachable_snapshot)?);
        }

        let style = self.config.style;
        let frame = PlotFrame::from_viewport(self.config.viewport);
        debug!(
            ?style,
            series_count = self.series.len(),
            value_count = self.series.max_value_count(),
            width = self.config.viewport.width,
            height = self.config.viewport.height,
            "compute layout"
        );

        let classification_values = match style.geometry_family() {
            GeometryFamily::Waterfall => self
                .series
                .get(0)
                .map(|series| series.plain_values())
                .unwrap_or_default(),
            _ => self.series.flattened_plain_values(),
        };
        let direction = classify_direction(&classification_values, style);

        let axis_values = self.axis_value_set(style);
        let (orientation, origin, radius) = value_axis_placement(&frame, style, &self.config);
        let axis_context = AxisContext {
            radius,
            font_height: self.config.font.height_px,
            origin,
            orientation,
            split_sides: style.is_bar_family() && direction.is_mixed(),
            zero_on_tick: style.geometry_family() == GeometryFamily::Radar,
            explicit_max: if self.config.auto_adjust_range {
                None
            } else {
                Some(self.config.normalized_explicit_max())
            },
        };
        let axis = resolve_axis(&axis_values, &axis_context);

        let build_context = BuildContext {
            axis: &axis,
            direction,
            frame: &frame,
            style,
            boundary: self.config.boundary_mode,
            flow: self.config.flow_direction,
            orientation,
            axis_origin: origin,
            show_value_labels: self.config.show_value_labels,
        };
        let series = build_chart_geometry(&self.series, &build_context);

        let snapshot = LayoutSnapshot {
            direction,
            axis,
            series,
            axis_tick_labels: axis_tick_labels(&axis, &self.config.custom_axis_labels),
        };
        debug!(
            ?direction,
            line_count = snapshot.axis.line_count,
            step = snapshot.axis.step_value,
            "layout pass complete"
        );

        self.snapshot = Some(snapshot);
        self.dirty = false;
        Ok(self.snapshot.as_ref().ok_or_else(unreachable_snapshot)?)
    }

    /// Computes (if needed) and serializes the current snapshot.
    pub fn snapshot_json_pretty(&mut self) -> ChartResult<String> {
        self.compute_layout()?.to_json_pretty()
    }

    /// Value set driving the axis range for the active style.
    ///
    /// Stacked styles must cover every intermediate cumulative extent, not
    /// just the raw values; waterfall feeds the running-total envelope.
    fn axis_value_set(&self, style: ChartStyle) -> Vec<f64> {
        let matrix = padded_plain_matrix(self.series.all());
        match (style.geometry_family(), style.stacking()) {
            (GeometryFamily::Waterfall, _) => {
                let values = self
                    .series
                    .get(0)
                    .map(|series| series.plain_values())
                    .unwrap_or_default();
                if values.is_empty() {
                    Vec::new()
                } else {
                    let (max, min) = waterfall_running_total(&values);
                    vec![max, min]
                }
            }
            (GeometryFamily::Line | GeometryFamily::Area, Stacking::Stacked) => {
                stacked_prefix_sums(&matrix).into_iter().flatten().collect()
            }
            (GeometryFamily::Line | GeometryFamily::Area, Stacking::FullStacked) => {
                stacked_prefix_sums(&full_stacked_percents(&matrix))
                    .into_iter()
                    .flatten()
                    .collect()
            }
            (GeometryFamily::Column | GeometryFamily::Bar, Stacking::Stacked) => {
                signed_stack_extents(&matrix)
            }
            (GeometryFamily::Column | GeometryFamily::Bar, Stacking::FullStacked) => {
                signed_stack_extents(&full_stacked_percents(&matrix))
            }
            _ => matrix.into_iter().flatten().collect(),
        }
    }
}

/// Orientation, origin, and pixel radius of the value axis for one style.
fn value_axis_placement(
    frame: &PlotFrame,
    style: ChartStyle,
    config: &LayoutConfig,
) -> (AxisOrientation, PlotPoint, f64) {
    match style.geometry_family() {
        GeometryFamily::Bar => match config.flow_direction {
            FlowDirection::LeftToRight => (
                AxisOrientation::Horizontal,
                frame.bottom_left(),
                frame.width,
            ),
            FlowDirection::RightToLeft => (
                AxisOrientation::HorizontalReversed,
                PlotPoint::new(frame.right(), frame.bottom()),
                frame.width,
            ),
        },
        GeometryFamily::Radar => (
            AxisOrientation::Vertical,
            frame.center(),
            frame.width.min(frame.height) * 0.5 * RADIAL_RADIUS_RATIO,
        ),
        _ => (
            AxisOrientation::Vertical,
            frame.bottom_left(),
            frame.height,
        ),
    }
}

fn unreachable_snapshot() -> ChartError {
    ChartError::InvalidData("layout snapshot missing after compute".to_owned())
}
