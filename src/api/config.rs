use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::frame::{BoundaryMode, FlowDirection};
use crate::core::style::ChartStyle;
use crate::core::types::{FontMetrics, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fallback axis maximum applied when an explicit range is missing or
/// malformed.
pub const DEFAULT_EXPLICIT_MAX: f64 = 100.0;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: ChartStyle,
    /// When `false`, the value axis is pinned to the explicit maxima below
    /// instead of being fitted to the data.
    #[serde(default = "default_auto_adjust_range")]
    pub auto_adjust_range: bool,
    /// Explicit maximum for horizontal value axes (bar family).
    #[serde(default = "default_explicit_max")]
    pub explicit_max_x: f64,
    /// Explicit maximum for vertical value axes.
    #[serde(default = "default_explicit_max")]
    pub explicit_max_y: f64,
    #[serde(default)]
    pub boundary_mode: BoundaryMode,
    #[serde(default)]
    pub show_value_labels: bool,
    /// Tick-label overrides applied index-wise; surplus entries are ignored.
    #[serde(default)]
    pub custom_axis_labels: Vec<String>,
    #[serde(default)]
    pub flow_direction: FlowDirection,
    #[serde(default)]
    pub font: FontMetrics,
}

impl LayoutConfig {
    /// Creates a minimal config for one style and viewport.
    #[must_use]
    pub fn new(viewport: Viewport, style: ChartStyle) -> Self {
        Self {
            viewport,
            style,
            auto_adjust_range: default_auto_adjust_range(),
            explicit_max_x: default_explicit_max(),
            explicit_max_y: default_explicit_max(),
            boundary_mode: BoundaryMode::default(),
            show_value_labels: false,
            custom_axis_labels: Vec::new(),
            flow_direction: FlowDirection::default(),
            font: FontMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_explicit_range(mut self, explicit_max_x: f64, explicit_max_y: f64) -> Self {
        self.auto_adjust_range = false;
        self.explicit_max_x = explicit_max_x;
        self.explicit_max_y = explicit_max_y;
        self
    }

    #[must_use]
    pub fn with_boundary_mode(mut self, boundary_mode: BoundaryMode) -> Self {
        self.boundary_mode = boundary_mode;
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, show_value_labels: bool) -> Self {
        self.show_value_labels = show_value_labels;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.font.validate()?;
        Ok(())
    }

    /// Explicit maximum for the value axis of the active style, coerced to
    /// the documented default when malformed.
    ///
    /// Coercion instead of an error mirrors the property-coercion behavior
    /// hosts expect from chart range settings.
    #[must_use]
    pub fn normalized_explicit_max(&self) -> f64 {
        let raw = if self.style.is_bar_family() {
            self.explicit_max_x
        } else {
            self.explicit_max_y
        };
        if raw.is_finite() && raw > 0.0 {
            raw
        } else {
            warn!(raw, "explicit axis maximum coerced to default");
            DEFAULT_EXPLICIT_MAX
        }
    }
}

fn default_auto_adjust_range() -> bool {
    true
}

fn default_explicit_max() -> f64 {
    DEFAULT_EXPLICIT_MAX
}
