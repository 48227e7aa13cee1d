use serde::{Deserialize, Serialize};

/// Closed set of chart styles understood by the layout engine.
///
/// Every layout branch downstream is driven by this tag; hosts select one per
/// chart. Style queries are exposed through the orthogonal accessors below
/// (`geometry_family`, `stacking`, `is_smooth`, `has_markers`) so geometry
/// builders dispatch on families instead of duplicating per-variant code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartStyle {
    #[default]
    Lines,
    StackedLines,
    FullStackedLines,
    LinesWithMarkers,
    StackedLinesWithMarkers,
    FullStackedLinesWithMarkers,
    SmoothLines,
    SmoothLinesWithMarkers,
    Area,
    StackedArea,
    FullStackedArea,
    SmoothArea,
    Columns,
    StackedColumns,
    FullStackedColumns,
    Bars,
    StackedBars,
    FullStackedBars,
    Waterfall,
    Radar,
    RadarWithMarkers,
    RadarArea,
    Bubbles,
    SolidPie,
    SlicedPie,
    Doughnut,
    Funnel,
}

/// Geometry family a style renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryFamily {
    Line,
    Area,
    Column,
    Bar,
    Waterfall,
    Radar,
    Pie,
    Bubble,
    Funnel,
}

/// Cross-series aggregation mode orthogonal to the geometry family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stacking {
    None,
    Stacked,
    FullStacked,
}

impl ChartStyle {
    #[must_use]
    pub fn geometry_family(self) -> GeometryFamily {
        use ChartStyle::*;
        match self {
            Lines | StackedLines | FullStackedLines | LinesWithMarkers
            | StackedLinesWithMarkers | FullStackedLinesWithMarkers | SmoothLines
            | SmoothLinesWithMarkers => GeometryFamily::Line,
            Area | StackedArea | FullStackedArea | SmoothArea => GeometryFamily::Area,
            Columns | StackedColumns | FullStackedColumns => GeometryFamily::Column,
            Bars | StackedBars | FullStackedBars => GeometryFamily::Bar,
            Waterfall => GeometryFamily::Waterfall,
            Radar | RadarWithMarkers | RadarArea => GeometryFamily::Radar,
            Bubbles => GeometryFamily::Bubble,
            SolidPie | SlicedPie | Doughnut => GeometryFamily::Pie,
            Funnel => GeometryFamily::Funnel,
        }
    }

    #[must_use]
    pub fn stacking(self) -> Stacking {
        use ChartStyle::*;
        match self {
            StackedLines | StackedLinesWithMarkers | StackedArea | StackedColumns | StackedBars => {
                Stacking::Stacked
            }
            FullStackedLines | FullStackedLinesWithMarkers | FullStackedArea
            | FullStackedColumns | FullStackedBars => Stacking::FullStacked,
            _ => Stacking::None,
        }
    }

    #[must_use]
    pub fn is_smooth(self) -> bool {
        matches!(
            self,
            ChartStyle::SmoothLines | ChartStyle::SmoothLinesWithMarkers | ChartStyle::SmoothArea
        )
    }

    #[must_use]
    pub fn has_markers(self) -> bool {
        matches!(
            self,
            ChartStyle::LinesWithMarkers
                | ChartStyle::StackedLinesWithMarkers
                | ChartStyle::FullStackedLinesWithMarkers
                | ChartStyle::SmoothLinesWithMarkers
                | ChartStyle::RadarWithMarkers
        )
    }

    /// Styles whose value axis runs horizontally (bars grow leftward or
    /// rightward instead of up).
    #[must_use]
    pub fn is_bar_family(self) -> bool {
        self.geometry_family() == GeometryFamily::Bar
    }

    /// Styles laid out in polar coordinates around the plot center.
    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(
            self.geometry_family(),
            GeometryFamily::Radar | GeometryFamily::Pie
        )
    }

    /// Styles that consume the resolved value axis. Pie and funnel layouts
    /// derive everything from value ratios instead.
    #[must_use]
    pub fn uses_value_axis(self) -> bool {
        !matches!(
            self.geometry_family(),
            GeometryFamily::Pie | GeometryFamily::Funnel
        )
    }
}
