use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::color::Color;
use crate::core::value::SeriesValue;
use crate::error::{ChartError, ChartResult};

/// One named series owned by the chart.
///
/// `index` is unique, contiguous, and zero-based within the owning
/// [`SeriesSet`]; it is reassigned when a series is removed so indices stay
/// contiguous. Value ordering is the x-axis position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    index: usize,
    name: String,
    values: Vec<SeriesValue>,
    pub main_color: Color,
    pub secondary_color: Color,
}

impl Series {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[SeriesValue] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plain numeric view of the series values.
    #[must_use]
    pub fn plain_values(&self) -> Vec<f64> {
        self.values.iter().map(SeriesValue::plain).collect()
    }
}

/// Insertion-ordered collection of series with contiguous indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    series: Vec<Series>,
    name_lookup: IndexMap<String, usize>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn all(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_lookup.get(name).copied()
    }

    /// Longest value list length across the set.
    #[must_use]
    pub fn max_value_count(&self) -> usize {
        self.series.iter().map(Series::len).max().unwrap_or(0)
    }

    /// Adds a series and returns its assigned index.
    ///
    /// Series names must be unique; a duplicate name is rejected rather than
    /// silently shadowing the existing series.
    pub fn add(&mut self, name: impl Into<String>, values: Vec<SeriesValue>) -> ChartResult<usize> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }
        if self.name_lookup.contains_key(&name) {
            return Err(ChartError::InvalidData(format!(
                "series name `{name}` already exists"
            )));
        }

        let index = self.series.len();
        debug!(index, name = %name, value_count = values.len(), "add series");
        self.name_lookup.insert(name.clone(), index);
        self.series.push(Series {
            index,
            name,
            values,
            main_color: Color::default(),
            secondary_color: Color::rgb(0.85, 0.55, 0.2),
        });
        Ok(index)
    }

    /// Removes a series by index and reassigns the remaining indices so they
    /// stay contiguous and zero-based.
    pub fn remove(&mut self, index: usize) -> ChartResult<Series> {
        if index >= self.series.len() {
            return Err(ChartError::UnknownSeries(index));
        }

        let removed = self.series.remove(index);
        self.name_lookup.shift_remove(removed.name());
        for (new_index, series) in self.series.iter_mut().enumerate() {
            series.index = new_index;
        }
        self.name_lookup.clear();
        for series in &self.series {
            self.name_lookup.insert(series.name.clone(), series.index);
        }
        debug!(index, name = %removed.name, remaining = self.series.len(), "remove series");
        Ok(removed)
    }

    /// Replaces the value list of an existing series.
    pub fn set_values(&mut self, index: usize, values: Vec<SeriesValue>) -> ChartResult<()> {
        let Some(series) = self.series.get_mut(index) else {
            return Err(ChartError::UnknownSeries(index));
        };
        debug!(index, value_count = values.len(), "set series values");
        series.values = values;
        Ok(())
    }

    /// Replaces both colors of an existing series.
    pub fn set_colors(&mut self, index: usize, main: Color, secondary: Color) -> ChartResult<()> {
        main.validate()?;
        secondary.validate()?;
        let Some(series) = self.series.get_mut(index) else {
            return Err(ChartError::UnknownSeries(index));
        };
        series.main_color = main;
        series.secondary_color = secondary;
        Ok(())
    }

    /// Flattened plain values across every series, in series order.
    ///
    /// This is the value union the direction classifier and axis resolver
    /// consume once per layout pass.
    #[must_use]
    pub fn flattened_plain_values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.series.iter().map(Series::len).sum());
        for series in &self.series {
            out.extend(series.values.iter().map(SeriesValue::plain));
        }
        out
    }

    /// Drops values that are not finite, logging how many were filtered.
    ///
    /// Mirrors the canonicalize-on-set policy used for host-supplied data:
    /// malformed samples are dropped, never propagated into layout math.
    pub fn canonicalize(&mut self) {
        for series in &mut self.series {
            let original = series.values.len();
            series.values.retain(|value| value.plain().is_finite());
            let filtered = original - series.values.len();
            if filtered > 0 {
                warn!(
                    index = series.index,
                    filtered, "filtered non-finite series values"
                );
            }
        }
    }
}
