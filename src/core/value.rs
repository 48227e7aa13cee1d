use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One data sample owned by a series.
///
/// `plain` feeds every generic style. The optional financial fields exist for
/// hosts that carry richer samples through the layout pass; the layout engine
/// itself only validates them. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    plain: f64,
    #[serde(default)]
    volume: Option<f64>,
    #[serde(default)]
    open: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    close: Option<f64>,
    #[serde(default)]
    custom_label: Option<String>,
}

impl SeriesValue {
    /// Builds a validated plain value.
    pub fn new(plain: f64) -> ChartResult<Self> {
        if !plain.is_finite() {
            return Err(ChartError::InvalidData(
                "series value must be finite".to_owned(),
            ));
        }
        Ok(Self {
            plain,
            volume: None,
            open: None,
            high: None,
            low: None,
            close: None,
            custom_label: None,
        })
    }

    /// Builds a validated value carrying open/high/low/close fields.
    ///
    /// Invariants mirror the usual financial-sample rules:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn with_ohlc(
        plain: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> ChartResult<Self> {
        if !plain.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }
        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }
        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }
        if let Some(volume) = volume {
            if !volume.is_finite() || volume < 0.0 {
                return Err(ChartError::InvalidData(
                    "volume must be finite and >= 0".to_owned(),
                ));
            }
        }

        Ok(Self {
            plain,
            volume,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            custom_label: None,
        })
    }

    /// Returns a copy carrying a host-supplied label override.
    #[must_use]
    pub fn with_custom_label(mut self, label: impl Into<String>) -> Self {
        self.custom_label = Some(label.into());
        self
    }

    /// Zero-valued placeholder used when padding shorter series.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            plain: 0.0,
            volume: None,
            open: None,
            high: None,
            low: None,
            close: None,
            custom_label: None,
        }
    }

    #[must_use]
    pub fn plain(&self) -> f64 {
        self.plain
    }

    #[must_use]
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    #[must_use]
    pub fn open(&self) -> Option<f64> {
        self.open
    }

    #[must_use]
    pub fn high(&self) -> Option<f64> {
        self.high
    }

    #[must_use]
    pub fn low(&self) -> Option<f64> {
        self.low
    }

    #[must_use]
    pub fn close(&self) -> Option<f64> {
        self.close
    }

    #[must_use]
    pub fn custom_label(&self) -> Option<&str> {
        self.custom_label.as_deref()
    }
}
