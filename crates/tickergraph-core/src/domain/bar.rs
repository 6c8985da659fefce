use serde::Serialize;
use time::Date;

use crate::ValidationError;

use super::symbol::Symbol;

/// One trading day's low/close/high price triple.
///
/// Upstream feeds occasionally disagree about field ordering, so the
/// constructor enforces `low <= high` and clamps `close` into that range
/// rather than trusting the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBar {
    date: Date,
    low: f64,
    close: f64,
    high: f64,
}

impl DailyBar {
    pub fn new(date: Date, low: f64, close: f64, high: f64) -> Result<Self, ValidationError> {
        if !(low.is_finite() && close.is_finite() && high.is_finite()) {
            return Err(ValidationError::NonFiniteBarValue);
        }
        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        Ok(Self {
            date,
            low,
            close: close.clamp(low, high),
            high,
        })
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn low(&self) -> f64 {
        self.low
    }

    pub const fn close(&self) -> f64 {
        self.close
    }

    pub const fn high(&self) -> f64 {
        self.high
    }
}

/// Ascending-by-date sequence of daily bars for one security. Created per
/// request and discarded after rendering; nothing is cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    symbol: Symbol,
    bars: Vec<DailyBar>,
}

impl TrendSeries {
    /// Build a series, sorting bars into ascending date order.
    pub fn new(symbol: Symbol, mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(DailyBar::date);
        Self { symbol, bars }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Smallest low across the whole series.
    pub fn global_low(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(DailyBar::low)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Largest high across the whole series.
    pub fn global_high(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(DailyBar::high)
            .max_by(|a, b| a.total_cmp(b))
    }
}
