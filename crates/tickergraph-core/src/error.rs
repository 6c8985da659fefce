use thiserror::Error;

/// Validation errors for symbols, configuration, and bar data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("chart width must be greater than zero")]
    InvalidWidth,
    #[error("lookback days {value} outside valid range {min}-{max}")]
    InvalidLookback { value: u16, min: u16, max: u16 },

    #[error("bar values must be finite")]
    NonFiniteBarValue,
    #[error("bar high must be >= low")]
    InvalidBarRange,
}

/// Transport failure for one entity's backing page. Fatal for that entity
/// only; the caller skips it and the run continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream returned status {status}")]
    Status { status: u16 },
}

/// A single field could not be read from a fetched page. Recovered locally
/// as a sentinel value; never surfaced as a failure of the whole record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("locator matched nothing on the page")]
    NotFound,
    #[error("locator could not be evaluated: {0}")]
    BadLocator(String),
}

/// The market open/closed state could not be determined. Fatal for the whole
/// run: every field locator choice depends on it and there is no safe default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketStateError {
    #[error("could not fetch the market status page: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not read the market status from the page: {0}")]
    Extract(#[from] ExtractError),
    #[error("market status text '{text}' names neither open nor closed")]
    Unrecognized { text: String },
}

/// Historical series fetch failures. Recovered per symbol.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not fetch history: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not parse history payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("history source returned no usable bars")]
    NoData,
}

/// Trend chart failures. Skip only that symbol's chart, never the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("no historical data to chart")]
    NoData,
    #[error("width {total_width} leaves no plot columns after {overhead} columns of overhead")]
    Layout {
        total_width: usize,
        overhead: usize,
    },
}
