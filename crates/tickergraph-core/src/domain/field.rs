use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Placeholder shown for a field that could not be resolved.
pub const SENTINEL: &str = "---";

/// Stable string identifiers for every exportable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKey {
    Symbol,
    Index,
    Fullname,
    LatestPrice,
    Change,
    ChangePercent,
    DayLow,
    DayHigh,
    Week52Low,
    Week52High,
    Week52ChangePercent,
    YtdChangePercent,
    OneYearChangePercent,
    TimeStamp,
    Status,
}

impl FieldKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Index => "index",
            Self::Fullname => "fullname",
            Self::LatestPrice => "latestPrice",
            Self::Change => "change",
            Self::ChangePercent => "changePercent",
            Self::DayLow => "dayLow",
            Self::DayHigh => "dayHigh",
            Self::Week52Low => "week52Low",
            Self::Week52High => "week52High",
            Self::Week52ChangePercent => "week52ChangePercent",
            Self::YtdChangePercent => "ytdChangePercent",
            Self::OneYearChangePercent => "oneYearChangePercent",
            Self::TimeStamp => "timeStamp",
            Self::Status => "status",
        }
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields physically located on a quote page. Range fields split into two
/// record fields (low/high) at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageField {
    LatestPrice,
    Change,
    ChangePercent,
    Week52Range,
    DayRange,
    YtdChangePercent,
    OneYearChangePercent,
    TimeStamp,
    Fullname,
}

impl PageField {
    /// Page fields a security quote must resolve.
    pub const fn required_for_symbol() -> &'static [PageField] {
        &[
            Self::Fullname,
            Self::LatestPrice,
            Self::Change,
            Self::ChangePercent,
            Self::DayRange,
            Self::Week52Range,
            Self::YtdChangePercent,
            Self::OneYearChangePercent,
            Self::TimeStamp,
        ]
    }

    /// Page fields an index quote must resolve. Indexes carry no company
    /// name and no day range on the provider pages.
    pub const fn required_for_index() -> &'static [PageField] {
        &[
            Self::LatestPrice,
            Self::Change,
            Self::ChangePercent,
            Self::Week52Range,
            Self::YtdChangePercent,
            Self::OneYearChangePercent,
            Self::TimeStamp,
        ]
    }
}

/// A resolved field: either a normalized value or the sentinel marking
/// "unavailable". Sentinel fields never abort the record they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FieldValue {
    Value(String),
    Sentinel,
}

impl FieldValue {
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(text) => text,
            Self::Sentinel => SENTINEL,
        }
    }

    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }

    /// Numeric view of the field. Sentinels and non-numeric values yield
    /// `None` so display-time arithmetic degrades instead of failing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(text) => text.parse::<f64>().ok(),
            Self::Sentinel => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        value.as_str().to_owned()
    }
}
