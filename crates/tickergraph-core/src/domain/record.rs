use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::field::{FieldKey, FieldValue};
use super::symbol::Symbol;

/// Whether a resolved record represents a single security or a market index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Symbol,
    Index,
}

/// The three tracked market indexes and their provider page slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarketIndex {
    Dow,
    Nasdaq,
    Sp500,
}

impl MarketIndex {
    pub const ALL: [MarketIndex; 3] = [Self::Dow, Self::Nasdaq, Self::Sp500];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dow => "DOW",
            Self::Nasdaq => "NASDAQ",
            Self::Sp500 => "S&P500",
        }
    }

    pub const fn page_slug(self) -> &'static str {
        match self {
            Self::Dow => "djia",
            Self::Nasdaq => "comp",
            Self::Sp500 => "spx",
        }
    }
}

impl Display for MarketIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Record-level status. `Error` means the backing page could not be fetched
/// at all; per-field failures leave the status untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Ok,
    Error,
}

impl QuoteStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Row-sink view of a record: ordered field enumeration plus keyed access,
/// so an external exporter can serialize without knowing the format.
pub trait RecordFields {
    fn field_names(&self) -> Vec<FieldKey>;
    fn get(&self, key: FieldKey) -> Option<String>;
}

/// Fully resolved security quote. One field per `FieldKey`; each data field
/// is either a normalized value or the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolQuote {
    pub symbol: Symbol,
    pub status: QuoteStatus,
    pub fullname: FieldValue,
    pub latest_price: FieldValue,
    pub change: FieldValue,
    pub change_percent: FieldValue,
    pub day_low: FieldValue,
    pub day_high: FieldValue,
    pub week52_low: FieldValue,
    pub week52_high: FieldValue,
    pub week52_change_percent: FieldValue,
    pub ytd_change_percent: FieldValue,
    pub one_year_change_percent: FieldValue,
    pub time_stamp: FieldValue,
}

impl SymbolQuote {
    /// Error record for a security whose page could not be fetched: only the
    /// identifying key is populated.
    pub fn unavailable(symbol: Symbol) -> Self {
        Self {
            symbol,
            status: QuoteStatus::Error,
            fullname: FieldValue::Sentinel,
            latest_price: FieldValue::Sentinel,
            change: FieldValue::Sentinel,
            change_percent: FieldValue::Sentinel,
            day_low: FieldValue::Sentinel,
            day_high: FieldValue::Sentinel,
            week52_low: FieldValue::Sentinel,
            week52_high: FieldValue::Sentinel,
            week52_change_percent: FieldValue::Sentinel,
            ytd_change_percent: FieldValue::Sentinel,
            one_year_change_percent: FieldValue::Sentinel,
            time_stamp: FieldValue::Sentinel,
        }
    }
}

impl RecordFields for SymbolQuote {
    fn field_names(&self) -> Vec<FieldKey> {
        vec![
            FieldKey::Symbol,
            FieldKey::Fullname,
            FieldKey::LatestPrice,
            FieldKey::Change,
            FieldKey::ChangePercent,
            FieldKey::DayLow,
            FieldKey::DayHigh,
            FieldKey::Week52Low,
            FieldKey::Week52High,
            FieldKey::Week52ChangePercent,
            FieldKey::YtdChangePercent,
            FieldKey::OneYearChangePercent,
            FieldKey::TimeStamp,
            FieldKey::Status,
        ]
    }

    fn get(&self, key: FieldKey) -> Option<String> {
        let value = match key {
            FieldKey::Symbol => return Some(self.symbol.as_str().to_owned()),
            FieldKey::Status => return Some(self.status.as_str().to_owned()),
            FieldKey::Fullname => &self.fullname,
            FieldKey::LatestPrice => &self.latest_price,
            FieldKey::Change => &self.change,
            FieldKey::ChangePercent => &self.change_percent,
            FieldKey::DayLow => &self.day_low,
            FieldKey::DayHigh => &self.day_high,
            FieldKey::Week52Low => &self.week52_low,
            FieldKey::Week52High => &self.week52_high,
            FieldKey::Week52ChangePercent => &self.week52_change_percent,
            FieldKey::YtdChangePercent => &self.ytd_change_percent,
            FieldKey::OneYearChangePercent => &self.one_year_change_percent,
            FieldKey::TimeStamp => &self.time_stamp,
            FieldKey::Index => return None,
        };
        Some(value.as_str().to_owned())
    }
}

/// Fully resolved market index quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexQuote {
    pub index: MarketIndex,
    pub status: QuoteStatus,
    pub latest_price: FieldValue,
    pub change: FieldValue,
    pub change_percent: FieldValue,
    pub week52_low: FieldValue,
    pub week52_high: FieldValue,
    pub ytd_change_percent: FieldValue,
    pub one_year_change_percent: FieldValue,
    pub time_stamp: FieldValue,
}

impl IndexQuote {
    /// Error record for an index whose page could not be fetched.
    pub fn unavailable(index: MarketIndex) -> Self {
        Self {
            index,
            status: QuoteStatus::Error,
            latest_price: FieldValue::Sentinel,
            change: FieldValue::Sentinel,
            change_percent: FieldValue::Sentinel,
            week52_low: FieldValue::Sentinel,
            week52_high: FieldValue::Sentinel,
            ytd_change_percent: FieldValue::Sentinel,
            one_year_change_percent: FieldValue::Sentinel,
            time_stamp: FieldValue::Sentinel,
        }
    }
}

impl RecordFields for IndexQuote {
    fn field_names(&self) -> Vec<FieldKey> {
        vec![
            FieldKey::Index,
            FieldKey::LatestPrice,
            FieldKey::Change,
            FieldKey::ChangePercent,
            FieldKey::Week52Low,
            FieldKey::Week52High,
            FieldKey::YtdChangePercent,
            FieldKey::OneYearChangePercent,
            FieldKey::TimeStamp,
            FieldKey::Status,
        ]
    }

    fn get(&self, key: FieldKey) -> Option<String> {
        let value = match key {
            FieldKey::Index => return Some(self.index.display_name().to_owned()),
            FieldKey::Status => return Some(self.status.as_str().to_owned()),
            FieldKey::LatestPrice => &self.latest_price,
            FieldKey::Change => &self.change,
            FieldKey::ChangePercent => &self.change_percent,
            FieldKey::Week52Low => &self.week52_low,
            FieldKey::Week52High => &self.week52_high,
            FieldKey::YtdChangePercent => &self.ytd_change_percent,
            FieldKey::OneYearChangePercent => &self.one_year_change_percent,
            FieldKey::TimeStamp => &self.time_stamp,
            _ => return None,
        };
        Some(value.as_str().to_owned())
    }
}
