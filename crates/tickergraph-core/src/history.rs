//! Historical daily price series.
//!
//! The series source contract is deliberately thin: "ascending daily bars or
//! a typed failure". The chart renderer depends only on that shape, never on
//! the upstream mechanics.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::domain::{DailyBar, Symbol, TrendSeries};
use crate::error::{FetchError, HistoryError};
use crate::http_client::{HttpClient, HttpRequest};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Time-series data source contract.
pub trait SeriesSource: Send + Sync {
    fn fetch<'a>(
        &'a self,
        symbol: &'a Symbol,
        lookback_days: u16,
    ) -> Pin<Box<dyn Future<Output = Result<TrendSeries, HistoryError>> + Send + 'a>>;
}

/// Daily-chart JSON adapter over the shared HTTP transport.
pub struct ChartApiSource {
    http: Arc<dyn HttpClient>,
    base_url: String,
    token: String,
    timeout_ms: u64,
}

impl ChartApiSource {
    pub fn new(http: Arc<dyn HttpClient>, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: String::from("https://cloud.iexapis.com/stable"),
            token: token.into(),
            timeout_ms: 10_000,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint(&self, symbol: &Symbol, lookback_days: u16) -> String {
        format!(
            "{}/stock/{}/chart/{}d?token={}",
            self.base_url,
            urlencoding::encode(&symbol.as_str().to_ascii_lowercase()),
            lookback_days,
            urlencoding::encode(&self.token)
        )
    }
}

impl SeriesSource for ChartApiSource {
    fn fetch<'a>(
        &'a self,
        symbol: &'a Symbol,
        lookback_days: u16,
    ) -> Pin<Box<dyn Future<Output = Result<TrendSeries, HistoryError>> + Send + 'a>> {
        Box::pin(async move {
            let endpoint = self.endpoint(symbol, lookback_days);
            debug!("fetching history: {endpoint}");

            let request = HttpRequest::get(&endpoint).with_timeout_ms(self.timeout_ms);
            let response = self
                .http
                .execute(request)
                .await
                .map_err(|e| FetchError::Transport(e.message().to_owned()))?;

            if !response.is_success() {
                return Err(HistoryError::Fetch(FetchError::Status {
                    status: response.status,
                }));
            }

            parse_series(symbol, &response.body)
        })
    }
}

/// Decode a chart payload into an ascending series. Days with incomplete or
/// inverted prices are dropped; a series with no usable days is `NoData`.
pub fn parse_series(symbol: &Symbol, body: &str) -> Result<TrendSeries, HistoryError> {
    let days: Vec<ChartDayPayload> = serde_json::from_str(body)?;

    let bars: Vec<DailyBar> = days
        .into_iter()
        .filter_map(|day| {
            let date = Date::parse(&day.date, DATE_FORMAT).ok()?;
            DailyBar::new(date, day.low?, day.close?, day.high?).ok()
        })
        .collect();

    if bars.is_empty() {
        return Err(HistoryError::NoData);
    }

    debug!("parsed {} usable trading days for {symbol}", bars.len());
    Ok(TrendSeries::new(symbol.clone(), bars))
}

#[derive(Debug, Deserialize)]
struct ChartDayPayload {
    date: String,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    close: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
}
