//! # Tickergraph Core
//!
//! Quote resolution and trend charting for the tickergraph CLI.
//!
//! The two load-bearing pieces are the market-state-aware field resolution
//! pipeline and the bounded-width trend renderer:
//!
//! - [`market_state`] probes whether the market is open or closed; the state
//!   is threaded as a plain value through every resolution call.
//! - [`locator`] holds the single field-locator table keyed by
//!   (entity kind, market state, page field).
//! - [`resolver`] turns a fetched page into a typed quote record with
//!   per-field degradation: one broken field becomes a sentinel, never a
//!   failed record.
//! - [`history`] fetches ascending daily low/close/high series.
//! - [`chart`] maps a series onto a fixed number of terminal columns with
//!   exact column accounting.
//!
//! Fetching and extraction mechanics stay behind the [`page`] traits so that
//! swapping the data provider never touches the resolver or the renderer.
//!
//! Failure isolation follows the smallest-unit rule: a field degrades to a
//! sentinel, an entity degrades to an error record, a chart degrades to a
//! skipped chart. Only an undeterminable market state fails the whole run.

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod http_client;
pub mod locator;
pub mod market_state;
pub mod page;
pub mod resolver;

pub use chart::{fixed_overhead, render};
pub use config::{RunConfig, MAX_LOOKBACK_DAYS, MIN_LOOKBACK_DAYS};
pub use domain::{
    DailyBar, EntityKind, FieldKey, FieldValue, IndexQuote, MarketIndex, PageField, QuoteStatus,
    RecordFields, Symbol, SymbolQuote, TrendSeries, SENTINEL,
};
pub use error::{
    ChartError, ExtractError, FetchError, HistoryError, MarketStateError, ValidationError,
};
pub use history::{ChartApiSource, SeriesSource};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use locator::{FieldLocatorTable, Locator};
pub use market_state::{MarketState, MarketStateProbe};
pub use page::{
    index_page_url, symbol_page_url, HtmlPage, HttpPageSource, PageSource, QuotePage,
    MARKET_STATUS_URL,
};
pub use resolver::{normalize, resolve_index, resolve_symbol};
