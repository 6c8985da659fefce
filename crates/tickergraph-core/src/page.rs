//! Page-extraction collaborator boundary.
//!
//! The resolver depends only on [`QuotePage::extract`] and never on how pages
//! are fetched or what the locator syntax means. Swapping the data provider
//! touches this module alone.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;

use crate::domain::{MarketIndex, Symbol};
use crate::error::{ExtractError, FetchError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::locator::Locator;

const PROVIDER_BASE_URL: &str = "https://www.marketwatch.com/investing";

/// Page the market open/closed banner is read from.
pub const MARKET_STATUS_URL: &str = "https://www.marketwatch.com/investing/index/comp";

pub fn symbol_page_url(symbol: &Symbol) -> String {
    format!(
        "{PROVIDER_BASE_URL}/stock/{}",
        urlencoding::encode(&symbol.as_str().to_ascii_lowercase())
    )
}

pub fn index_page_url(index: MarketIndex) -> String {
    format!("{PROVIDER_BASE_URL}/index/{}", index.page_slug())
}

/// A fetched page a field value can be pulled out of.
pub trait QuotePage {
    /// Extract the text a locator points at. Failure here is per-field and
    /// recoverable; the resolver degrades the field to a sentinel.
    fn extract(&self, locator: &Locator) -> Result<String, ExtractError>;
}

/// Transport for quote pages: returns the raw page body or a typed failure
/// for that one entity.
pub trait PageSource: Send + Sync {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>>;
}

/// Production page source over the shared HTTP transport.
pub struct HttpPageSource {
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl HttpPageSource {
    pub fn new(http: Arc<dyn HttpClient>, timeout_ms: u64) -> Self {
        Self { http, timeout_ms }
    }
}

impl PageSource for HttpPageSource {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            debug!("fetching quote page: {url}");
            let request = HttpRequest::get(url)
                .with_header("user-agent", "Mozilla/5.0")
                .with_timeout_ms(self.timeout_ms);

            let response = self
                .http
                .execute(request)
                .await
                .map_err(|e| FetchError::Transport(e.message().to_owned()))?;

            if !response.is_success() {
                return Err(FetchError::Status {
                    status: response.status,
                });
            }

            Ok(response.body)
        })
    }
}

/// Parsed HTML page. Locators are CSS selectors here; only this type knows
/// that.
pub struct HtmlPage {
    document: scraper::Html,
}

impl HtmlPage {
    pub fn parse(body: &str) -> Self {
        Self {
            document: scraper::Html::parse_document(body),
        }
    }
}

impl QuotePage for HtmlPage {
    fn extract(&self, locator: &Locator) -> Result<String, ExtractError> {
        let selector = scraper::Selector::parse(locator.as_str())
            .map_err(|e| ExtractError::BadLocator(e.to_string()))?;

        let element = self
            .document
            .select(&selector)
            .next()
            .ok_or(ExtractError::NotFound)?;

        let text = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            return Err(ExtractError::NotFound);
        }

        debug!("extracted '{text}' via locator '{}'", locator.as_str());
        Ok(text)
    }
}
