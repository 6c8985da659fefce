use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::debug;

use crate::error::MarketStateError;
use crate::locator::FieldLocatorTable;
use crate::page::{HtmlPage, PageSource, QuotePage, MARKET_STATUS_URL};

/// Whether the market is currently trading. Decides which locator variant
/// applies to every field on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketState {
    Open,
    Closed,
}

impl MarketState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl Display for MarketState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the current market state from the provider's status banner.
///
/// No caching: every call re-queries, so a long-running caller that loops
/// over refresh cycles re-resolves the state each cycle. The returned state
/// is threaded as a plain value through resolution calls instead of living in
/// shared mutable storage.
pub struct MarketStateProbe {
    source: Arc<dyn PageSource>,
}

impl MarketStateProbe {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Query the live market state. Any failure here is fatal for the run:
    /// without the state no field locator can be chosen, and guessing would
    /// silently resolve every field against the wrong page structure.
    pub async fn query(&self) -> Result<MarketState, MarketStateError> {
        let body = self.source.fetch(MARKET_STATUS_URL).await?;
        let page = HtmlPage::parse(&body);
        let text = page
            .extract(&FieldLocatorTable::market_status())?
            .to_ascii_lowercase();

        debug!("market status banner: '{text}'");

        if text.contains("closed") {
            Ok(MarketState::Closed)
        } else if text.contains("open") {
            Ok(MarketState::Open)
        } else {
            Err(MarketStateError::Unrecognized { text })
        }
    }
}
