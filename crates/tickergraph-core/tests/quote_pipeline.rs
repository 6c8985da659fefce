//! End-to-end behavior of the resolution and charting pipeline against
//! deterministic offline pages.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tickergraph_core::{
    chart, history, resolver, FetchError, HtmlPage, MarketIndex, MarketState, MarketStateProbe,
    PageSource, QuoteStatus, Symbol, SymbolQuote,
};

const CLOSED_SYMBOL_PAGE: &str = r#"<html><body>
  <div class="company__name"><h1 class="company__ticker-name">Acme Corp.</h1></div>
  <div class="intraday__data"><h2 class="intraday__price"><bg-quote>184.99</bg-quote></h2></div>
  <div class="intraday__close"><table><tr>
    <td class="table__cell u-semi">$184.37</td>
    <td class="change--point">-1.22</td>
    <td class="change--percent">-0.66%</td>
  </tr></table></div>
  <div class="intraday__timestamp"><span class="timestamp__time">Mar 1, 2024 4:00PM EST</span></div>
  <ul class="list--kv">
    <li class="kv__item day-range"><span class="primary">182.10 - 186.00</span></li>
    <li class="kv__item range-52wk"><span class="primary">$164.08 - $199.62</span></li>
  </ul>
  <table class="performance">
    <tr class="table__row ytd"><td><ul><li class="content__item value">12.10%</li></ul></td></tr>
    <tr class="table__row one-year"><td><ul><li class="content__item value">23.80%</li></ul></td></tr>
  </table>
</body></html>"#;

struct StaticPageSource {
    body: Result<String, FetchError>,
}

impl StaticPageSource {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Ok(body.to_owned()),
        })
    }
}

impl PageSource for StaticPageSource {
    fn fetch<'a>(
        &'a self,
        _url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>> {
        let body = self.body.clone();
        Box::pin(async move { body })
    }
}

fn acme() -> Symbol {
    Symbol::parse("ACME").expect("valid symbol")
}

#[tokio::test]
async fn closed_market_page_resolves_into_a_full_record() {
    let probe = MarketStateProbe::new(StaticPageSource::ok(
        "<div class=\"market__status\"><span class=\"status\">After Hours: Market Closed</span></div>",
    ));
    let state = probe.query().await.expect("state");
    assert_eq!(state, MarketState::Closed);

    let source = StaticPageSource::ok(CLOSED_SYMBOL_PAGE);
    let body = source
        .fetch("https://provider.test/stock/acme")
        .await
        .expect("page body");
    let page = HtmlPage::parse(&body);
    let quote = resolver::resolve_symbol(&page, &acme(), state);

    assert_eq!(quote.status, QuoteStatus::Ok);
    assert_eq!(quote.fullname.as_str(), "Acme Corp.");
    assert_eq!(quote.latest_price.as_str(), "184.37");
    assert_eq!(quote.change.as_str(), "-1.22");
    assert_eq!(quote.day_low.as_str(), "182.10");
    assert_eq!(quote.day_high.as_str(), "186.00");
    assert_eq!(quote.week52_low.as_str(), "164.08");
    assert_eq!(quote.week52_high.as_str(), "199.62");
    // Derived from latest price over the 52-week low.
    assert_eq!(quote.week52_change_percent.as_str(), "+12.37");
}

#[tokio::test]
async fn unreachable_page_degrades_to_an_error_record_not_a_failed_run() {
    let source = Arc::new(StaticPageSource {
        body: Err(FetchError::Status { status: 404 }),
    });

    let quote = match source.fetch("https://provider.test/stock/nope").await {
        Ok(body) => {
            let page = HtmlPage::parse(&body);
            resolver::resolve_symbol(&page, &acme(), MarketState::Closed)
        }
        Err(_) => SymbolQuote::unavailable(acme()),
    };

    assert_eq!(quote.status, QuoteStatus::Error);
    assert!(quote.latest_price.is_sentinel());
    assert_eq!(quote.symbol.as_str(), "ACME");
}

#[tokio::test]
async fn index_resolution_reuses_the_same_state_value() {
    // Index pages share the live-quote structure while the market is open.
    let open_index_page = r#"<html><body>
      <div class="intraday__data"><h2 class="intraday__price"><bg-quote>16,274.94</bg-quote></h2></div>
      <span class="change--point--q"><bg-quote>+183.04</bg-quote></span>
      <span class="change--percent--q"><bg-quote>+1.14%</bg-quote></span>
      <div class="intraday__timestamp"><bg-quote>11:   02AM EST</bg-quote></div>
      <ul class="list--kv"><li class="kv__item range-52wk"><span class="primary">12,543.86 - 16,538.86</span></li></ul>
    </body></html>"#;

    let source = StaticPageSource::ok(open_index_page);
    let body = source.fetch("https://provider.test/index/comp").await.expect("page body");
    let page = HtmlPage::parse(&body);
    let quote = resolver::resolve_index(&page, MarketIndex::Nasdaq, MarketState::Open);

    assert_eq!(quote.status, QuoteStatus::Ok);
    assert_eq!(quote.latest_price.as_str(), "16274.94");
    assert_eq!(quote.change.as_str(), "+183.04");
    assert_eq!(quote.week52_low.as_str(), "12543.86");
    assert_eq!(quote.week52_high.as_str(), "16538.86");
}

#[test]
fn fetched_history_renders_a_width_exact_chart() {
    let body = r#"[
        {"date": "2024-03-01", "low": 10.0, "close": 12.0, "high": 15.0},
        {"date": "2024-03-04", "low": 11.0, "close": 11.0, "high": 11.0},
        {"date": "2024-03-05", "low": 9.0, "close": 9.5, "high": 20.0}
    ]"#;
    let series = history::parse_series(&acme(), body).expect("series");

    let price_len = "9.50".len();
    let total_width = 80 + chart::fixed_overhead(price_len);
    let rendered = chart::render(&series, total_width, price_len).expect("chart");

    for line in rendered.lines().filter(|line| line.contains('o')) {
        if let (Some(start), Some(end)) = (line.find('|'), line.rfind('|')) {
            if start < end {
                assert_eq!(line[start + 1..end].chars().count(), 81);
            }
        }
    }
}
