use std::sync::Arc;

use log::warn;

use tickergraph_core::{
    index_page_url, resolve_index, resolve_symbol, symbol_page_url, HtmlPage, HttpClient,
    HttpPageSource, IndexQuote, MarketIndex, MarketState, MarketStateProbe, PageSource, Symbol,
    SymbolQuote,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;
use crate::export::CsvExporter;
use crate::output;

pub async fn run(
    args: &QuoteArgs,
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
) -> Result<(), CliError> {
    // Symbol validation happens up front so a typo fails before any network
    // traffic.
    let symbols = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(http, timeout_ms));

    // The one probe whose failure aborts the run: without the open/closed
    // state there is no way to pick locators for any page.
    let state = MarketStateProbe::new(Arc::clone(&source)).query().await?;
    output::market_banner(state);

    let mut quotes = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        quotes.push(resolve_one_symbol(source.as_ref(), symbol, state).await);
    }
    output::print_symbol_quotes(&quotes);

    let mut indexes: Vec<IndexQuote> = Vec::new();
    if !args.hide_index {
        for index in MarketIndex::ALL {
            indexes.push(resolve_one_index(source.as_ref(), index, state).await);
        }
        output::print_index_quotes(&indexes);
    }

    if let Some(path) = &args.export {
        let exporter = CsvExporter::new(path);
        exporter.append(&quotes)?;
        exporter.append(&indexes)?;
    }

    Ok(())
}

/// Resolves one symbol, degrading an unreachable page to an error record
/// instead of failing the run.
async fn resolve_one_symbol(
    source: &dyn PageSource,
    symbol: Symbol,
    state: MarketState,
) -> SymbolQuote {
    let url = symbol_page_url(&symbol);
    match source.fetch(&url).await {
        Ok(body) => resolve_symbol(&HtmlPage::parse(&body), &symbol, state),
        Err(error) => {
            warn!("quote page for {} unavailable: {error}", symbol.as_str());
            output::notice(&format!(
                "'{}' is invalid or could not be fetched",
                symbol.as_str()
            ));
            SymbolQuote::unavailable(symbol)
        }
    }
}

async fn resolve_one_index(
    source: &dyn PageSource,
    index: MarketIndex,
    state: MarketState,
) -> IndexQuote {
    let url = index_page_url(index);
    match source.fetch(&url).await {
        Ok(body) => resolve_index(&HtmlPage::parse(&body), index, state),
        Err(error) => {
            warn!("index page for {index} unavailable: {error}");
            output::notice(&format!("index '{index}' could not be fetched"));
            IndexQuote::unavailable(index)
        }
    }
}
