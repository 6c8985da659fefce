use std::sync::Arc;

use log::warn;

use tickergraph_core::{chart, ChartApiSource, HttpClient, RunConfig, SeriesSource, Symbol};

use crate::cli::TrendArgs;
use crate::error::CliError;
use crate::output;

/// Daily-chart API token. Requests without one are rejected upstream.
const API_TOKEN_VAR: &str = "TICKERGRAPH_API_TOKEN";

pub async fn run(
    args: &TrendArgs,
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
) -> Result<(), CliError> {
    let config = RunConfig::new(args.width, args.days, false)?;

    let symbols = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let token = std::env::var(API_TOKEN_VAR).unwrap_or_default();
    if token.is_empty() {
        output::notice(&format!(
            "{API_TOKEN_VAR} is not set; chart requests may be rejected"
        ));
    }
    let source = ChartApiSource::new(http, token).with_timeout_ms(timeout_ms);

    for symbol in symbols {
        render_one(&source, &symbol, &config).await;
    }

    Ok(())
}

/// Fetches and renders one chart. A symbol without usable history is
/// reported and skipped; the remaining symbols still render.
async fn render_one(source: &dyn SeriesSource, symbol: &Symbol, config: &RunConfig) {
    let series = match source.fetch(symbol, config.lookback_days).await {
        Ok(series) => series,
        Err(error) => {
            warn!("history for {} unavailable: {error}", symbol.as_str());
            output::notice(&format!(
                "no chart data for '{}': {error}",
                symbol.as_str()
            ));
            return;
        }
    };

    let price_len = series
        .bars()
        .last()
        .map(|bar| format!("{:.2}", bar.close()).len())
        .unwrap_or(4);

    match chart::render(&series, config.width, price_len) {
        Ok(rendered) => output::print_chart(symbol.as_str(), &rendered),
        Err(error) => {
            warn!("chart for {} skipped: {error}", symbol.as_str());
            output::notice(&format!("no chart for '{}': {error}", symbol.as_str()));
        }
    }
}
