mod quote;
mod trend;

use std::sync::Arc;

use tickergraph_core::{HttpClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

    match &cli.command {
        Command::Quote(args) => quote::run(args, http, cli.timeout_ms).await,
        Command::Trend(args) => trend::run(args, http, cli.timeout_ms).await,
    }
}
