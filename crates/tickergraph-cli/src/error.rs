use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Only run-fatal failures live here. A symbol whose page cannot be fetched
/// or a chart without data degrades in place and never reaches this type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickergraph_core::ValidationError),

    #[error("cannot determine market state: {0}")]
    MarketState(#[from] tickergraph_core::MarketStateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::MarketState(_) => 7,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tickergraph_core::ValidationError;

    #[test]
    fn market_state_failure_keeps_its_historical_exit_code() {
        let error = CliError::MarketState(tickergraph_core::MarketStateError::Unrecognized {
            text: String::from("maintenance"),
        });
        assert_eq!(error.exit_code(), 7);
    }

    #[test]
    fn validation_failures_exit_with_usage_error() {
        let error = CliError::Validation(ValidationError::EmptySymbol);
        assert_eq!(error.exit_code(), 2);
    }
}
