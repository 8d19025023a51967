use finquote_core::{NameLookup, QuoteClient};
use serde::Serialize;

use crate::cli::SymbolArgs;
use crate::error::{client_exit_code, CliError};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct LookupResponseData {
    symbol: String,
    #[serde(flatten)]
    outcome: LookupOutcome,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LookupOutcome {
    Resolved(NameLookup),
    Failed {
        status: &'static str,
        code: &'static str,
        message: String,
    },
}

pub async fn run(args: &SymbolArgs, client: &QuoteClient) -> Result<CommandResult, CliError> {
    let (outcome, exit_code) = match client.lookup_name(&args.symbol).await {
        Ok(lookup) => (LookupOutcome::Resolved(lookup), 0),
        Err(error) => (
            LookupOutcome::Failed {
                status: "error",
                code: error.code(),
                message: error.to_string(),
            },
            client_exit_code(&error),
        ),
    };

    let data = serde_json::to_value(LookupResponseData {
        symbol: args.symbol.clone(),
        outcome,
    })?;
    Ok(CommandResult::ok(data).with_exit_code(exit_code))
}
