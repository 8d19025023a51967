use finquote_core::QuoteClient;
use serde::Serialize;

use crate::cli::SymbolsArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct NameResponseData {
    names: Vec<NameEntry>,
}

#[derive(Debug, Serialize)]
struct NameEntry {
    symbol: String,
    name: String,
}

pub async fn run(args: &SymbolsArgs, client: &QuoteClient) -> Result<CommandResult, CliError> {
    let mut names = Vec::with_capacity(args.symbols.len());
    for symbol in &args.symbols {
        let name = client.resolve_name(symbol).await;
        names.push(NameEntry {
            symbol: symbol.clone(),
            name,
        });
    }

    let data = serde_json::to_value(NameResponseData { names })?;
    Ok(CommandResult::ok(data))
}
