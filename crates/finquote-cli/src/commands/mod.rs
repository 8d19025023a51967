mod lookup;
mod name;
mod quote;

use finquote_core::config::ENV_API_TOKEN;
use finquote_core::{ClientConfig, QuoteClient};
use log::debug;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Rendered command output plus the process exit code it implies.
pub struct CommandResult {
    pub data: Value,
    pub exit_code: u8,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self { data, exit_code: 0 }
    }

    pub fn with_exit_code(mut self, exit_code: u8) -> Self {
        self.exit_code = exit_code;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let config = build_config(cli)?;
    debug!(
        "using base url {} with timeout {}ms",
        config.base_url(),
        config.timeout_ms()
    );
    let client = QuoteClient::new(config);

    match &cli.command {
        Command::Quote(args) => quote::run(args, &client).await,
        Command::Name(args) => name::run(args, &client).await,
        Command::Lookup(args) => lookup::run(args, &client).await,
    }
}

/// Environment first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_lookup(|name| {
        if name == ENV_API_TOKEN {
            if let Some(token) = &cli.token {
                return Some(token.clone());
            }
        }
        std::env::var(name).ok()
    })?;

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }

    Ok(config)
}
