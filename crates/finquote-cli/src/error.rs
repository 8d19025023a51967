use finquote_core::{ClientError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Client(error) => client_exit_code(error),
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

/// Exit code for a failed upstream call.
pub const fn client_exit_code(error: &ClientError) -> u8 {
    match error {
        ClientError::Validation(_) => 2,
        ClientError::UpstreamRequest { .. } => 3,
        ClientError::MalformedResponse { .. } => 4,
        ClientError::Transport(_) => 5,
    }
}
