use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] aodata_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Export(#[from] aodata_core::ExportError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Export(_) => 10,
        }
    }
}
