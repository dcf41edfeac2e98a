use thiserror::Error;

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("dataset source unreachable: {source_name}: {reason}")]
    SourceUnreachable { source_name: String, reason: String },

    #[error("malformed dataset at line {line}: {reason}")]
    MalformedSource { line: usize, reason: String },

    #[error("dataset is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("remote dataset sources are disabled in this build: {url}")]
    RemoteSourceDisabled { url: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("dataset snapshot is already installed")]
    SnapshotAlreadyInstalled,

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ExplorerError {
    /// Returns `true` for the errors that abort dataset loading at startup.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnreachable { .. }
                | Self::MalformedSource { .. }
                | Self::MissingColumns { .. }
                | Self::RemoteSourceDisabled { .. }
        )
    }
}
