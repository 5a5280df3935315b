use thiserror::Error;

pub type Result<T, E = CoordinatorError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptyGroup,
    IncompleteAuthorization,
    Submission,
    Codec,
    NodeRpc,
    IndexerQuery,
    Config,
    Serialization,
    InvalidAmount,
    Unsupported,
    Message,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("cannot build a group from an empty operation list")]
    EmptyGroup,

    #[error("group has {missing} unauthorized operation(s)")]
    IncompleteAuthorization { missing: usize },

    #[error("submission rejected: {0}")]
    Submission(String),

    #[error("malformed account identifier: {0}")]
    Codec(String),

    #[error("node RPC error: {0}")]
    NodeRpc(String),

    #[error("indexer query error: {0}")]
    IndexerQuery(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("operation not supported: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Message(String),
}

impl CoordinatorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoordinatorError::EmptyGroup => ErrorCode::EmptyGroup,
            CoordinatorError::IncompleteAuthorization { .. } => ErrorCode::IncompleteAuthorization,
            CoordinatorError::Submission(_) => ErrorCode::Submission,
            CoordinatorError::Codec(_) => ErrorCode::Codec,
            CoordinatorError::NodeRpc(_) => ErrorCode::NodeRpc,
            CoordinatorError::IndexerQuery(_) => ErrorCode::IndexerQuery,
            CoordinatorError::Config(_) => ErrorCode::Config,
            CoordinatorError::Serialization(_) => ErrorCode::Serialization,
            CoordinatorError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            CoordinatorError::Unsupported(_) => ErrorCode::Unsupported,
            CoordinatorError::Message(_) => ErrorCode::Message,
        }
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<bincode::Error> for CoordinatorError {
    fn from(err: bincode::Error) -> Self {
        CoordinatorError::Serialization(err.to_string())
    }
}

impl From<hex::FromHexError> for CoordinatorError {
    fn from(err: hex::FromHexError) -> Self {
        CoordinatorError::Codec(err.to_string())
    }
}
