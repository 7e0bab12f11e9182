use thiserror::Error;

pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("display sink failure: {0}")]
    Sink(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("remote fetch failed: {0}")]
    Fetch(String),
}
