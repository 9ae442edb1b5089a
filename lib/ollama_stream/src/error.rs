#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model name can't be empty")]
    EmptyModel,
    #[error("model runtime `{0}` not found")]
    RuntimeNotFound(String),
    #[error("error listing models: {0}")]
    ListFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
