#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input closed before a {0} was provided")]
    InputClosed(&'static str),
    #[error(transparent)]
    Stream(#[from] ollama_stream::error::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("env variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
    #[error("config file error: {0}")]
    ConfigFile(#[from] config_file::ConfigFileError),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("printer error: {0}")]
    Bat(#[from] bat::error::Error),
    #[error("task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
