use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Unknown stat name: {0}")]
    UnknownStat(String),

    #[error("Unknown class name: {0}")]
    UnknownClass(String),

    #[error("Search worker is no longer running")]
    WorkerGone,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Settings parse error: {0}")]
    SettingsError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
