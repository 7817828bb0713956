use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweetqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate {kind} ID: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TweetqlError>;
