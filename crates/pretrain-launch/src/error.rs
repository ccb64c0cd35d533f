use thiserror::Error;

pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid job spec: {0}")]
    InvalidSpec(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("job file error: {0}")]
    JobFile(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
