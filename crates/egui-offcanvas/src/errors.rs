#[derive(Debug, thiserror::Error)]
pub enum OffCanvasError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid length `{0}`")]
    InvalidLength(String),
    #[error("unknown timing function `{0}`")]
    InvalidEasing(String),
    #[error("{0}")]
    Config(#[from] serde_json::Error),
}
