use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),
}
