#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed sensor event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
