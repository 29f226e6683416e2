use thiserror::Error;

/// Unified result type for the block layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced outside the geometric core.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout config: `{field}` must be finite and non-negative, got {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
