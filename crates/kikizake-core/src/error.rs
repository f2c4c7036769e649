pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A chart spec that cannot describe a drawable chart. This is a caller bug,
    /// unlike attribute-level problems which degrade to `0.0` instead.
    #[error("degenerate chart spec: size must be a positive finite number, got {size}")]
    DegenerateSpec { size: f64 },

    #[error("flavor document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
