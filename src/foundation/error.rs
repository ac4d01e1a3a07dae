/// Convenience result type used across inkstep.
pub type InkstepResult<T> = Result<T, InkstepError>;

/// Top-level error taxonomy used by fallible APIs.
///
/// The parser and the animation engine are total by design and never return
/// these; errors appear only at the edges (payload deserialization, raster
/// backend limits).
#[derive(thiserror::Error, Debug)]
pub enum InkstepError {
    /// Invalid user-provided or model data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised by the CPU raster backend.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkstepError {
    /// Build an [`InkstepError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkstepError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`InkstepError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
