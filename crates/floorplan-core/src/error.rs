//! Scene error types.

use thiserror::Error;

/// Errors reported by scene-store entry points that accept untyped input.
///
/// These never leave the store in a partially mutated state.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("element payload has no type tag")]
    MissingElementType,
    #[error("unknown element type: {0}")]
    UnknownElementType(String),
    #[error("malformed element payload: {0}")]
    MalformedElement(#[source] serde_json::Error),
    #[error("cannot apply {patch} fields to a {element} element")]
    VariantMismatch {
        element: &'static str,
        patch: &'static str,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
