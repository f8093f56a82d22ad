/// Convenience result type used across Lockstep.
pub type LockstepResult<T> = Result<T, LockstepError>;

/// Top-level error taxonomy used by bridge APIs.
#[derive(thiserror::Error, Debug)]
pub enum LockstepError {
    /// The drawing surface was not mounted when a context was requested.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The compositing engine failed while constructing a rendering context.
    #[error("context creation failed: {0}")]
    ContextCreation(String),

    /// The compositing engine failed while constructing a source node.
    #[error("node creation failed: {0}")]
    NodeCreation(String),

    /// The raw media element reported a decode or network failure.
    #[error("media decode error: {0}")]
    MediaDecode(String),

    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LockstepError {
    /// Build a [`LockstepError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`LockstepError::ContextCreation`] value.
    pub fn context_creation(msg: impl Into<String>) -> Self {
        Self::ContextCreation(msg.into())
    }

    /// Build a [`LockstepError::NodeCreation`] value.
    pub fn node_creation(msg: impl Into<String>) -> Self {
        Self::NodeCreation(msg.into())
    }

    /// Build a [`LockstepError::MediaDecode`] value.
    pub fn media_decode(msg: impl Into<String>) -> Self {
        Self::MediaDecode(msg.into())
    }

    /// Build a [`LockstepError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the consumer can recover by retrying `initialize` later
    /// without changing the media.
    ///
    /// Only a missing drawing surface qualifies: the surface mounts on its
    /// own schedule, while construction and decode failures repeat until the
    /// media itself changes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SurfaceUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
