use tracing::{debug, warn};

use crate::engine::backend::{CompositorEngine, ContextId};
use crate::foundation::core::{AspectRatio, SurfaceSize};
use crate::foundation::error::{LockstepError, LockstepResult};

/// A live compositing context and the surface geometry it was built with.
///
/// Owned exclusively by one bridge; disposal consumes the value so a context
/// cannot be released twice.
#[derive(Debug)]
pub struct RenderingContext {
    id: ContextId,
    size: SurfaceSize,
}

impl RenderingContext {
    /// Engine handle for this context.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Surface pixel dimensions the context draws into.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// Build a ready-to-use compositing context sized from an aspect-ratio hint.
///
/// The longer surface dimension is fixed at `base_size`; the other follows
/// the hint, rounded to the nearest pixel. Fails with
/// [`LockstepError::SurfaceUnavailable`] when the host surface has not
/// mounted and [`LockstepError::ContextCreation`] when the engine errors
/// during construction.
pub fn prepare_context(
    engine: &mut dyn CompositorEngine,
    hint: AspectRatio,
    base_size: u32,
) -> LockstepResult<RenderingContext> {
    if !engine.surface_mounted() {
        return Err(LockstepError::surface_unavailable(
            "drawing surface not mounted",
        ));
    }
    let size = SurfaceSize::from_aspect(base_size, hint);
    let id = engine
        .create_context(size)
        .map_err(|err| LockstepError::context_creation(err.to_string()))?;
    debug!(?id, ?size, "rendering context prepared");
    Ok(RenderingContext { id, size })
}

/// Tear a context down, resetting its node graph and releasing native
/// resources.
///
/// Disposal runs during teardown where the caller can no longer act on a
/// failure, so errors are logged and swallowed.
pub fn dispose_context(engine: &mut dyn CompositorEngine, context: RenderingContext) {
    if let Err(err) = engine.destroy_context(context.id) {
        warn!(%err, id = ?context.id, "rendering context teardown failed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/lifecycle.rs"]
mod tests;
