use tracing::{debug, warn};

use crate::context::lifecycle::RenderingContext;
use crate::engine::backend::{CompositorEngine, NodeId};
use crate::foundation::error::{LockstepError, LockstepResult};

/// Lifecycle states of a source node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SourceState {
    /// Node exists; the media has not finished loading.
    Pending,
    /// Media loaded with a finite, positive duration.
    Ready,
    /// Media reported loaded but its duration was missing or unusable. The
    /// node never becomes ready and no error is raised.
    Invalid,
    /// The underlying element reported a decode or network failure.
    Failed,
    /// Torn down. Terminal.
    Disposed,
}

/// Outcome of applying a loaded completion to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The node became ready with this duration.
    Ready(f64),
    /// Duration was missing or unusable; the node stays unready.
    Invalid,
    /// The completion arrived in a state where it carries no meaning.
    Ignored,
}

/// One playable media input bound into a rendering context.
#[derive(Debug)]
pub struct SourceNode {
    id: NodeId,
    url: String,
    state: SourceState,
    duration: Option<f64>,
}

/// Bind `url` into `context` as a playable node.
///
/// The node is registered with the context destination, started at time 0,
/// and given `playable_ceiling_secs` as its upper playable bound, a
/// generous ceiling, not the real duration, which is unknown until the load
/// completes. Fails with [`LockstepError::NodeCreation`] when no context is
/// available or the engine errors while wiring the node up.
pub fn create_node(
    engine: &mut dyn CompositorEngine,
    context: Option<&RenderingContext>,
    url: &str,
    playable_ceiling_secs: f64,
) -> LockstepResult<SourceNode> {
    let context = context.ok_or_else(|| {
        LockstepError::node_creation("no rendering context to bind the source into")
    })?;
    let id = engine
        .create_source_node(context.id(), url)
        .map_err(|err| LockstepError::node_creation(err.to_string()))?;
    if let Err(err) = wire_node(engine, id, playable_ceiling_secs) {
        // Half-wired nodes must not outlive a failed construction.
        if let Err(destroy_err) = engine.destroy_node(id) {
            warn!(%destroy_err, ?id, "could not release half-wired source node");
        }
        return Err(LockstepError::node_creation(err.to_string()));
    }
    debug!(?id, url, "source node created");
    Ok(SourceNode {
        id,
        url: url.to_owned(),
        state: SourceState::Pending,
        duration: None,
    })
}

fn wire_node(
    engine: &mut dyn CompositorEngine,
    id: NodeId,
    playable_ceiling_secs: f64,
) -> LockstepResult<()> {
    engine.connect_to_destination(id)?;
    engine.start_node(id, 0.0)?;
    engine.stop_node_at(id, playable_ceiling_secs)?;
    Ok(())
}

impl SourceNode {
    /// Engine handle for this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Media URL the node was created for.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SourceState {
        self.state
    }

    /// Duration reported at load time, present only once [`SourceState::Ready`].
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Apply a loaded completion.
    ///
    /// `element_duration` must come from the node's underlying raw element,
    /// the only authoritative duration source. A missing, non-finite, or
    /// non-positive duration parks the node in [`SourceState::Invalid`]
    /// without raising an error; completions outside `Pending` carry no
    /// meaning.
    pub fn mark_loaded(&mut self, element_duration: Option<f64>) -> LoadOutcome {
        if self.state != SourceState::Pending {
            debug!(url = %self.url, state = ?self.state, "loaded completion ignored");
            return LoadOutcome::Ignored;
        }
        match element_duration {
            Some(secs) if secs.is_finite() && secs > 0.0 => {
                self.state = SourceState::Ready;
                self.duration = Some(secs);
                LoadOutcome::Ready(secs)
            }
            reported => {
                warn!(url = %self.url, ?reported, "loaded with unusable duration; node stays unready");
                self.state = SourceState::Invalid;
                LoadOutcome::Invalid
            }
        }
    }

    /// Apply an error completion.
    ///
    /// Returns the error to surface to the consumer, or `None` when the
    /// completion carries no meaning in the current state. Never retried:
    /// recovery requires a fresh initialization.
    pub fn mark_failed(&mut self, reason: &str) -> Option<LockstepError> {
        match self.state {
            SourceState::Pending | SourceState::Ready => {
                self.state = SourceState::Failed;
                self.duration = None;
                Some(LockstepError::media_decode(reason))
            }
            _ => {
                debug!(url = %self.url, state = ?self.state, "error completion ignored");
                None
            }
        }
    }

    /// Detach the node from the engine.
    ///
    /// Terminal and idempotent; teardown errors are logged, not raised.
    pub fn dispose(&mut self, engine: &mut dyn CompositorEngine) {
        if self.state == SourceState::Disposed {
            return;
        }
        self.state = SourceState::Disposed;
        self.duration = None;
        if let Err(err) = engine.destroy_node(self.id) {
            warn!(%err, id = ?self.id, "source node teardown failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/node.rs"]
mod tests;
