use crate::foundation::core::SurfaceSize;
use crate::foundation::error::LockstepResult;

/// Handle to a live rendering context inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContextId(pub u64);

/// Handle to a live source node inside a rendering context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeId(pub u64);

/// A completion the engine fired for a registered node.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineEvent {
    /// Node the completion refers to.
    pub node: NodeId,
    /// Generation token captured when the node's callbacks were registered.
    pub token: u64,
    /// What happened.
    pub kind: EngineEventKind,
}

/// Completion kinds an engine reports.
///
/// Deliberately carries no duration payload: the raw media element stays the
/// only authoritative duration source.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEventKind {
    /// The node's media finished loading.
    Loaded,
    /// The node's media failed to decode or fetch.
    Errored {
        /// Engine-reported failure description.
        reason: String,
    },
}

/// The canvas-bound compositing engine the bridge drives.
///
/// Handle-based: the engine owns its native objects and callers hold
/// [`ContextId`]/[`NodeId`] handles. Fallible operations return
/// [`LockstepResult`] so callers decide whether a failure is surfaced or
/// swallowed; handle-less queries never fail.
pub trait CompositorEngine {
    /// Whether the host drawing surface is currently mounted.
    fn surface_mounted(&self) -> bool;

    /// Create a compositing context bound to the drawing surface at `size`.
    fn create_context(&mut self, size: SurfaceSize) -> LockstepResult<ContextId>;

    /// Reset a context's node graph and release its native resources.
    fn destroy_context(&mut self, ctx: ContextId) -> LockstepResult<()>;

    /// Create a source node for `url` inside `ctx`.
    fn create_source_node(&mut self, ctx: ContextId, url: &str) -> LockstepResult<NodeId>;

    /// Connect a node to its context's destination.
    fn connect_to_destination(&mut self, node: NodeId) -> LockstepResult<()>;

    /// Schedule a node to start playing at media time `at_secs`.
    fn start_node(&mut self, node: NodeId, at_secs: f64) -> LockstepResult<()>;

    /// Set the upper playable bound of a node, in seconds.
    fn stop_node_at(&mut self, node: NodeId, at_secs: f64) -> LockstepResult<()>;

    /// Whether the engine considers a node started.
    fn node_started(&self, node: NodeId) -> bool;

    /// Detach and release a node.
    fn destroy_node(&mut self, node: NodeId) -> LockstepResult<()>;

    /// Register interest in a node's loaded/error completions, tagging each
    /// with `token`.
    fn register_callbacks(&mut self, node: NodeId, token: u64);

    /// Drain completions fired since the previous drain.
    fn poll_events(&mut self) -> Vec<EngineEvent>;

    /// Start the context clock.
    fn play(&mut self, ctx: ContextId) -> LockstepResult<()>;

    /// Pause the context clock.
    fn pause(&mut self, ctx: ContextId) -> LockstepResult<()>;

    /// Move the context clock to `secs`.
    fn set_position(&mut self, ctx: ContextId, secs: f64) -> LockstepResult<()>;

    /// The context's own duration estimate, if it has one.
    fn duration(&self, ctx: ContextId) -> Option<f64>;
}

/// The raw media playback primitive whose native position and duration are
/// ground truth for timing.
pub trait MediaElement {
    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Move the element to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Native duration. `None` until metadata has arrived; may be
    /// non-finite for streams, which callers must tolerate.
    fn duration(&self) -> Option<f64>;
}
