use tracing::{debug, warn};

use crate::{
    context::lifecycle::{self, RenderingContext},
    engine::backend::{CompositorEngine, EngineEvent, EngineEventKind, MediaElement},
    foundation::core::{AspectRatio, BridgeOptions, MediaKind},
    foundation::error::LockstepError,
    foundation::timebase::Timebase,
    source::node::{self, LoadOutcome, SourceNode},
};

/// Callbacks the bridge invokes on its consumer.
///
/// All methods default to no-ops so consumers implement only what they
/// observe.
pub trait BridgeObserver {
    /// The media became playable.
    fn on_ready(&mut self) {}

    /// A failure the consumer must act on: context or node construction
    /// failed, or the media failed to decode after the node was created.
    fn on_error(&mut self, error: &LockstepError) {
        let _ = error;
    }

    /// The authoritative duration was discovered.
    fn on_duration_change(&mut self, secs: f64) {
        let _ = secs;
    }
}

/// Consumer-visible playback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PlaybackSnapshot {
    /// True only after the source reported a finite, positive duration.
    pub ready: bool,
    /// Authoritative duration once ready; 0 otherwise.
    pub duration: f64,
    /// Last reconciled playback position.
    pub current_time: f64,
}

/// The single place where the compositing engine and the raw media element
/// are kept consistent, and the only surface the consumer talks to.
///
/// One bridge per active scene preview. The rendering context and source
/// node it creates are owned exclusively and never shared across scenes.
/// Every public operation is safe to call eagerly from UI event handlers:
/// with no live context/node pair it logs a diagnostic and does nothing,
/// and nothing is ever returned as an error.
///
/// Engine completions arrive through [`SyncBridge::pump`]; each carries the
/// generation token captured when its node's callbacks were registered, and
/// completions from a superseded initialization are discarded by token
/// comparison. The engine exposes no real cancellation, so this is the
/// mechanism that keeps a slow load from corrupting the state of whatever
/// replaced it.
pub struct SyncBridge {
    engine: Box<dyn CompositorEngine>,
    element: Box<dyn MediaElement>,
    options: BridgeOptions,
    media_url: Option<String>,
    media_kind: MediaKind,
    context: Option<RenderingContext>,
    node: Option<SourceNode>,
    timebase: Timebase,
    ready: bool,
    duration: f64,
    generation: u64,
}

impl SyncBridge {
    /// Build a bridge over an engine and a raw media element.
    pub fn new(engine: Box<dyn CompositorEngine>, element: Box<dyn MediaElement>) -> Self {
        Self::with_options(engine, element, BridgeOptions::default())
    }

    /// Build a bridge with explicit options.
    pub fn with_options(
        engine: Box<dyn CompositorEngine>,
        element: Box<dyn MediaElement>,
        options: BridgeOptions,
    ) -> Self {
        Self {
            engine,
            element,
            options,
            media_url: None,
            media_kind: MediaKind::None,
            context: None,
            node: None,
            timebase: Timebase::default(),
            ready: false,
            duration: 0.0,
            generation: 0,
        }
    }

    /// Point the bridge at new media.
    ///
    /// Any existing context/node pair is fully released first: old node,
    /// then old context, each swallowing its own teardown errors so a stuck
    /// teardown cannot starve the new construction. A new pair is built only
    /// for a present URL of kind [`MediaKind::Video`]; for every other kind
    /// the bridge is left inert.
    ///
    /// Construction failures are reported through `observer` and logged,
    /// never returned: by the time they surface the calling event handler
    /// has nothing useful to do with them.
    #[tracing::instrument(skip(self, observer))]
    pub fn initialize(
        &mut self,
        url: Option<&str>,
        kind: MediaKind,
        aspect_hint: AspectRatio,
        observer: &mut dyn BridgeObserver,
    ) {
        self.generation = self.generation.wrapping_add(1);
        self.release_pair();
        self.reset_playback_state();
        self.media_url = url.map(str::to_owned);
        self.media_kind = kind;

        let Some(url) = url else {
            debug!("no media url; bridge left inert");
            return;
        };
        if !kind.activates_bridge() {
            debug!(?kind, "media kind does not drive playback; bridge left inert");
            return;
        }

        let context = match lifecycle::prepare_context(
            self.engine.as_mut(),
            aspect_hint,
            self.options.base_size,
        ) {
            Ok(context) => context,
            Err(err) => {
                warn!(%err, url, "rendering context unavailable");
                observer.on_error(&err);
                return;
            }
        };

        let node = match node::create_node(
            self.engine.as_mut(),
            Some(&context),
            url,
            self.options.playable_ceiling_secs,
        ) {
            Ok(node) => node,
            Err(err) => {
                warn!(%err, url, "source node construction failed");
                lifecycle::dispose_context(self.engine.as_mut(), context);
                observer.on_error(&err);
                return;
            }
        };

        self.engine.register_callbacks(node.id(), self.generation);
        self.context = Some(context);
        self.node = Some(node);
    }

    /// Release everything the bridge owns.
    ///
    /// Called when the consumer unmounts. Idempotent; pending completions
    /// from the released pair are discarded by the generation bump.
    pub fn dispose(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.release_pair();
        self.reset_playback_state();
        self.media_url = None;
        self.media_kind = MediaKind::None;
    }

    /// Drain engine completions and fold them into bridge state.
    ///
    /// Call once per host tick. Loaded and error completions may arrive in
    /// either order or never at all; media that never completes simply
    /// leaves the bridge unready, and any timeout is the consumer's to
    /// impose.
    pub fn pump(&mut self, observer: &mut dyn BridgeObserver) {
        for event in self.engine.poll_events() {
            self.apply_engine_event(event, observer);
        }
    }

    fn apply_engine_event(&mut self, event: EngineEvent, observer: &mut dyn BridgeObserver) {
        if event.token != self.generation {
            debug!(
                token = event.token,
                current = self.generation,
                "discarding completion from a superseded initialization"
            );
            return;
        }
        let Some(node) = self.node.as_mut() else {
            debug!(node = ?event.node, "completion for a node the bridge no longer holds");
            return;
        };
        match event.kind {
            EngineEventKind::Loaded => {
                match node.mark_loaded(self.element.duration()) {
                    LoadOutcome::Ready(secs) => {
                        self.ready = true;
                        self.duration = secs;
                        observer.on_duration_change(secs);
                        observer.on_ready();
                    }
                    LoadOutcome::Invalid | LoadOutcome::Ignored => {}
                }
            }
            EngineEventKind::Errored { reason } => {
                if let Some(err) = node.mark_failed(&reason) {
                    self.ready = false;
                    self.duration = 0.0;
                    self.timebase.reset();
                    warn!(%err, "media decode failure surfaced to consumer");
                    observer.on_error(&err);
                }
            }
        }
    }

    /// Begin playback on the rendering context and the shared timebase.
    ///
    /// Before the media is ready this logs and does nothing: the race
    /// between user intent and load completion is normal, and the consumer
    /// is expected to disable play controls until ready. The engine's play
    /// call is a no-op on a node it considers unstarted, so the start
    /// command is re-issued when needed rather than treated as an error.
    pub fn play(&mut self) {
        if !self.ready {
            debug!("play requested before media ready; ignoring");
            return;
        }
        let (Some(context), Some(node)) = (self.context.as_ref(), self.node.as_ref()) else {
            debug!("play requested with no live context/node pair; ignoring");
            return;
        };
        let context_id = context.id();
        let node_id = node.id();
        if let Err(err) = self.engine.play(context_id) {
            warn!(%err, "engine play failed");
            return;
        }
        if !self.engine.node_started(node_id) {
            if let Err(err) = self.engine.start_node(node_id, 0.0) {
                warn!(%err, "source node restart failed");
            }
        }
        self.timebase.playing = true;
    }

    /// Halt playback. No-op when no rendering context is live.
    pub fn pause(&mut self) {
        let Some(context) = self.context.as_ref() else {
            debug!("pause requested with no rendering context; ignoring");
            return;
        };
        let context_id = context.id();
        if let Err(err) = self.engine.pause(context_id) {
            warn!(%err, "engine pause failed");
        }
        self.timebase.playing = false;
    }

    /// Move both players to `secs`, clamped to `[0, duration]`.
    ///
    /// The clamp bound is the rendering context's own duration when it has
    /// one, else the last-known authoritative duration. The engine clock and
    /// the element clock are written in one step and the reported position
    /// updates immediately, because the two players share no clock and the seek
    /// must be visible to the consumer before the element's next position
    /// notification. Concurrent seeks resolve last-write-wins.
    pub fn seek(&mut self, secs: f64) {
        let Some(context) = self.context.as_ref() else {
            debug!(secs, "seek requested with no rendering context; ignoring");
            return;
        };
        let context_id = context.id();
        let limit = self
            .engine
            .duration(context_id)
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(self.duration);
        let clamped = clamp_position(secs, limit);
        if let Err(err) = self.engine.set_position(context_id, clamped) {
            warn!(%err, clamped, "engine seek failed");
        }
        self.element.set_current_time(clamped);
        self.timebase.position = clamped;
    }

    /// Fold a position notification from the raw media element into the
    /// shared timebase.
    ///
    /// The element, not the engine clock, is the authority for the reported
    /// position. Before readiness the position is pinned at zero; once
    /// ready it is clamped to `[0, duration]`.
    pub fn element_time_changed(&mut self, secs: f64) {
        if !self.ready {
            self.timebase.position = 0.0;
            return;
        }
        self.timebase.position = clamp_position(secs, self.duration);
    }

    /// Consumer-visible snapshot of readiness, duration, and position.
    pub fn state(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            ready: self.ready,
            duration: self.duration,
            current_time: self.timebase.position,
        }
    }

    /// The shared play/position primitives.
    pub fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Identity key of the current media, if any.
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    /// Kind of the current media.
    pub fn media_kind(&self) -> MediaKind {
        self.media_kind
    }

    /// Generation counter; bumped on every re-initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn release_pair(&mut self) {
        if let Some(mut node) = self.node.take() {
            node.dispose(self.engine.as_mut());
        }
        if let Some(context) = self.context.take() {
            lifecycle::dispose_context(self.engine.as_mut(), context);
        }
    }

    fn reset_playback_state(&mut self) {
        self.ready = false;
        self.duration = 0.0;
        self.timebase.reset();
    }
}

fn clamp_position(secs: f64, limit: f64) -> f64 {
    if !secs.is_finite() {
        return 0.0;
    }
    let limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
    secs.clamp(0.0, limit)
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/sync.rs"]
mod tests;
