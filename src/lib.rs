//! Lockstep keeps a canvas-bound media compositing engine and a raw media
//! element moving as one clock.
//!
//! A scene preview hands Lockstep a media URL, a kind, and an aspect-ratio
//! hint; Lockstep owns everything below that: the compositing context sized
//! to the hint, the source node bound into it, duration discovery from the
//! raw element, and play/pause/seek commands that act on both players at
//! once.
//!
//! # Component overview
//!
//! 1. **Timebase** (`Timebase`): the two primitives everything else reads:
//!    is playback active, and where is the playhead.
//! 2. **Context lifecycle** ([`prepare_context`] / [`dispose_context`]):
//!    creation and teardown of the compositing context, sized from an
//!    aspect-ratio hint.
//! 3. **Source node** ([`create_node`] / [`SourceNode`]): one media URL
//!    bound into the context as a playable node, with a small readiness
//!    state machine.
//! 4. **Bridge** ([`SyncBridge`]): composes the above, reconciles the two
//!    clocks, and reports ready/duration/error upward through a
//!    [`BridgeObserver`].
//!
//! The compositing engine and the raw media element are external
//! collaborators behind the [`CompositorEngine`] and [`MediaElement`]
//! traits.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One live pair**: at most one rendering context and one source node
//!   exist per bridge; the old pair is fully released before a new one is
//!   constructed, by sequencing rather than by relying on drop order.
//! - **Token discard over cancellation**: the engine cannot cancel an
//!   in-flight load, so every completion carries the generation token it
//!   was registered under and stale completions are dropped on arrival.
//! - **The element owns time**: the engine's internal clock never leaks
//!   into consumer-visible state; duration and position authority stay with
//!   the raw media element.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod bridge;
mod context;
mod engine;
mod foundation;
mod source;

pub use bridge::sync::{BridgeObserver, PlaybackSnapshot, SyncBridge};
pub use context::lifecycle::{RenderingContext, dispose_context, prepare_context};
pub use engine::backend::{
    CompositorEngine, ContextId, EngineEvent, EngineEventKind, MediaElement, NodeId,
};
pub use foundation::core::{AspectRatio, BridgeOptions, MediaKind, SurfaceSize, TrimWindow};
pub use foundation::error::{LockstepError, LockstepResult};
pub use foundation::timebase::Timebase;
pub use source::node::{LoadOutcome, SourceNode, SourceState, create_node};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod support;
