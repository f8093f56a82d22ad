use super::*;
use crate::support::MockEngine;

#[test]
fn prepare_fails_when_surface_is_not_mounted() {
    let mut engine = MockEngine::default();
    let err = prepare_context(&mut engine, AspectRatio::WIDESCREEN, 1280).unwrap_err();
    assert!(matches!(err, LockstepError::SurfaceUnavailable(_)));
    assert!(engine.live_contexts.is_empty());
}

#[test]
fn prepare_sizes_the_surface_from_the_hint() {
    let mut engine = MockEngine::mounted();
    let context = prepare_context(&mut engine, AspectRatio::PORTRAIT, 1080).unwrap();
    let expected = SurfaceSize {
        width: 608,
        height: 1080,
    };
    assert_eq!(context.size(), expected);
    assert_eq!(engine.created_sizes, vec![expected]);
    assert_eq!(engine.live_contexts, vec![context.id()]);
}

#[test]
fn prepare_classifies_engine_failures() {
    let mut engine = MockEngine::mounted();
    engine.fail_create_context = true;
    let err = prepare_context(&mut engine, AspectRatio::WIDESCREEN, 1280).unwrap_err();
    assert!(matches!(err, LockstepError::ContextCreation(_)));
}

#[test]
fn dispose_releases_exactly_once() {
    let mut engine = MockEngine::mounted();
    let context = prepare_context(&mut engine, AspectRatio::WIDESCREEN, 1280).unwrap();
    let id = context.id();
    dispose_context(&mut engine, context);
    assert_eq!(engine.destroyed_contexts, vec![id]);
    assert!(engine.live_contexts.is_empty());
}

#[test]
fn dispose_swallows_engine_failures() {
    let mut engine = MockEngine::mounted();
    engine.fail_destroy_context = true;
    let context = prepare_context(&mut engine, AspectRatio::WIDESCREEN, 1280).unwrap();
    dispose_context(&mut engine, context);
    assert_eq!(engine.destroyed_contexts.len(), 1);
}
