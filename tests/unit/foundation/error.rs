use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LockstepError::surface_unavailable("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        LockstepError::context_creation("x")
            .to_string()
            .contains("context creation failed:")
    );
    assert!(
        LockstepError::node_creation("x")
            .to_string()
            .contains("node creation failed:")
    );
    assert!(
        LockstepError::media_decode("x")
            .to_string()
            .contains("media decode error:")
    );
    assert!(
        LockstepError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LockstepError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_surface_unavailable_is_recoverable() {
    assert!(LockstepError::surface_unavailable("x").is_recoverable());
    assert!(!LockstepError::context_creation("x").is_recoverable());
    assert!(!LockstepError::node_creation("x").is_recoverable());
    assert!(!LockstepError::media_decode("x").is_recoverable());
    assert!(!LockstepError::validation("x").is_recoverable());
}
