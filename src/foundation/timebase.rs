/// The two primitives every other component reads: whether playback is
/// active and where the playhead is. Pure state, no logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timebase {
    /// Whether playback is currently active.
    pub playing: bool,
    /// Current playback position in seconds.
    pub position: f64,
}

impl Timebase {
    /// Return to the stopped state at position zero.
    pub fn reset(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/timebase.rs"]
mod tests;
