use crate::foundation::error::{LockstepError, LockstepResult};

/// Kind of media a scene references.
///
/// Only [`MediaKind::Video`] drives the synchronization bridge; the other
/// kinds are previewed without a rendering context and leave the bridge
/// inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaKind {
    /// A single video source.
    Video,
    /// A still image.
    Image,
    /// An ordered set of still images.
    Gallery,
    /// No media selected.
    #[default]
    None,
}

impl MediaKind {
    /// Whether this kind activates playback synchronization.
    pub fn activates_bridge(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Aspect-ratio hint as a width:height pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AspectRatio {
    /// Width component.
    pub num: u32,
    /// Height component.
    pub den: u32,
}

impl AspectRatio {
    /// 16:9 landscape.
    pub const WIDESCREEN: Self = Self { num: 16, den: 9 };
    /// 9:16 portrait, the short-video default.
    pub const PORTRAIT: Self = Self { num: 9, den: 16 };
    /// 1:1.
    pub const SQUARE: Self = Self { num: 1, den: 1 };

    /// Build a validated ratio; both components must be > 0.
    pub fn new(num: u32, den: u32) -> LockstepResult<Self> {
        if num == 0 {
            return Err(LockstepError::validation("AspectRatio num must be > 0"));
        }
        if den == 0 {
            return Err(LockstepError::validation("AspectRatio den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Ratio as a float (width over height).
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

/// Pixel dimensions of the compositing drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Size a surface from an aspect hint.
    ///
    /// The longer dimension is fixed at `base`; the other is derived from
    /// the ratio and rounded to the nearest integer pixel, never below 1.
    pub fn from_aspect(base: u32, aspect: AspectRatio) -> Self {
        let ratio = aspect.as_f64();
        if ratio >= 1.0 {
            let height = (f64::from(base) / ratio).round() as u32;
            Self {
                width: base,
                height: height.max(1),
            }
        } else {
            let width = (f64::from(base) * ratio).round() as u32;
            Self {
                width: width.max(1),
                height: base,
            }
        }
    }
}

/// Consumer-owned start/end clamp for a scene's usable media range.
///
/// The bridge itself accepts any seek target and clamps only to media
/// duration; trim enforcement happens in the consumer by passing seek
/// targets through this window first.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrimWindow {
    /// Start of the usable range in seconds.
    pub start: f64,
    /// End of the usable range in seconds.
    pub end: f64,
}

impl TrimWindow {
    /// Build a validated window; bounds must be finite, non-negative, and
    /// ordered.
    pub fn new(start: f64, end: f64) -> LockstepResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(LockstepError::validation("TrimWindow bounds must be finite"));
        }
        if start < 0.0 {
            return Err(LockstepError::validation("TrimWindow start must be >= 0"));
        }
        if start > end {
            return Err(LockstepError::validation("TrimWindow start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Clamp a seek target into the window.
    pub fn clamp(self, secs: f64) -> f64 {
        if !secs.is_finite() {
            return self.start;
        }
        secs.clamp(self.start, self.end)
    }

    /// Whether `secs` falls inside the window.
    pub fn contains(self, secs: f64) -> bool {
        self.start <= secs && secs <= self.end
    }

    /// Usable length in seconds.
    pub fn len_secs(self) -> f64 {
        self.end - self.start
    }
}

/// Construction options for a bridge.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BridgeOptions {
    /// Longer dimension of the drawing surface in pixels.
    pub base_size: u32,
    /// Upper playable bound handed to a new source node before its real
    /// duration is known. A generous ceiling, not an estimate.
    pub playable_ceiling_secs: f64,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            base_size: 1280,
            playable_ceiling_secs: 1_000_000.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
