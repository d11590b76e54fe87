//! Per-frame state types shared with the web frontend.
//!
//! Nothing here touches a platform API. The web frontend fills a
//! [`FrameSnapshot`] once per animation frame and hands it to the particle
//! pass, which only ever reads it.

use crate::constants::{LIGHTNESS, MIN_DIMENSION};

/// Canvas size in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Build dimensions, replacing non-finite values and clamping each edge to
    /// at least [`MIN_DIMENSION`].
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Mean of both edges, used to scale the spawn size.
    #[inline]
    pub fn mean_edge(&self) -> f32 {
        (self.width + self.height) * 0.5
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(MIN_DIMENSION, MIN_DIMENSION)
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_DIMENSION)
    } else {
        MIN_DIMENSION
    }
}

/// Particle fill colour. Lightness is fixed at 50%.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub alpha: f32,
}

impl Hsla {
    /// CSS colour string accepted by `CanvasRenderingContext2d::fillStyle`.
    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, LIGHTNESS, self.alpha
        )
    }
}

/// Read-only view of everything a particle needs for one frame.
///
/// `bins` is written exactly once per frame by the spectrum source before the
/// particle pass begins; `tick` only drives the colour phase.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub bins: &'a [u8],
    pub dims: Dimensions,
    pub tick: u64,
}

impl<'a> FrameSnapshot<'a> {
    pub fn new(bins: &'a [u8], dims: Dimensions, tick: u64) -> Self {
        Self { bins, dims, tick }
    }

    /// Amplitude of bin `index`; bins past the end of the buffer read as silence.
    #[inline]
    pub fn amplitude(&self, index: usize) -> u8 {
        self.bins.get(index).copied().unwrap_or(0)
    }

    /// Buffer length used for the hue spread, never zero.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bins.len().max(1)
    }
}
