use crate::constants::*;
use crate::state::{FrameSnapshot, Hsla};
use glam::Vec2;
use rand::prelude::*;

/// One visual element bound to a single frequency bin.
///
/// Every particle owns its own generator, so advancing a field in any order
/// consumes randomness identically.
#[derive(Clone, Debug)]
pub struct Particle {
    index: usize,
    pub freq_value: f32,
    pub size: f32,
    pub lift: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Hsla,
    rng: StdRng,
}

impl Particle {
    /// Create the particle for bin `index` and spawn it just below the canvas.
    pub fn new(index: usize, seed: u64, frame: &FrameSnapshot) -> Self {
        let mut p = Self {
            index,
            freq_value: 0.0,
            size: MIN_SIZE,
            lift: 0.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: Hsla::default(),
            rng: StdRng::seed_from_u64(seed),
        };
        p.respawn(frame);
        p
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Re-seed position and drift in place from the current bin amplitude.
    pub fn respawn(&mut self, frame: &FrameSnapshot) {
        let dims = frame.dims;
        self.freq_value = frame.amplitude(self.index) as f32 * FREQ_SCALE;
        self.size = self.freq_value * dims.mean_edge() * SPAWN_SIZE_SCALE + MIN_SIZE;
        self.position = Vec2::new(
            self.rng.gen::<f32>() * dims.width,
            dims.height + self.size,
        );
        self.velocity = Vec2::new(self.rng.gen_range(-DRIFT_MAX..DRIFT_MAX), 0.0);
    }

    /// Recompute size and colour from the current bin, move, then respawn if
    /// the particle left the visible region.
    pub fn advance(&mut self, frame: &FrameSnapshot) {
        self.freq_value = frame.amplitude(self.index) as f32 * FREQ_SCALE;
        self.size = self.freq_value * UPDATE_SIZE_SCALE + MIN_SIZE;

        self.color = Hsla {
            hue: self.index as f32 / frame.bin_count() as f32 * 360.0
                + HUE_OFFSET
                + frame.tick as f32 / HUE_TICK_DIVISOR,
            saturation: self.freq_value * SATURATION_SCALE,
            alpha: self.freq_value * ALPHA_SCALE,
        };

        self.lift = self.freq_value.powi(3);
        self.position.y -= self.lift + BASE_RISE;
        self.position += self.velocity;

        if self.out_of_bounds(frame) {
            log::trace!("[particle] respawn index={}", self.index);
            self.respawn(frame);
        }
    }

    /// Above the top edge by more than one size, or drifted past the lateral margin.
    pub fn out_of_bounds(&self, frame: &FrameSnapshot) -> bool {
        let w = frame.dims.width;
        self.position.y < -self.size
            || self.position.x < -w * BOUNDS_MARGIN
            || self.position.x > w * (1.0 + BOUNDS_MARGIN)
    }
}
