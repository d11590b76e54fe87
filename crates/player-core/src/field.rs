use crate::particle::Particle;
use crate::state::FrameSnapshot;

/// Fixed-size, index-ordered collection with one particle per frequency bin.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build `count` particles with indices `0..count`, all spawned from the
    /// same snapshot. Per-particle generators are derived from `seed`.
    pub fn populate(count: usize, seed: u64, frame: &FrameSnapshot) -> Self {
        let particles = (0..count)
            .map(|i| Particle::new(i, particle_seed(seed, i), frame))
            .collect::<Vec<_>>();
        log::info!("[field] populated {} particles", particles.len());
        Self { particles }
    }

    /// Advance every particle once, in index order.
    pub fn advance_all(&mut self, frame: &FrameSnapshot) {
        for p in &mut self.particles {
            p.advance(frame);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Same as [`ParticleField::advance_all`] but walking from the last index
    /// down; used to check that update order does not matter.
    #[doc(hidden)]
    pub fn advance_all_rev(&mut self, frame: &FrameSnapshot) {
        for p in self.particles.iter_mut().rev() {
            p.advance(frame);
        }
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

// Mix the base seed with the index so particles can be reseeded independently
#[inline]
pub fn particle_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Join two 32-bit random draws into a full 64-bit seed.
#[inline]
pub fn seed_from_halves(hi: u32, lo: u32) -> u64 {
    ((hi as u64) << 32) | lo as u64
}
