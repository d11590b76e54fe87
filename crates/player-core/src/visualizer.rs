use crate::config::VisualizerParams;
use crate::field::ParticleField;
use crate::state::{Dimensions, FrameSnapshot};

/// Anything that can fill a byte spectrum once per frame.
///
/// The web frontend implements this over an `AnalyserNode`; tests use fixed buffers.
pub trait SpectrumSource {
    fn read_bytes(&mut self, out: &mut [u8]);
}

/// Silence; keeps the loop running when no analyser is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpectrum;

impl SpectrumSource for SilentSpectrum {
    fn read_bytes(&mut self, out: &mut [u8]) {
        out.fill(0);
    }
}

/// Owns the particle field, the shared spectrum buffer and the tick counter.
///
/// [`Visualizer::advance_frame`] is the single per-frame entry point; whatever
/// drives frame pacing on the platform calls it once per frame.
pub struct Visualizer {
    field: ParticleField,
    spectrum: Vec<u8>,
    dims: Dimensions,
    tick: u64,
}

impl Visualizer {
    pub fn new(params: &VisualizerParams, dims: Dimensions) -> Self {
        let spectrum = vec![0_u8; params.bin_count];
        let field = ParticleField::populate(
            params.bin_count,
            params.seed,
            &FrameSnapshot::new(&spectrum, dims, 0),
        );
        Self {
            field,
            spectrum,
            dims,
            tick: 0,
        }
    }

    pub fn set_dimensions(&mut self, dims: Dimensions) {
        if dims != self.dims {
            log::debug!("[frame] canvas {}x{}", dims.width, dims.height);
            self.dims = dims;
        }
    }

    /// Refresh the spectrum, advance every particle against that snapshot,
    /// then bump the tick.
    pub fn advance_frame<S: SpectrumSource + ?Sized>(&mut self, source: &mut S) {
        source.read_bytes(&mut self.spectrum);
        let frame = FrameSnapshot::new(&self.spectrum, self.dims, self.tick);
        self.field.advance_all(&frame);
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn spectrum(&self) -> &[u8] {
        &self.spectrum
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
