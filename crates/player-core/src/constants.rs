// Particle and spectrum tuning constants shared by the web frontend and tests.

// Spectrum
pub const FFT_SIZE: u32 = 1024; // analyser FFT size; yields FFT_SIZE / 2 bins
pub const BIN_COUNT: usize = 512; // one particle per frequency bin
pub const FREQ_SCALE: f32 = 0.01; // byte amplitude -> freq_value

// Sizing
pub const MIN_SIZE: f32 = 5.0; // size floor, never undercut
pub const SPAWN_SIZE_SCALE: f32 = 0.0125; // applied to the mean canvas edge at spawn
pub const UPDATE_SIZE_SCALE: f32 = 20.0; // applied to freq_value on every frame

// Motion
pub const DRIFT_MAX: f32 = 2.0; // horizontal velocity drawn from [-DRIFT_MAX, DRIFT_MAX)
pub const BASE_RISE: f32 = 0.5; // upward motion per frame on top of the lift
pub const BOUNDS_MARGIN: f32 = 0.15; // lateral overshoot allowed, as a fraction of width

// Colour
pub const HUE_OFFSET: f32 = 120.0;
pub const HUE_TICK_DIVISOR: f32 = 6.0;
pub const SATURATION_SCALE: f32 = 50.0;
pub const ALPHA_SCALE: f32 = 0.3;
pub const LIGHTNESS: f32 = 50.0;

// Canvas
pub const MIN_DIMENSION: f32 = 1.0; // dimensions are clamped to at least this
