// Host-side tests for the particle update and respawn policy.

use player_core::*;

const W: f32 = 800.0;
const H: f32 = 600.0;

fn dims() -> Dimensions {
    Dimensions::new(W, H)
}

#[test]
fn spawn_sits_just_below_canvas_with_horizontal_drift() {
    let mut bins = vec![0_u8; BIN_COUNT];
    bins[3] = 200;
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    for seed in 0..50 {
        let p = Particle::new(3, seed, &frame);
        assert_eq!(p.position.y, H + p.size);
        assert_eq!(p.velocity.y, 0.0);
        assert!(p.velocity.x >= -DRIFT_MAX && p.velocity.x <= DRIFT_MAX);
        assert!(p.position.x >= 0.0 && p.position.x <= W);
    }
}

#[test]
fn spawn_size_uses_mean_canvas_edge() {
    let mut bins = vec![0_u8; BIN_COUNT];
    bins[0] = 100;
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let p = Particle::new(0, 7, &frame);
    // 1.0 * 700 * 0.0125 + 5
    assert!((p.size - 13.75).abs() < 1e-4, "size was {}", p.size);
    assert!((p.freq_value - 1.0).abs() < 1e-6);
}

#[test]
fn same_seed_spawns_identically() {
    let bins = vec![0_u8; BIN_COUNT];
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let a = Particle::new(5, 99, &frame);
    let b = Particle::new(5, 99, &frame);
    assert_eq!(a.position, b.position);
    assert_eq!(a.velocity, b.velocity);
}

#[test]
fn silent_bins_give_transparent_minimum_particles() {
    let bins = vec![0_u8; BIN_COUNT];
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut field = ParticleField::populate(BIN_COUNT, 1, &frame);
    field.advance_all(&frame);
    for p in &field {
        assert_eq!(p.color.alpha, 0.0);
        assert_eq!(p.color.saturation, 0.0);
        assert_eq!(p.size, MIN_SIZE);
    }
}

#[test]
fn loud_bin_is_larger_more_opaque_and_lifts_faster() {
    let mut bins = vec![0_u8; BIN_COUNT];
    bins[0] = 255;
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut field = ParticleField::populate(BIN_COUNT, 11, &frame);
    field.advance_all(&frame);
    let loud = field.get(0).unwrap();
    for p in field.iter().skip(1) {
        assert!(loud.size > p.size);
        assert!(loud.color.alpha > p.color.alpha);
        assert!(loud.lift > p.lift);
    }
}

#[test]
fn advance_uses_per_frame_size_formula() {
    let mut bins = vec![0_u8; BIN_COUNT];
    bins[2] = 150;
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut p = Particle::new(2, 3, &frame);
    p.advance(&frame);
    // 1.5 * 20 + 5
    assert!((p.size - 35.0).abs() < 1e-4);
    assert!((p.lift - 3.375).abs() < 1e-4);
    assert!((p.color.saturation - 75.0).abs() < 1e-4);
    assert!((p.color.alpha - 0.45).abs() < 1e-5);
}

#[test]
fn advance_moves_up_by_lift_plus_base_and_drifts() {
    let mut bins = vec![0_u8; BIN_COUNT];
    bins[1] = 100;
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut p = Particle::new(1, 4, &frame);
    p.position = glam::Vec2::new(400.0, 300.0);
    p.velocity = glam::Vec2::new(1.5, 0.0);
    p.advance(&frame);
    // lift = 1.0^3
    assert!((p.position.y - (300.0 - 1.0 - BASE_RISE)).abs() < 1e-4);
    assert!((p.position.x - 401.5).abs() < 1e-4);
}

#[test]
fn hue_spreads_over_bins_and_rotates_with_tick() {
    let bins = vec![0_u8; BIN_COUNT];
    let f0 = FrameSnapshot::new(&bins, dims(), 0);
    let f60 = FrameSnapshot::new(&bins, dims(), 60);
    let mut p = Particle::new(256, 8, &f0);
    p.position = glam::Vec2::new(400.0, 300.0);
    p.advance(&f0);
    assert!((p.color.hue - (180.0 + HUE_OFFSET)).abs() < 1e-3);
    p.advance(&f60);
    assert!((p.color.hue - (180.0 + HUE_OFFSET + 10.0)).abs() < 1e-3);
}

#[test]
fn particle_above_top_edge_respawns_below_canvas() {
    let bins = vec![0_u8; BIN_COUNT];
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut p = Particle::new(10, 21, &frame);
    p.position = glam::Vec2::new(400.0, -p.size - 1.0);
    p.advance(&frame);
    assert_eq!(p.position.y, H + p.size);
    assert_eq!(p.velocity.y, 0.0);
}

#[test]
fn lateral_drift_past_margin_respawns() {
    let bins = vec![0_u8; BIN_COUNT];
    let frame = FrameSnapshot::new(&bins, dims(), 0);

    let mut right = Particle::new(0, 1, &frame);
    right.position = glam::Vec2::new(W * 1.15 + 1.0, 300.0);
    right.velocity = glam::Vec2::new(1.0, 0.0);
    right.advance(&frame);
    assert_eq!(right.position.y, H + right.size);

    let mut left = Particle::new(0, 2, &frame);
    left.position = glam::Vec2::new(-W * 0.15 - 1.0, 300.0);
    left.velocity = glam::Vec2::new(-1.0, 0.0);
    left.advance(&frame);
    assert_eq!(left.position.y, H + left.size);
}

#[test]
fn drift_inside_margin_is_kept() {
    let bins = vec![0_u8; BIN_COUNT];
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut p = Particle::new(0, 1, &frame);
    p.position = glam::Vec2::new(W * 1.1, 300.0);
    p.velocity = glam::Vec2::ZERO;
    p.advance(&frame);
    assert!((p.position.x - W * 1.1).abs() < 1e-3);
    assert!((p.position.y - 299.5).abs() < 1e-4);
}

#[test]
fn missing_bins_read_as_silence() {
    let bins: Vec<u8> = Vec::new();
    let frame = FrameSnapshot::new(&bins, dims(), 0);
    let mut p = Particle::new(300, 5, &frame);
    p.advance(&frame);
    assert_eq!(p.size, MIN_SIZE);
    assert!(p.color.hue.is_finite());
}

#[test]
fn dimensions_are_clamped_and_sanitized() {
    let d = Dimensions::new(0.0, f32::NAN);
    assert_eq!(d.width, MIN_DIMENSION);
    assert_eq!(d.height, MIN_DIMENSION);
    let d = Dimensions::new(-5.0, f32::INFINITY);
    assert_eq!(d.width, MIN_DIMENSION);
    assert_eq!(d.height, MIN_DIMENSION);
}

#[test]
fn hsla_css_string() {
    let c = Hsla {
        hue: 180.0,
        saturation: 25.0,
        alpha: 0.5,
    };
    assert_eq!(c.to_css(), "hsla(180, 25%, 50%, 0.5)");
}
