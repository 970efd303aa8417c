use core::f64::consts::TAU;

use glam::{DMat4, DVec3};
use rand::{Rng, SeedableRng, rngs::StdRng};
use three_d::{Mat4, Srgba};

use super::transforms::to_mat4;

pub const INNER_RADIUS: f64 = 300.0;
pub const DEPTH: f64 = 100.0;
pub const SEED: u64 = 0x5EED_57A2;

const MIN_SIZE: f64 = 0.25;
const MAX_SIZE: f64 = 0.9;

/// Angular rate of the twinkle, in radians per second of star time.
pub const TWINKLE_SPEED: f64 = 0.2;
/// Fraction of a star's brightness lost at the dimmest point of a twinkle.
pub const TWINKLE_DEPTH: f64 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStar {
    pub position: DVec3,
    pub size: f64,
    /// Grey level of the star. The field is unsaturated.
    pub brightness: u8,
    pub twinkle_phase: f64,
}

impl BackgroundStar {
    /// Grey level at star time `t`, never above [`Self::brightness`].
    pub fn brightness_at(&self, t: f64) -> u8 {
        let wave = 0.5 + 0.5 * (t * TWINKLE_SPEED + self.twinkle_phase).sin();
        (self.brightness as f64 * (1.0 - TWINKLE_DEPTH * wave)).round() as u8
    }
}

/// Scatters `count` stars uniformly over a spherical shell.
pub fn generate(count: usize, seed: u64) -> Vec<BackgroundStar> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let z: f64 = rng.gen_range(-1.0..=1.0);
            let phi: f64 = rng.gen_range(0.0..TAU);
            let ring = (1.0 - z * z).sqrt();
            let direction = DVec3::new(ring * phi.cos(), z, ring * phi.sin());
            let radius = INNER_RADIUS + rng.gen_range(0.0..=DEPTH);

            BackgroundStar {
                position: direction * radius,
                size: rng.gen_range(MIN_SIZE..=MAX_SIZE),
                brightness: rng.gen_range(150..=255),
                twinkle_phase: rng.gen_range(0.0..TAU),
            }
        })
        .collect()
}

pub fn transformations(stars: &[BackgroundStar]) -> Vec<Mat4> {
    stars
        .iter()
        .map(|star| {
            to_mat4(DMat4::from_scale_rotation_translation(
                DVec3::splat(star.size),
                glam::DQuat::IDENTITY,
                star.position,
            ))
        })
        .collect()
}

pub fn colors(stars: &[BackgroundStar], t: f64) -> Vec<Srgba> {
    stars
        .iter()
        .map(|star| {
            let level = star.brightness_at(t);
            Srgba::new_opaque(level, level, level)
        })
        .collect()
}
