//! Model matrices for every object in the scene.
//!
//! Rotations follow XYZ Euler order, i.e. `Rx * Ry * Rz`.

use core::f64::consts::{FRAC_PI_2, TAU};

use glam::{DMat4, DVec3};
use three_d::{Mat4, Vec4};

use crate::sim::{
    BodyDescriptor, BodyPresentation, OrbitState, StellarFrame,
    stellar::PROMINENCE_COUNT,
};

/// Tilt of every star layer about Z.
pub const STAR_AXIAL_TILT: f64 = core::f64::consts::PI / 12.0;

/// Distance of the prominences from the star's center.
pub const PROMINENCE_RING_RADIUS: f64 = 0.9;
pub const PROMINENCE_RADIUS: f64 = 0.05;
pub const PROMINENCE_HEIGHT: f64 = 0.3;

/// Half the width of an orbit ring.
pub const ORBIT_RING_HALF_WIDTH: f64 = 0.01;

/// The translucent shells around the star's core, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarShell {
    Corona,
    Flare,
    MiddleAtmosphere,
    OuterAtmosphere,
    Heat,
    Wind,
}

impl StarShell {
    pub const ALL: [Self; 6] = [
        Self::Corona,
        Self::Flare,
        Self::MiddleAtmosphere,
        Self::OuterAtmosphere,
        Self::Heat,
        Self::Wind,
    ];

    /// Radius of the unscaled shell.
    pub const fn radius(self) -> f64 {
        match self {
            Self::Corona => 0.85,
            Self::Flare => 0.9,
            _ => 0.8,
        }
    }

    /// `(rgb, opacity)` of the shell.
    pub const fn tint(self) -> ([u8; 3], f64) {
        match self {
            Self::Corona => ([0xFF, 0x8C, 0x00], 0.8),
            Self::Flare => ([0xFF, 0xAA, 0x00], 0.6),
            Self::MiddleAtmosphere => ([0xFF, 0xD7, 0x00], 0.35),
            Self::OuterAtmosphere => ([0xFF, 0xEE, 0xAA], 0.15),
            Self::Heat => ([0xFF, 0xDD, 0xAA], 0.05),
            Self::Wind => ([0xFF, 0xFF, 0xCC], 0.02),
        }
    }

    /// Model matrix of the shell for one frame.
    pub fn matrix(self, frame: &StellarFrame) -> DMat4 {
        let spin = &frame.spin;
        let osc = &frame.oscillation;
        let tilt = DMat4::from_rotation_z(STAR_AXIAL_TILT);

        let (rotation, scale) = match self {
            Self::Corona => (
                DMat4::from_rotation_y(spin.corona_rotation_y)
                    * DMat4::from_rotation_z(STAR_AXIAL_TILT + spin.corona_rotation_z),
                osc.corona_pulse_scale,
            ),
            Self::Flare => (
                DMat4::from_rotation_x(osc.flare_wobble)
                    * DMat4::from_rotation_y(spin.flare_rotation)
                    * tilt,
                osc.flare_scale,
            ),
            Self::MiddleAtmosphere => (tilt, 1.4),
            Self::OuterAtmosphere => (
                DMat4::from_rotation_y(spin.atmosphere_rotation) * tilt,
                osc.atmosphere_scale,
            ),
            Self::Heat => (tilt, 2.2),
            Self::Wind => (tilt, 2.8),
        };

        rotation * DMat4::from_scale(DVec3::splat(scale * self.radius()))
    }
}

/// Model matrix of the star's core, a unit sphere scaled to `radius`.
pub fn star_core(frame: &StellarFrame, radius: f64) -> DMat4 {
    DMat4::from_rotation_x(frame.oscillation.core_wobble)
        * DMat4::from_rotation_y(frame.spin.core_rotation)
        * DMat4::from_rotation_z(STAR_AXIAL_TILT)
        * DMat4::from_scale(DVec3::splat(radius))
}

/// Maps the unit cone along +X over `0..1` onto a cone centered on the
/// origin, pointing up +Y.
fn upright_cone(radius: f64, height: f64) -> DMat4 {
    DMat4::from_scale(DVec3::new(radius, height, radius))
        * DMat4::from_translation(DVec3::new(0.0, -0.5, 0.0))
        * DMat4::from_rotation_z(FRAC_PI_2)
}

/// Model matrices of the prominences around the star.
pub fn prominences(frame: &StellarFrame) -> [DMat4; PROMINENCE_COUNT] {
    let group = DMat4::from_rotation_y(frame.spin.prominence_rotation);
    let cone = upright_cone(PROMINENCE_RADIUS, PROMINENCE_HEIGHT);

    core::array::from_fn(|i| {
        let angle = i as f64 / PROMINENCE_COUNT as f64 * TAU;
        let flicker = frame.oscillation.prominence_flicker[i];
        let offset = DVec3::new(
            angle.cos() * PROMINENCE_RING_RADIUS,
            0.0,
            angle.sin() * PROMINENCE_RING_RADIUS,
        );

        group
            * DMat4::from_translation(offset)
            * DMat4::from_rotation_y(angle)
            * DMat4::from_rotation_z(flicker.tilt)
            * DMat4::from_scale(DVec3::new(1.0, flicker.elongation, 1.0))
            * cone
    })
}

/// Model matrix of a planet: a unit sphere at its orbital position.
pub fn planet(body: &BodyDescriptor, orbit: &OrbitState, presentation: &BodyPresentation) -> DMat4 {
    DMat4::from_rotation_y(orbit.orbit_angle)
        * DMat4::from_translation(DVec3::new(body.orbital_distance, 0.0, 0.0))
        * DMat4::from_rotation_y(orbit.self_angle)
        * DMat4::from_scale(DVec3::splat(presentation.scale))
}

/// Model matrix of a planet's ring. The ring mesh lies in the XY plane.
pub fn planet_ring(body: &BodyDescriptor, orbit: &OrbitState, tilt: f64) -> DMat4 {
    DMat4::from_rotation_y(orbit.orbit_angle)
        * DMat4::from_translation(DVec3::new(body.orbital_distance, 0.0, 0.0))
        * DMat4::from_rotation_x(tilt)
}

/// Model matrix of an orbit ring, laid flat in the orbital plane.
pub fn orbit_ring() -> DMat4 {
    DMat4::from_rotation_x(FRAC_PI_2)
}

/// Converts to the renderer's matrix type.
pub fn to_mat4(m: DMat4) -> Mat4 {
    let [x, y, z, w] = m.as_mat4().to_cols_array_2d();
    Mat4 {
        x: Vec4::new(x[0], x[1], x[2], x[3]),
        y: Vec4::new(y[0], y[1], y[2], y[3]),
        z: Vec4::new(z[0], z[1], z[2], z[3]),
        w: Vec4::new(w[0], w[1], w[2], w[3]),
    }
}
