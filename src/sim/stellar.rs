//! Layered animation of the central star.
//!
//! Spins are integrated once per frame; oscillations are closed-form
//! functions of the star's time in seconds.

pub const PROMINENCE_COUNT: usize = 8;

const CORE_SPIN_PER_FRAME: f64 = 0.005;
const CORONA_SPIN_Y_PER_FRAME: f64 = -0.003;
const CORONA_SPIN_Z_PER_FRAME: f64 = 0.001;
const FLARE_SPIN_PER_FRAME: f64 = 0.004;
const ATMOSPHERE_SPIN_PER_FRAME: f64 = -0.001;
const PROMINENCE_SPIN_PER_FRAME: f64 = 0.002;

/// Tilt and elongation of one flame-like protrusion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProminenceFlicker {
    /// Rotation about the local Z axis, in radians.
    pub tilt: f64,
    /// Scale along the local Y axis.
    pub elongation: f64,
}

/// The part of the star's animation that depends on time alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StellarOscillation {
    pub core_wobble: f64,
    pub corona_pulse_scale: f64,
    pub flare_wobble: f64,
    pub flare_scale: f64,
    pub atmosphere_scale: f64,
    pub prominence_flicker: [ProminenceFlicker; PROMINENCE_COUNT],
}

impl StellarOscillation {
    /// Evaluates every oscillation at `t` seconds.
    pub fn at(t: f64) -> Self {
        Self {
            core_wobble: (t * 0.1).sin() * 0.02,
            corona_pulse_scale: 1.1 + (t * 0.8).sin() * 0.05,
            flare_wobble: (t * 0.3).sin() * 0.1,
            flare_scale: 1.3 + (t * 1.2).sin() * 0.1,
            atmosphere_scale: 1.6 + (t * 0.5).sin() * 0.08,
            prominence_flicker: core::array::from_fn(|i| {
                let i = i as f64;
                ProminenceFlicker {
                    tilt: (t * (0.5 + i * 0.2)).sin() * 0.3,
                    elongation: 1.0 + (t * (1.0 + i * 0.3)).sin() * 0.2,
                }
            }),
        }
    }
}

/// Accumulated spins of the star's layers, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StellarSpin {
    pub core_rotation: f64,
    pub corona_rotation_y: f64,
    pub corona_rotation_z: f64,
    pub flare_rotation: f64,
    pub atmosphere_rotation: f64,
    pub prominence_rotation: f64,
}

impl StellarSpin {
    #[must_use]
    fn step(self) -> Self {
        Self {
            core_rotation: self.core_rotation + CORE_SPIN_PER_FRAME,
            corona_rotation_y: self.corona_rotation_y + CORONA_SPIN_Y_PER_FRAME,
            corona_rotation_z: self.corona_rotation_z + CORONA_SPIN_Z_PER_FRAME,
            flare_rotation: self.flare_rotation + FLARE_SPIN_PER_FRAME,
            atmosphere_rotation: self.atmosphere_rotation + ATMOSPHERE_SPIN_PER_FRAME,
            prominence_rotation: self.prominence_rotation + PROMINENCE_SPIN_PER_FRAME,
        }
    }
}

/// Everything the scene needs to pose the star for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StellarFrame {
    pub spin: StellarSpin,
    pub oscillation: StellarOscillation,
}

impl Default for StellarFrame {
    fn default() -> Self {
        Self {
            spin: StellarSpin::default(),
            oscillation: StellarOscillation::at(0.0),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StellarState {
    frame: StellarFrame,
}

impl StellarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the spins by one frame and evaluates the oscillations at `t`.
    pub fn advance(&mut self, t: f64) -> StellarFrame {
        self.frame = StellarFrame {
            spin: self.frame.spin.step(),
            oscillation: StellarOscillation::at(t),
        };
        self.frame
    }

    /// The most recently computed frame.
    #[inline]
    pub fn frame(&self) -> &StellarFrame {
        &self.frame
    }
}
