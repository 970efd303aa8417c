use glam::DVec3;

use super::catalog::BodyDescriptor;

/// Display scale multiplier applied to a hovered body.
pub const HOVER_SCALE: f64 = 1.2;

/// Emissive glow of a body that is not hovered.
pub const IDLE_GLOW: f64 = 0.08;

/// Emissive glow of a hovered body.
pub const HOVER_GLOW: f64 = 0.15;

/// Vertical gap between the top of a body and its label.
pub const LABEL_CLEARANCE: f64 = 0.5;

/// Accumulated rotation of one orbiting body.
///
/// Angles are in radians and are never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitState {
    /// Rotation of the body's orbit around the star, about +Y.
    pub orbit_angle: f64,
    /// Rotation of the body about its own axis, about +Y.
    pub self_angle: f64,
}

impl OrbitState {
    /// Advances the state by one frame.
    ///
    /// `elapsed_delta`: simulation time since the previous frame.
    /// `speed_multiplier`: the user's multiplier for this body, already clamped.
    #[must_use]
    pub fn advance(
        self,
        body: &BodyDescriptor,
        elapsed_delta: f64,
        is_paused: bool,
        speed_multiplier: f64,
    ) -> Self {
        if is_paused {
            return self;
        }

        Self {
            orbit_angle: self.orbit_angle
                + body.base_angular_speed * speed_multiplier * elapsed_delta,
            self_angle: self.self_angle + body.self_rotation_rate * elapsed_delta,
        }
    }

    /// Gets the position of a body at `distance` from the star.
    ///
    /// The body sits at `(distance, 0, 0)` inside a group rotated by the
    /// orbit angle about +Y.
    pub fn position(&self, distance: f64) -> DVec3 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        DVec3::new(distance * cos, 0.0, -distance * sin)
    }
}

/// Hover-dependent display parameters of a body. Only a hovered body is
/// labeled.
///
/// These never affect the body's angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPresentation {
    pub scale: f64,
    pub glow: f64,
}

impl BodyPresentation {
    pub fn for_body(body: &BodyDescriptor, hovered: bool) -> Self {
        if hovered {
            Self {
                scale: body.radius * HOVER_SCALE,
                glow: HOVER_GLOW,
            }
        } else {
            Self {
                scale: body.radius,
                glow: IDLE_GLOW,
            }
        }
    }

    /// Height of the label above the orbital plane.
    pub fn label_height(body: &BodyDescriptor) -> f64 {
        body.radius + LABEL_CLEARANCE
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        catalog::{bodies, find},
        clock::STEP,
    };
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_paused_is_frozen() {
        for body in bodies() {
            let start = OrbitState {
                orbit_angle: 1.25,
                self_angle: -3.5,
            };
            let mut state = start;
            for _ in 0..100 {
                state = state.advance(body, STEP, true, 5.0);
            }
            assert_eq!(state, start, "{} moved while paused", body.name);
        }
    }

    #[test]
    fn test_zero_multiplier_still_spins() {
        for body in bodies() {
            let mut state = OrbitState::default();
            for i in 1..=10 {
                state = state.advance(body, STEP, false, 0.0);
                assert_eq!(state.orbit_angle, 0.0);
                assert!((state.self_angle - 0.02 * i as f64).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_mercury_single_step() {
        let mercury = find("Mercury").unwrap();
        let before = OrbitState {
            orbit_angle: 0.75,
            self_angle: 0.0,
        };
        let after = before.advance(mercury, STEP, false, 0.1);
        assert!((after.orbit_angle - before.orbit_angle - 0.002).abs() < EPSILON);
        assert!((after.self_angle - 0.02).abs() < EPSILON);
    }

    #[test]
    fn test_self_rotation_ignores_multiplier() {
        let earth = find("Earth").unwrap();
        let slow = OrbitState::default().advance(earth, STEP, false, 0.0);
        let fast = OrbitState::default().advance(earth, STEP, false, 5.0);
        assert_eq!(slow.self_angle, fast.self_angle);
        assert!(fast.orbit_angle > slow.orbit_angle);
    }

    #[test]
    fn test_angles_unbounded() {
        let mercury = find("Mercury").unwrap();
        let mut state = OrbitState::default();
        for _ in 0..10_000 {
            state = state.advance(mercury, STEP, false, 5.0);
        }
        assert!(state.orbit_angle > core::f64::consts::TAU);
    }

    #[test]
    fn test_position() {
        let state = OrbitState::default();
        let pos = state.position(3.5);
        assert!((pos - DVec3::new(3.5, 0.0, 0.0)).length() < EPSILON);

        let quarter = OrbitState {
            orbit_angle: core::f64::consts::FRAC_PI_2,
            self_angle: 0.0,
        };
        let pos = quarter.position(2.0);
        assert!((pos - DVec3::new(0.0, 0.0, -2.0)).length() < EPSILON);
        assert!((pos.length() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_presentation() {
        let saturn = find("Saturn").unwrap();

        let idle = BodyPresentation::for_body(saturn, false);
        assert_eq!(idle.scale, saturn.radius);
        assert_eq!(idle.glow, IDLE_GLOW);

        let hovered = BodyPresentation::for_body(saturn, true);
        assert!((hovered.scale - saturn.radius * 1.2).abs() < EPSILON);
        assert_eq!(hovered.glow, HOVER_GLOW);

        assert!((BodyPresentation::label_height(saturn) - 1.7).abs() < EPSILON);
    }
}
