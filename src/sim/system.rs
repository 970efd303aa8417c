use super::{
    catalog::{self, PLANET_COUNT},
    clock::SimulationClock,
    interaction::InteractionState,
    orbit::OrbitState,
    stellar::{StellarFrame, StellarState},
};

/// Whether pausing the simulation also freezes the star's animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StarPausePolicy {
    /// The star keeps animating on real time while planets are paused.
    #[default]
    IgnorePause,
    /// The star stops together with the planets.
    FreezeOnPause,
}

impl StarPausePolicy {
    pub fn from_freeze_flag(freeze: bool) -> Self {
        if freeze {
            Self::FreezeOnPause
        } else {
            Self::IgnorePause
        }
    }
}

/// Struct that owns every animated record of the system.
#[derive(Clone, Debug, Default)]
pub struct SolarSystem {
    clock: SimulationClock,
    orbits: [OrbitState; PLANET_COUNT],
    stellar: StellarState,
    star_policy: StarPausePolicy,

    /// Seconds the star has been animating for.
    star_time: f64,
}

impl SolarSystem {
    pub fn new(star_policy: StarPausePolicy) -> Self {
        Self {
            star_policy,
            ..Default::default()
        }
    }

    /// Advances the system by one frame.
    ///
    /// `real_delta`: wall-clock seconds since the previous frame.
    pub fn tick(&mut self, real_delta: f64, interaction: &InteractionState) {
        let was_paused = self.clock.is_paused();
        let step = self.clock.tick(real_delta);

        for (index, (body, orbit)) in catalog::bodies().iter().zip(&mut self.orbits).enumerate() {
            *orbit = orbit.advance(body, step, was_paused, interaction.speed_at(index));
        }

        let star_frozen = was_paused && self.star_policy == StarPausePolicy::FreezeOnPause;
        if star_frozen {
            return;
        }

        if real_delta.is_finite() && real_delta > 0.0 {
            self.star_time += real_delta;
        }
        self.stellar.advance(self.star_time);
    }

    #[inline]
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    /// Panics if `index` is out of range.
    #[inline]
    pub fn orbit(&self, index: usize) -> OrbitState {
        self.orbits[index]
    }

    #[inline]
    pub fn orbits(&self) -> &[OrbitState; PLANET_COUNT] {
        &self.orbits
    }

    #[inline]
    pub fn stellar_frame(&self) -> &StellarFrame {
        self.stellar.frame()
    }

    #[inline]
    pub fn star_policy(&self) -> StarPausePolicy {
        self.star_policy
    }

    #[inline]
    pub fn star_time(&self) -> f64 {
        self.star_time
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    /// Returns: The new pause state.
    pub fn toggle_paused(&mut self) -> bool {
        self.clock.toggle_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{catalog::index_of, stellar::StellarOscillation};
    use super::*;

    #[test]
    fn test_tick_advances_every_planet() {
        let mut system = SolarSystem::default();
        let interaction = InteractionState::new();
        system.tick(0.016, &interaction);

        for (body, orbit) in catalog::bodies().iter().zip(system.orbits()) {
            let expected = body.base_angular_speed * 0.1 * 0.01;
            assert!((orbit.orbit_angle - expected).abs() < 1e-12, "{}", body.name);
            assert!((orbit.self_angle - 0.02).abs() < 1e-12);
        }
        assert_eq!(system.clock().frame(), 1);
    }

    #[test]
    fn test_speed_multipliers_apply() {
        let mut system = SolarSystem::default();
        let mut interaction = InteractionState::new();
        interaction.set_speed("Jupiter", 0.0).unwrap();
        interaction.set_speed("Mercury", 5.0).unwrap();

        for _ in 0..10 {
            system.tick(0.016, &interaction);
        }

        let jupiter = system.orbit(index_of("Jupiter").unwrap());
        assert_eq!(jupiter.orbit_angle, 0.0);
        assert!((jupiter.self_angle - 0.2).abs() < 1e-9);

        let mercury = system.orbit(index_of("Mercury").unwrap());
        assert!((mercury.orbit_angle - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_freezes_planets() {
        let mut system = SolarSystem::default();
        let interaction = InteractionState::new();
        system.tick(0.016, &interaction);

        system.set_paused(true);
        let frozen = *system.orbits();
        let elapsed = system.clock().elapsed_time();
        for _ in 0..20 {
            system.tick(0.016, &interaction);
        }
        assert_eq!(*system.orbits(), frozen);
        assert_eq!(system.clock().elapsed_time(), elapsed);

        system.toggle_paused();
        system.tick(0.016, &interaction);
        assert_ne!(*system.orbits(), frozen);
    }

    #[test]
    fn test_star_ignores_pause_by_default() {
        let mut system = SolarSystem::new(StarPausePolicy::IgnorePause);
        let interaction = InteractionState::new();
        system.set_paused(true);

        for _ in 0..10 {
            system.tick(0.1, &interaction);
        }
        let frame = system.stellar_frame();
        assert!((frame.spin.core_rotation - 0.05).abs() < 1e-12);
        assert!((system.star_time() - 1.0).abs() < 1e-12);
        assert_eq!(frame.oscillation, StellarOscillation::at(system.star_time()));
    }

    #[test]
    fn test_star_can_freeze_on_pause() {
        let mut system = SolarSystem::new(StarPausePolicy::from_freeze_flag(true));
        let interaction = InteractionState::new();
        system.tick(0.1, &interaction);
        let before = *system.stellar_frame();

        system.set_paused(true);
        for _ in 0..10 {
            system.tick(0.1, &interaction);
        }
        assert_eq!(*system.stellar_frame(), before);
        assert!((system.star_time() - 0.1).abs() < 1e-12);
        assert!((system.clock().real_time() - 1.1).abs() < 1e-12);
    }
}
