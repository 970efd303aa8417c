/// Simulation time added per unpaused frame.
pub const STEP: f64 = 0.01;

/// Struct that keeps the simulation's notion of time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationClock {
    /// Simulation time. Advances by [`STEP`] per unpaused frame.
    elapsed_time: f64,

    /// Wall-clock time since start, in seconds.
    real_time: f64,

    /// Number of unpaused frames so far.
    frame: u64,

    is_paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by one frame.
    ///
    /// `real_time_delta`: wall-clock seconds since the previous frame.
    /// Negative or non-finite values count as zero.
    ///
    /// Returns: The simulation time added this frame.
    pub fn tick(&mut self, real_time_delta: f64) -> f64 {
        if real_time_delta.is_finite() && real_time_delta > 0.0 {
            self.real_time += real_time_delta;
        }

        if self.is_paused {
            return 0.0;
        }

        self.elapsed_time += STEP;
        self.frame += 1;
        STEP
    }

    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    #[inline]
    pub fn real_time(&self) -> f64 {
        self.real_time
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Returns: The new pause state.
    pub fn toggle_paused(&mut self) -> bool {
        self.is_paused = !self.is_paused;
        self.is_paused
    }
}
