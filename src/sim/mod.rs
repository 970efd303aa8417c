//! Renderer-independent simulation core.

pub mod catalog;
pub mod clock;
pub mod interaction;
pub mod orbit;
pub mod stellar;
mod system;

pub use catalog::{BodyDescriptor, Fact, PLANET_COUNT};
pub use clock::SimulationClock;
pub use interaction::{InteractionError, InteractionState};
pub use orbit::{BodyPresentation, OrbitState};
pub use stellar::{StellarFrame, StellarOscillation, StellarState};
pub use system::{SolarSystem, StarPausePolicy};
