//! The static table of celestial bodies shown by the simulation.
//!
//! The data lives in `catalog.toml` and is validated and turned into
//! statics by the build script.

use std::fmt::{self, Display};

use strum_macros::{EnumIter, IntoStaticStr};

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

/// An opaque handle to an image resource, resolved by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureRef(pub &'static str);

impl TextureRef {
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl Display for TextureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Keys of a [`FactSheet`], in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Fact {
    #[strum(serialize = "Diameter")]
    Diameter,
    #[strum(serialize = "Distance from Sun")]
    DistanceFromSun,
    #[strum(serialize = "Year Length")]
    YearLength,
    #[strum(serialize = "Day Length")]
    DayLength,
    #[strum(serialize = "Moons")]
    Moons,
    #[strum(serialize = "Composition")]
    Composition,
    #[strum(serialize = "Temperature")]
    Temperature,
}

impl Fact {
    /// The label shown next to the value.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Display-only facts about a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactSheet {
    pub diameter: &'static str,
    pub distance_from_sun: &'static str,
    pub year_length: &'static str,
    pub day_length: &'static str,
    pub moons: &'static str,
    pub composition: &'static str,
    pub temperature: &'static str,
}

impl FactSheet {
    pub const fn get(&self, fact: Fact) -> &'static str {
        match fact {
            Fact::Diameter => self.diameter,
            Fact::DistanceFromSun => self.distance_from_sun,
            Fact::YearLength => self.year_length,
            Fact::DayLength => self.day_length,
            Fact::Moons => self.moons,
            Fact::Composition => self.composition,
            Fact::Temperature => self.temperature,
        }
    }

    /// Iterates over `(label, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        use strum::IntoEnumIterator;
        Fact::iter().map(|fact| (fact.label(), self.get(fact)))
    }
}

/// A flat ring around a body, e.g. Saturn's.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingFeature {
    /// Inner radius, as a multiple of the body radius.
    pub inner: f64,
    /// Outer radius, as a multiple of the body radius.
    pub outer: f64,
    /// Tilt about the X axis, in radians.
    pub tilt: f64,
    pub color: [u8; 3],
    pub opacity: f64,
}

/// Per-body rendering differences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFeatures {
    pub roughness: f64,
    pub metalness: f64,
    pub rings: Option<RingFeature>,
}

/// A struct describing a celestial body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDescriptor {
    /// Unique name of the body.
    pub name: &'static str,

    /// Relative display size. Not to scale.
    pub radius: f64,

    /// Relative distance from the star. Zero for the star itself.
    pub orbital_distance: f64,

    /// Relative orbital rate. Higher means a shorter year.
    pub base_angular_speed: f64,

    /// Spin about the body's own axis, in radians per unit of simulation time.
    pub self_rotation_rate: f64,

    /// sRGB display tint.
    pub color: [u8; 3],

    pub texture: TextureRef,

    pub facts: FactSheet,

    pub features: BodyFeatures,
}

/// Returns the orbiting bodies, ordered by ascending orbital distance.
#[inline]
pub fn bodies() -> &'static [BodyDescriptor; PLANET_COUNT] {
    &PLANETS
}

/// Returns the central star.
#[inline]
pub fn star() -> &'static BodyDescriptor {
    &STAR
}

/// Gets the index of the orbiting body with the given name, if any.
pub fn index_of(name: &str) -> Option<usize> {
    PLANETS.iter().position(|b| b.name == name)
}

/// Gets the orbiting body with the given name, if any.
pub fn find(name: &str) -> Option<&'static BodyDescriptor> {
    index_of(name).map(|i| &PLANETS[i])
}
