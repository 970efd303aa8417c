use thiserror::Error;

use super::catalog::{self, BodyDescriptor, PLANET_COUNT};

pub const DEFAULT_SPEED: f64 = 0.1;
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 5.0;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("there is no cataloged body named {0:?}")]
    UnknownBody(String),
}

/// User-controlled state: the hovered body and per-body speed multipliers.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    hovered: Option<usize>,
    speeds: [f64; PLANET_COUNT],
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: None,
            speeds: [DEFAULT_SPEED; PLANET_COUNT],
        }
    }
}

fn lookup(name: &str) -> Result<usize, InteractionError> {
    catalog::index_of(name).ok_or_else(|| InteractionError::UnknownBody(name.to_owned()))
}

/// Clamps a requested multiplier into the allowed range. NaN becomes the minimum.
pub fn clamp_speed(value: f64) -> f64 {
    if value.is_nan() {
        MIN_SPEED
    } else {
        value.clamp(MIN_SPEED, MAX_SPEED)
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the hovered body.
    ///
    /// Unknown names are rejected and leave the state as it was.
    pub fn set_hover(&mut self, name: Option<&str>) -> Result<(), InteractionError> {
        self.hovered = name.map(lookup).transpose()?;
        Ok(())
    }

    /// Sets the hovered body by catalog index. Out-of-range indices clear it.
    pub(crate) fn set_hover_index(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < PLANET_COUNT);
    }

    pub fn hovered(&self) -> Option<&'static BodyDescriptor> {
        self.hovered.map(|i| &catalog::bodies()[i])
    }

    #[inline]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_name(&self) -> Option<&'static str> {
        self.hovered().map(|b| b.name)
    }

    pub fn is_hovered(&self, name: &str) -> bool {
        self.hovered_name() == Some(name)
    }

    /// Sets a body's speed multiplier.
    ///
    /// Returns: The stored value, after clamping to `0..=5`.
    pub fn set_speed(&mut self, name: &str, value: f64) -> Result<f64, InteractionError> {
        let index = lookup(name)?;
        Ok(self.set_speed_at(index, value))
    }

    /// Like [`Self::set_speed`], by catalog index.
    ///
    /// Panics if `index` is out of range.
    pub fn set_speed_at(&mut self, index: usize, value: f64) -> f64 {
        let value = clamp_speed(value);
        self.speeds[index] = value;
        value
    }

    pub fn speed(&self, name: &str) -> Option<f64> {
        catalog::index_of(name).map(|i| self.speeds[i])
    }

    /// Panics if `index` is out of range.
    #[inline]
    pub fn speed_at(&self, index: usize) -> f64 {
        self.speeds[index]
    }

    pub fn speeds(&self) -> impl Iterator<Item = (&'static BodyDescriptor, f64)> + '_ {
        catalog::bodies().iter().zip(self.speeds.iter().copied())
    }

    pub fn reset_speeds(&mut self) {
        self.speeds = [DEFAULT_SPEED; PLANET_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = InteractionState::new();
        assert_eq!(state.hovered(), None);
        assert_eq!(state.speeds().count(), PLANET_COUNT);
        assert!(state.speeds().all(|(_, speed)| speed == DEFAULT_SPEED));
    }

    #[test]
    fn test_reset_speeds() {
        let mut state = InteractionState::new();
        state.set_speed("Mars", 3.3).unwrap();
        state.set_speed("Neptune", 0.0).unwrap();
        state.set_speed("Jupiter", 5.0).unwrap();

        state.reset_speeds();
        for (body, speed) in state.speeds() {
            assert_eq!(speed, 0.1, "{} was not reset", body.name);
        }
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut state = InteractionState::new();
        assert_eq!(state.set_speed("Earth", 7.0), Ok(5.0));
        assert_eq!(state.speed("Earth"), Some(5.0));

        assert_eq!(state.set_speed("Earth", -2.0), Ok(0.0));
        assert_eq!(state.set_speed("Earth", f64::NAN), Ok(0.0));
        assert_eq!(state.set_speed("Earth", 2.5), Ok(2.5));
        assert_eq!(state.speed_at(catalog::index_of("Earth").unwrap()), 2.5);
    }

    #[test]
    fn test_zero_speed_is_kept() {
        let mut state = InteractionState::new();
        state.set_speed("Venus", 0.0).unwrap();
        assert_eq!(state.speed("Venus"), Some(0.0));
    }

    #[test]
    fn test_unknown_body() {
        let mut state = InteractionState::new();
        let before = state.clone();

        assert_eq!(
            state.set_speed("Pluto", 1.0),
            Err(InteractionError::UnknownBody("Pluto".into()))
        );
        assert!(state.set_hover(Some("Sun")).is_err());
        assert_eq!(state, before);
        assert_eq!(state.speed("Pluto"), None);
    }

    #[test]
    fn test_hover_scenario() {
        let mut state = InteractionState::new();

        state.set_hover(Some("Saturn")).unwrap();
        assert_eq!(state.hovered_name(), Some("Saturn"));
        assert!(state.is_hovered("Saturn"));
        assert!(!state.is_hovered("Jupiter"));
        assert_eq!(
            state.hovered().unwrap().facts.moons,
            "146+ (including Titan, Enceladus)"
        );

        state.set_hover(None).unwrap();
        assert_eq!(state.hovered(), None);
        assert!(!state.is_hovered("Saturn"));
    }

    #[test]
    fn test_hover_index() {
        let mut state = InteractionState::new();
        state.set_hover_index(Some(2));
        assert_eq!(state.hovered_name(), Some("Earth"));
        state.set_hover_index(Some(PLANET_COUNT));
        assert_eq!(state.hovered_index(), None);
    }
}
