use glam::DMat4;
use ordered_float::NotNan;
use three_d::{
    Context as ThreeDContext, FrameInput, GUI,
    egui::{Color32, Context as EguiContext, Vec2, Visuals},
};
use tracing::{debug, info};

use super::{
    cfg::Config,
    sim::{InteractionState, SolarSystem, StarPausePolicy},
};

mod fps;
mod header;
mod help;
mod hover;
mod speed_panel;

macro_rules! declare_id {
    ($name:ident, $val:expr) => {
        ::pastey::paste! {
            const [<$name _SALT>]: ::core::num::NonZeroU64 =
                ::core::num::NonZeroU64::new(u64::from_be_bytes(*$val)).unwrap();
            const [<$name _ID>]: ::std::sync::LazyLock<::three_d::egui::Id> =
                ::std::sync::LazyLock::new(|| ::three_d::egui::Id::new([<$name _SALT>]));
        }
    };
}
use declare_id;

const MIN_TOUCH_TARGET_LEN: f32 = 48.0;
const MIN_TOUCH_TARGET_VEC: Vec2 = Vec2::splat(MIN_TOUCH_TARGET_LEN);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn visuals(self) -> Visuals {
        match self {
            Self::Dark => Visuals::dark(),
            Self::Light => Visuals::light(),
        }
    }

    /// Background behind the scene, as linear RGBA.
    pub(crate) fn clear_color(self) -> [f32; 4] {
        match self {
            Self::Dark => [0.0, 0.0, 0.0, 1.0],
            Self::Light => [0.12, 0.14, 0.28, 1.0],
        }
    }

    /// Fill of the translucent cards drawn over the scene.
    fn card_fill(self) -> Color32 {
        match self {
            Self::Dark => Color32::from_black_alpha(208),
            Self::Light => Color32::from_white_alpha(224),
        }
    }
}

struct UiState {
    frame_data: fps::FrameData,
    theme: Theme,
    applied_theme: Option<Theme>,
    show_help: bool,
    show_fps: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            frame_data: fps::FrameData::new(),
            theme: Theme::Dark,
            applied_theme: None,
            show_help: true,
            show_fps: true,
        }
    }
}

impl UiState {
    /// Records a frame of `elapsed_ms` milliseconds. Empty or invalid frames are skipped.
    fn record_frame(&mut self, elapsed_ms: f64) {
        if let Ok(frame_duration) = NotNan::new(elapsed_ms / 1000.0)
            && frame_duration.is_finite()
            && *frame_duration > 0.0
        {
            self.frame_data.insert_frame_data(frame_duration);
        }
    }
}

pub(crate) struct SimState {
    pub system: SolarSystem,
    pub interaction: InteractionState,
    ui: UiState,
}

impl SimState {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            system: SolarSystem::new(StarPausePolicy::from_freeze_flag(
                config.pause_freezes_star,
            )),
            interaction: InteractionState::new(),
            ui: UiState {
                theme: Theme::from_dark_mode(config.dark_mode),
                show_help: config.show_help,
                show_fps: config.show_fps,
                ..Default::default()
            },
        }
    }

    pub(crate) fn toggle_paused(&mut self) {
        let paused = self.system.toggle_paused();
        info!("simulation {}", if paused { "paused" } else { "resumed" });
    }

    pub(crate) fn reset_speeds(&mut self) {
        self.interaction.reset_speeds();
        info!("all planet speeds reset");
    }

    #[inline]
    pub(crate) fn theme(&self) -> Theme {
        self.ui.theme
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggled();
        info!("switched to {:?} theme", self.ui.theme);
    }

    pub(crate) fn toggle_help(&mut self) {
        self.ui.show_help ^= true;
    }

    fn set_hover_index(&mut self, index: Option<usize>) {
        if self.interaction.hovered_index() == index {
            return;
        }
        self.interaction.set_hover_index(index);
        match self.interaction.hovered_name() {
            Some(name) => debug!("hovering {name}"),
            None => debug!("hover cleared"),
        }
    }
}

pub(super) fn create(context: &ThreeDContext) -> GUI {
    GUI::new(context)
}

pub(super) fn update(
    gui: &mut GUI,
    sim_state: &mut SimState,
    frame_input: &mut FrameInput,
    view_projection: DMat4,
) -> bool {
    sim_state.ui.record_frame(frame_input.elapsed_time);
    gui.update(
        &mut frame_input.events,
        frame_input.accumulated_time,
        frame_input.viewport,
        frame_input.device_pixel_ratio,
        |ctx| handle_ui(ctx, sim_state, view_projection),
    )
}

fn apply_theme(ctx: &EguiContext, ui: &mut UiState) {
    if ui.applied_theme != Some(ui.theme) {
        ctx.set_visuals(ui.theme.visuals());
        ui.applied_theme = Some(ui.theme);
    }
}

fn handle_ui(ctx: &EguiContext, sim_state: &mut SimState, view_projection: DMat4) {
    apply_theme(ctx, &mut sim_state.ui);
    header::draw(ctx, sim_state);
    speed_panel::draw(ctx, sim_state);
    help::draw(ctx, &mut sim_state.ui);
    if sim_state.ui.show_fps {
        fps::fps_area(ctx, &sim_state.ui.frame_data);
    }
    hover::update_hover(ctx, sim_state, view_projection);
    hover::label(ctx, sim_state, view_projection);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Dark.clear_color(), Theme::Light.clear_color());
    }

    #[test]
    fn test_record_frame_skips_invalid() {
        let mut ui = UiState::default();
        for elapsed_ms in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            ui.record_frame(elapsed_ms);
        }
        assert_eq!(ui.frame_data.len(), 0);

        ui.record_frame(20.0);
        ui.record_frame(20.0);
        assert_eq!(ui.frame_data.len(), 2);
    }

    #[test]
    fn test_card_text_contrast() {
        fn luminance([r, g, b]: [f32; 3]) -> f32 {
            0.299 * r + 0.587 * g + 0.114 * b
        }

        for theme in [Theme::Dark, Theme::Light] {
            // Premultiplied card fill composited over the scene's clear color
            let fill = theme.card_fill();
            let [cr, cg, cb, _] = theme.clear_color();
            let alpha = fill.a() as f32 / 255.0;
            let card = [
                fill.r() as f32 / 255.0 + (1.0 - alpha) * cr,
                fill.g() as f32 / 255.0 + (1.0 - alpha) * cg,
                fill.b() as f32 / 255.0 + (1.0 - alpha) * cb,
            ];

            let text = theme.visuals().text_color();
            let text = [text.r(), text.g(), text.b()].map(|c| c as f32 / 255.0);

            let contrast = (luminance(card) - luminance(text)).abs();
            assert!(contrast > 0.3, "{theme:?} contrast {contrast}");
        }
    }

    #[test]
    fn test_sim_state_from_config() {
        let config = Config {
            dark_mode: false,
            show_help: false,
            pause_freezes_star: true,
            ..Default::default()
        };
        let mut state = SimState::new(&config);
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.ui.show_help);
        assert_eq!(state.system.star_policy(), StarPausePolicy::FreezeOnPause);

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        state.toggle_help();
        assert!(state.ui.show_help);
    }

    #[test]
    fn test_pause_and_reset() {
        let mut state = SimState::new(&Config::default());
        state.interaction.set_speed("Uranus", 4.0).unwrap();

        state.toggle_paused();
        assert!(state.system.is_paused());
        state.toggle_paused();
        assert!(!state.system.is_paused());

        state.reset_speeds();
        assert_eq!(state.interaction.speed("Uranus"), Some(0.1));
    }

    #[test]
    fn test_hover_index() {
        let mut state = SimState::new(&Config::default());
        state.set_hover_index(Some(5));
        assert_eq!(state.interaction.hovered_name(), Some("Saturn"));
        state.set_hover_index(None);
        assert_eq!(state.interaction.hovered(), None);
    }
}
