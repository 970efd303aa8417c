//! Pointer hover over planets and the floating name label.

use glam::{DMat4, DVec2, DVec3};
use three_d::egui::{
    Align2, Area, Color32, Context, Label, Order, Pos2, RichText, TextWrapMode,
};

use super::{SimState, declare_id};
use crate::{
    gfx::{
        self,
        picking::{self, Sphere},
    },
    sim::{BodyPresentation, PLANET_COUNT, catalog},
};

declare_id!(HOVER_LABEL, b"HovLabel");

const LABEL_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

fn screen_size(ctx: &Context) -> DVec2 {
    let size = ctx.screen_rect().size();
    DVec2::new(size.x as f64, size.y as f64)
}

/// Gets the planet under the pointer, if the pointer is over the scene.
fn hovered_planet(
    view_projection: DMat4,
    pointer: Option<DVec2>,
    screen_size: DVec2,
    spheres: [Sphere; PLANET_COUNT],
) -> Option<usize> {
    let ray = picking::screen_ray(view_projection, pointer?, screen_size)?;
    picking::pick(&ray, spheres)
}

pub(super) fn update_hover(ctx: &Context, sim_state: &mut SimState, view_projection: DMat4) {
    let pointer = ctx
        .pointer_hover_pos()
        .filter(|_| !ctx.is_pointer_over_area())
        .map(|pos| DVec2::new(pos.x as f64, pos.y as f64));

    let spheres = gfx::planet_spheres(&sim_state.system, &sim_state.interaction);
    let hovered = hovered_planet(view_projection, pointer, screen_size(ctx), spheres);
    sim_state.set_hover_index(hovered);
}

/// World position the label is anchored at.
fn label_anchor(sim_state: &SimState, index: usize) -> DVec3 {
    let body = &catalog::bodies()[index];
    let center = sim_state.system.orbit(index).position(body.orbital_distance);
    center + DVec3::Y * BodyPresentation::label_height(body)
}

/// Name and screen point of the label, if a visible body is hovered.
fn label_target(
    sim_state: &SimState,
    view_projection: DMat4,
    screen_size: DVec2,
) -> Option<(&'static str, DVec2)> {
    let index = sim_state.interaction.hovered_index()?;
    let anchor = label_anchor(sim_state, index);
    let point = picking::project(view_projection, anchor, screen_size)?;
    Some((catalog::bodies()[index].name, point))
}

pub(super) fn label(ctx: &Context, sim_state: &SimState, view_projection: DMat4) {
    let Some((name, point)) = label_target(sim_state, view_projection, screen_size(ctx)) else {
        return;
    };

    let text = RichText::new(name)
        .strong()
        .size(14.0)
        .color(Color32::WHITE)
        .background_color(LABEL_BACKGROUND);

    Area::new(*HOVER_LABEL_ID)
        .order(Order::Foreground)
        .pivot(Align2::CENTER_BOTTOM)
        .fixed_pos(Pos2::new(point.x as f32, point.y as f32))
        .interactable(false)
        .show(ctx, |ui| {
            ui.add(
                Label::new(text)
                    .wrap_mode(TextWrapMode::Extend)
                    .selectable(false),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cfg::Config, sim::InteractionState};

    const SCREEN: DVec2 = DVec2::new(1280.0, 720.0);

    fn camera_matrix() -> DMat4 {
        let projection =
            DMat4::perspective_rh_gl(45f64.to_radians(), SCREEN.x / SCREEN.y, 0.1, 1000.0);
        let view = DMat4::look_at_rh(DVec3::new(0.0, 15.0, 15.0), DVec3::ZERO, DVec3::Y);
        projection * view
    }

    fn spheres(sim_state: &SimState) -> [Sphere; PLANET_COUNT] {
        gfx::planet_spheres(&sim_state.system, &InteractionState::new())
    }

    #[test]
    fn test_pointer_over_planet() {
        let sim_state = SimState::new(&Config::default());
        let vp = camera_matrix();
        let earth = catalog::index_of("Earth").unwrap();
        let distance = catalog::bodies()[earth].orbital_distance;
        let center = sim_state.system.orbit(earth).position(distance);
        let point = picking::project(vp, center, SCREEN).unwrap();

        assert_eq!(
            hovered_planet(vp, Some(point), SCREEN, spheres(&sim_state)),
            Some(earth)
        );
    }

    #[test]
    fn test_no_pointer_or_empty_space() {
        let sim_state = SimState::new(&Config::default());
        let vp = camera_matrix();
        assert_eq!(hovered_planet(vp, None, SCREEN, spheres(&sim_state)), None);
        assert_eq!(
            hovered_planet(vp, Some(DVec2::new(5.0, 5.0)), SCREEN, spheres(&sim_state)),
            None
        );
    }

    #[test]
    fn test_label_above_body() {
        let sim_state = SimState::new(&Config::default());
        let jupiter = catalog::index_of("Jupiter").unwrap();
        let anchor = label_anchor(&sim_state, jupiter);
        let body = catalog::find("Jupiter").unwrap();
        assert_eq!(anchor.x, body.orbital_distance);
        assert!((anchor.y - (body.radius + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_label_only_when_hovered() {
        let mut sim_state = SimState::new(&Config::default());
        let vp = camera_matrix();
        assert_eq!(label_target(&sim_state, vp, SCREEN), None);

        let mars = catalog::index_of("Mars").unwrap();
        sim_state.set_hover_index(Some(mars));
        let (name, point) = label_target(&sim_state, vp, SCREEN).unwrap();
        assert_eq!(name, "Mars");

        let distance = catalog::bodies()[mars].orbital_distance;
        let center = sim_state.system.orbit(mars).position(distance);
        let body_point = picking::project(vp, center, SCREEN).unwrap();
        assert!(point.y < body_point.y);

        sim_state.set_hover_index(None);
        assert_eq!(label_target(&sim_state, vp, SCREEN), None);
    }
}
