use three_d::egui::{
    Align, Button, Color32, Context, Frame, Layout, RichText, Stroke, TopBottomPanel, Ui, Vec2,
};

use super::{MIN_TOUCH_TARGET_LEN, MIN_TOUCH_TARGET_VEC, SimState, declare_id};

declare_id!(HEADER_PANEL, b"TopHeadr");

pub(super) const TITLE: &str = "Solar System Simulation";

pub(super) fn draw(ctx: &Context, sim_state: &mut SimState) {
    let fill = sim_state.theme().card_fill();
    TopBottomPanel::top(*HEADER_PANEL_ID)
        .show_separator_line(false)
        .frame(Frame::default().fill(fill).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.set_height(MIN_TOUCH_TARGET_LEN);
                ui.heading(RichText::new(format!("🌌 {TITLE}")).strong().size(24.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    pause_button(ui, sim_state);
                    ui.add_space(16.0);
                    theme_switch(ui, sim_state);
                });
            });
        });
}

fn pause_button(ui: &mut Ui, sim_state: &mut SimState) {
    let (label, hover_string) = if sim_state.system.is_paused() {
        ("▶ Resume", "Currently paused\nClick/tap or press Space to resume")
    } else {
        ("⏸ Pause", "Currently running\nClick/tap or press Space to pause")
    };

    let button = Button::new(RichText::new(label).size(16.0))
        .min_size(Vec2::new(MIN_TOUCH_TARGET_VEC.x * 2.5, MIN_TOUCH_TARGET_VEC.y));
    if ui.add(button).on_hover_text(hover_string).clicked() {
        sim_state.toggle_paused();
    }
}

/// Sun, switch, moon from left to right. The switch is on in dark mode.
fn theme_switch(ui: &mut Ui, sim_state: &mut SimState) {
    let is_dark = sim_state.theme() == super::Theme::Dark;

    ui.horizontal(|ui| {
        ui.label(RichText::new("☀").size(16.0));
        ui.scope(|ui| {
            let widget_styles = &mut ui.visuals_mut().widgets;
            widget_styles.inactive.bg_stroke = Stroke::new(1.0, Color32::GRAY);
            let mut checked = is_dark;
            let response = ui
                .checkbox(&mut checked, "")
                .on_hover_text("Dark mode (T)");
            if response.changed() {
                sim_state.toggle_theme();
            }
        });
        ui.label(RichText::new("🌙").size(16.0));
    });
}
