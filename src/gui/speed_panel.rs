use three_d::egui::{
    Align, Button, Color32, Context, Frame, Grid, Layout, RichText, Slider, TopBottomPanel, Ui,
};

use super::{SimState, declare_id};
use crate::sim::{
    BodyDescriptor, PLANET_COUNT, catalog,
    interaction::{MAX_SPEED, MIN_SPEED},
};

declare_id!(SPEED_PANEL, b"PlntSpds");
declare_id!(SPEED_GRID, b"SpdsGrid");
declare_id!(FACT_GRID, b"FactGrid");

const COLUMNS: usize = 4;
const SLIDER_STEP: f64 = 0.1;

fn format_speed(speed: f64) -> String {
    format!("{speed:.1}x")
}

fn body_color(body: &BodyDescriptor) -> Color32 {
    let [r, g, b] = body.color;
    Color32::from_rgb(r, g, b)
}

pub(super) fn draw(ctx: &Context, sim_state: &mut SimState) {
    let fill = sim_state.theme().card_fill();
    TopBottomPanel::bottom(*SPEED_PANEL_ID)
        .show_separator_line(false)
        .frame(Frame::default().fill(fill).inner_margin(16.0))
        .show(ctx, |ui| panel_contents(ui, sim_state));
}

fn panel_contents(ui: &mut Ui, sim_state: &mut SimState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Planet Speed Controls").strong().size(18.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.add(Button::new("Reset All Speeds")).clicked() {
                sim_state.reset_speeds();
            }
        });
    });
    ui.add_space(8.0);

    let column_width = (ui.available_width() / COLUMNS as f32 - 16.0).max(80.0);

    Grid::new(*SPEED_GRID_ID)
        .num_columns(COLUMNS)
        .spacing([16.0, 12.0])
        .show(ui, |ui| {
            for index in 0..PLANET_COUNT {
                speed_control(ui, sim_state, index, column_width);
                if (index + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    if let Some(body) = sim_state.interaction.hovered() {
        ui.add_space(12.0);
        ui.separator();
        fact_sheet(ui, body);
    }
}

fn speed_control(ui: &mut Ui, sim_state: &mut SimState, index: usize, width: f32) {
    let body = &catalog::bodies()[index];
    let mut speed = sim_state.interaction.speed_at(index);

    ui.vertical(|ui| {
        ui.set_width(width);
        ui.horizontal(|ui| {
            let mut name = RichText::new(body.name).strong();
            if sim_state.interaction.is_hovered(body.name) {
                name = name.color(body_color(body));
            }
            ui.label(name);
            ui.label(RichText::new(format_speed(speed)).weak().small());
        });

        ui.spacing_mut().slider_width = width;
        let slider = Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
            .step_by(SLIDER_STEP)
            .show_value(false);
        if ui.add(slider).changed() {
            let stored = sim_state.interaction.set_speed_at(index, speed);
            tracing::debug!("{} speed set to {stored}", body.name);
        }
    });
}

fn fact_sheet(ui: &mut Ui, body: &BodyDescriptor) {
    ui.label(
        RichText::new(body.name)
            .strong()
            .size(18.0)
            .color(body_color(body)),
    );
    Grid::new(*FACT_GRID_ID)
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in body.facts.entries() {
                ui.label(RichText::new(format!("{label}:")).weak());
                ui.label(value);
                ui.end_row();
            }
        });
}
