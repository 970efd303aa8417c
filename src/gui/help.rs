use three_d::egui::{Align2, Context, Frame, RichText, Window};

use super::{UiState, declare_id};

declare_id!(HELP_WINDOW, b"HelpCard");

pub(super) const POINTER_HINTS: [&str; 5] = [
    "Click and drag to rotate view",
    "Scroll to zoom in/out",
    "Hover over planets for labels",
    "Adjust speeds with sliders below",
    "Use pause/resume button",
];

pub(super) const KEY_HINTS: [(&str, &str); 4] = [
    ("Space", "Pause or resume"),
    ("R", "Reset all speeds"),
    ("T", "Toggle dark mode"),
    ("H", "Show or hide this card"),
];

pub(super) fn draw(ctx: &Context, ui_state: &mut UiState) {
    let fill = ui_state.theme.card_fill();
    Window::new("Controls")
        .id(*HELP_WINDOW_ID)
        .anchor(Align2::RIGHT_TOP, [-12.0, 80.0])
        .resizable(false)
        .collapsible(false)
        .frame(Frame::window(&ctx.style()).fill(fill))
        .open(&mut ui_state.show_help)
        .show(ctx, |ui| {
            for hint in POINTER_HINTS {
                ui.label(format!("• {hint}"));
            }
            ui.add_space(6.0);
            for (key, action) in KEY_HINTS {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(key).monospace().strong());
                    ui.label(action);
                });
            }
        });
}
