use three_d::{Event, GUI, Key};

use super::gui::SimState;

pub(super) fn handle_keybinds(sim_state: &mut SimState, events: &mut [Event], gui: &GUI) {
    for event in events {
        match event {
            Event::KeyPress { kind, handled, .. } => handle_keypress(sim_state, *kind, handled),
            Event::Text(text) => {
                if gui.context().wants_keyboard_input() {
                    continue;
                }
                handle_text_input(sim_state, text)
            }
            _ => (),
        }
    }
}

fn handle_keypress(sim_state: &mut SimState, key: Key, handled: &mut bool) {
    if *handled {
        return;
    }

    if key == Key::Space {
        sim_state.toggle_paused();
        *handled = true;
    }
}

fn handle_text_input(sim_state: &mut SimState, text: &str) {
    text.chars()
        .for_each(|char| handle_char_input(sim_state, char));
}

fn handle_char_input(sim_state: &mut SimState, char: char) {
    match char {
        'r' | 'R' => sim_state.reset_speeds(),
        't' | 'T' => sim_state.toggle_theme(),
        'h' | 'H' => sim_state.toggle_help(),
        _ => (),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cfg::Config, gui::Theme};

    #[test]
    fn test_space_toggles_pause_once() {
        let mut state = SimState::new(&Config::default());

        let mut handled = false;
        handle_keypress(&mut state, Key::Space, &mut handled);
        assert!(handled);
        assert!(state.system.is_paused());

        handle_keypress(&mut state, Key::Space, &mut handled);
        assert!(state.system.is_paused());

        handle_keypress(&mut state, Key::A, &mut false);
        assert!(state.system.is_paused());
    }

    #[test]
    fn test_text_shortcuts() {
        let mut state = SimState::new(&Config::default());
        state.interaction.set_speed("Mars", 3.0).unwrap();

        handle_text_input(&mut state, "r");
        assert_eq!(state.interaction.speed("Mars"), Some(0.1));

        handle_text_input(&mut state, "T");
        assert_eq!(state.theme(), Theme::Light);

        handle_text_input(&mut state, "xyz");
        assert_eq!(state.theme(), Theme::Light);
    }
}
