//! Keyboard polling.
//!
//! Movement: A/D or the arrow keys. Jump: W, Up or Space. Interact: E.
//! Escape closes overlays. F11 toggles debug outlines. While the password
//! entry is visible, typed characters go to it, Backspace deletes and Enter
//! submits.
use raylib::prelude::*;

use crate::game::Game;
use crate::resources::input::InputAction;

/// Physical keys bound to each action.
pub fn bindings(action: InputAction) -> &'static [KeyboardKey] {
    match action {
        InputAction::Left => &[KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT],
        InputAction::Right => &[KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT],
        InputAction::Jump => &[KeyboardKey::KEY_W, KeyboardKey::KEY_UP, KeyboardKey::KEY_SPACE],
        InputAction::Interact => &[KeyboardKey::KEY_E],
        InputAction::Escape => &[KeyboardKey::KEY_ESCAPE],
    }
}

/// Tracks what the window reported last frame.
#[derive(Debug)]
pub struct KeyboardPoller {
    focused: bool,
}

impl Default for KeyboardPoller {
    fn default() -> Self {
        Self { focused: true }
    }
}

impl KeyboardPoller {
    pub fn poll(&mut self, rl: &mut RaylibHandle, game: &mut Game) {
        let focused = rl.is_window_focused();
        if focused != self.focused {
            self.focused = focused;
            game.set_focus(focused);
        }
        if !focused {
            return;
        }

        for action in InputAction::ALL {
            let down = bindings(action).iter().any(|&key| rl.is_key_down(key));
            game.set_key(action, down);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_F11) {
            game.toggle_debug();
        }

        if game.text_entry().is_visible() {
            while let Some(c) = rl.get_char_pressed() {
                game.type_text(c.encode_utf8(&mut [0u8; 4]));
            }
            if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
                game.backspace();
            }
            if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                game.submit_password();
            }
        } else {
            // drop characters typed while no entry is open
            while rl.get_char_pressed().is_some() {}
        }
    }
}
