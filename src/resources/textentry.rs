//! Text-entry surface used by the password overlay.
//!
//! The frontend pushes typed characters while the surface is visible; the
//! coordinator pulls [`TextEntry::text`] when a submission arrives. The
//! buffer is bounded and cleared every time the surface is shown.

use arrayvec::ArrayString;
use bevy_ecs::prelude::Resource;

/// Longest accepted password input, in bytes.
pub const TEXT_ENTRY_CAPACITY: usize = 48;

#[derive(Resource, Debug, Clone, Default)]
pub struct TextEntry {
    visible: bool,
    text: ArrayString<TEXT_ENTRY_CAPACITY>,
    /// The whole buffer is selected: the next keystroke replaces it.
    selected: bool,
}

impl TextEntry {
    pub fn show(&mut self) {
        self.visible = true;
        self.text.clear();
        self.selected = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.text.clear();
        self.selected = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Select the current text so a retry starts from scratch.
    pub fn select_all(&mut self) {
        self.selected = true;
    }

    /// Append a typed character. Ignored while hidden, for control
    /// characters, and once the buffer is full.
    pub fn push_char(&mut self, c: char) {
        if !self.visible || c.is_control() {
            return;
        }
        if self.selected {
            self.text.clear();
            self.selected = false;
        }
        let _ = self.text.try_push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.visible {
            return;
        }
        if self.selected {
            self.text.clear();
            self.selected = false;
        } else {
            self.text.pop();
        }
    }
}
