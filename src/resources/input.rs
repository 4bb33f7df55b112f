//! Per-tick input edge tracker.
//!
//! The raw key source (the frontend, or tests) reports level changes through
//! [`InputState::set_down`]. Once per tick, [`InputState::latch`] turns the
//! presses seen since the previous latch into "just pressed" edges. Movement
//! keys are read as held levels; interact and escape are read as edges with
//! [`InputState::consume_just_pressed`], which answers true at most once per
//! tick.
use bevy_ecs::prelude::*;
use log::debug;

/// Logical actions the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Walk left (default: A).
    Left,
    /// Walk right (default: D).
    Right,
    /// Jump while grounded (default: W).
    Jump,
    /// Grab or release the balloon/key (default: E).
    Interact,
    /// Close the overlay (default: Escape).
    Escape,
}

impl InputAction {
    pub const ALL: [InputAction; 5] = [
        InputAction::Left,
        InputAction::Right,
        InputAction::Jump,
        InputAction::Interact,
        InputAction::Escape,
    ];

    fn index(self) -> usize {
        match self {
            InputAction::Left => 0,
            InputAction::Right => 1,
            InputAction::Jump => 2,
            InputAction::Interact => 3,
            InputAction::Escape => 4,
        }
    }

    /// Actions swallowed while a text-entry surface has the keyboard.
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            InputAction::Left | InputAction::Right | InputAction::Jump
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Level and edge state of a single action.
pub struct BoolState {
    /// Whether the key is currently down.
    pub active: bool,
    /// Whether the key went down since the previous tick and nobody consumed it yet.
    pub just_pressed: bool,
    /// Press seen since the last latch, promoted to `just_pressed` on latch.
    pending_press: bool,
}

/// Resource capturing the per-tick keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    keys: [BoolState; 5],
    focused: bool,
    captured: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: [BoolState::default(); 5],
            focused: true,
            captured: false,
        }
    }
}

impl InputState {
    /// Report the raw level of an action's key. A transition from up to down
    /// records a press, even if the key is released again before the next latch.
    pub fn set_down(&mut self, action: InputAction, down: bool) {
        if !self.focused {
            return;
        }
        if self.captured && action.is_movement() {
            return;
        }
        let key = &mut self.keys[action.index()];
        if down && !key.active {
            key.pending_press = true;
            debug!("keydown: {:?}", action);
        } else if !down && key.active {
            debug!("keyup: {:?}", action);
        }
        key.active = down;
    }

    pub fn press(&mut self, action: InputAction) {
        self.set_down(action, true);
    }

    pub fn release(&mut self, action: InputAction) {
        self.set_down(action, false);
    }

    /// Start a new tick: presses recorded since the last latch become visible
    /// edges, and edges nobody consumed last tick are dropped.
    pub fn latch(&mut self) {
        for key in self.keys.iter_mut() {
            key.just_pressed = key.pending_press;
            key.pending_press = false;
        }
    }

    pub fn held(&self, action: InputAction) -> bool {
        self.keys[action.index()].active
    }

    pub fn left_held(&self) -> bool {
        self.held(InputAction::Left)
    }

    pub fn right_held(&self) -> bool {
        self.held(InputAction::Right)
    }

    /// Peek at the edge without consuming it.
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.keys[action.index()].just_pressed
    }

    /// Read the edge and consume it: a second call in the same tick is false.
    pub fn consume_just_pressed(&mut self, action: InputAction) -> bool {
        let key = &mut self.keys[action.index()];
        std::mem::take(&mut key.just_pressed)
    }

    /// Forget every held key and pending edge.
    pub fn clear_held(&mut self) {
        for key in self.keys.iter_mut() {
            *key = BoolState::default();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Losing focus clears all state so no key stays stuck down; raw
    /// reports are ignored until focus returns.
    pub fn set_focused(&mut self, focused: bool) {
        if !focused {
            self.clear_held();
        }
        self.focused = focused;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// While captured, movement keys do not reach the scene.
    pub fn set_captured(&mut self, captured: bool) {
        if captured {
            for action in InputAction::ALL.into_iter().filter(|a| a.is_movement()) {
                self.keys[action.index()] = BoolState::default();
            }
        }
        self.captured = captured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        for action in InputAction::ALL {
            assert!(!input.held(action));
            assert!(!input.is_just_pressed(action));
        }
        assert!(input.is_focused());
        assert!(!input.is_captured());
    }

    #[test]
    fn test_edge_visible_only_after_latch() {
        let mut input = InputState::default();
        input.press(InputAction::Interact);
        assert!(!input.is_just_pressed(InputAction::Interact));
        input.latch();
        assert!(input.is_just_pressed(InputAction::Interact));
        assert!(input.held(InputAction::Interact));
    }

    #[test]
    fn test_consume_twice_in_same_tick() {
        let mut input = InputState::default();
        input.press(InputAction::Escape);
        input.latch();
        assert!(input.consume_just_pressed(InputAction::Escape));
        assert!(!input.consume_just_pressed(InputAction::Escape));
    }

    #[test]
    fn test_held_key_is_not_a_new_edge() {
        let mut input = InputState::default();
        input.set_down(InputAction::Interact, true);
        input.latch();
        assert!(input.is_just_pressed(InputAction::Interact));
        input.set_down(InputAction::Interact, true);
        input.latch();
        assert!(!input.is_just_pressed(InputAction::Interact));
    }

    #[test]
    fn test_tap_between_latches_still_counts() {
        let mut input = InputState::default();
        input.press(InputAction::Interact);
        input.release(InputAction::Interact);
        input.latch();
        assert!(input.is_just_pressed(InputAction::Interact));
        assert!(!input.held(InputAction::Interact));
    }

    #[test]
    fn test_unconsumed_edge_expires_next_latch() {
        let mut input = InputState::default();
        input.press(InputAction::Interact);
        input.latch();
        input.latch();
        assert!(!input.is_just_pressed(InputAction::Interact));
    }

    #[test]
    fn test_focus_loss_clears_and_blocks() {
        let mut input = InputState::default();
        input.press(InputAction::Right);
        input.set_focused(false);
        assert!(!input.right_held());
        input.press(InputAction::Left);
        assert!(!input.left_held());
        input.set_focused(true);
        input.press(InputAction::Left);
        assert!(input.left_held());
    }

    #[test]
    fn test_capture_swallows_movement_only() {
        let mut input = InputState::default();
        input.press(InputAction::Left);
        input.set_captured(true);
        assert!(!input.left_held());
        input.press(InputAction::Right);
        input.press(InputAction::Escape);
        input.latch();
        assert!(!input.right_held());
        assert!(input.is_just_pressed(InputAction::Escape));
        input.set_captured(false);
        input.press(InputAction::Right);
        assert!(input.right_held());
    }
}
