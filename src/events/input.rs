//! Input focus events.
//!
//! The frontend triggers [`FocusChangedEvent`] when the window gains or loses
//! keyboard focus. Losing focus forcibly clears every held key so the player
//! stops instead of walking on stale input.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::input::InputState;

#[derive(Event, Debug, Clone, Copy)]
pub struct FocusChangedEvent {
    pub focused: bool,
}

/// Observer that forwards focus changes to [`InputState`].
pub fn focus_changed_observer(trigger: On<FocusChangedEvent>, mut input: ResMut<InputState>) {
    let focused = trigger.event().focused;
    if input.is_focused() == focused {
        return;
    }
    info!("input focus {}", if focused { "gained" } else { "lost" });
    input.set_focused(focused);
}
