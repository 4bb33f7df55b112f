//! Debug outline toggle.
//!
//! [`SwitchDebugEvent`] flips the [`DebugMode`] marker. While the marker is
//! in the world the frontend outlines colliders and the inflated trigger
//! bounds, which is how trigger margins get tuned.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    debug_mode: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("debug outlines off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("debug outlines on");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut world = World::new();
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(world.contains_resource::<DebugMode>());

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
