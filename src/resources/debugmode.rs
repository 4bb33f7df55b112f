use bevy_ecs::prelude::Resource;

/// Present while debug outlines are enabled. Toggled by
/// [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugMode {}
