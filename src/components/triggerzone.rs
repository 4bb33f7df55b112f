//! Trigger zones that pause the world and open an overlay.
//!
//! A [`TriggerZone`] lives on an entity with a
//! [`BoxCollider`](super::boxcollider::BoxCollider). The trigger system
//! checks the zone (inflated by `inflate`) against the player's bounds once
//! per running tick, and only when the zone's [`TriggerCondition`] holds.
//! When several zones qualify on the same tick, the lowest `priority` wins.

use bevy_ecs::prelude::Component;

use crate::resources::carryslot::CarrySlot;
use crate::resources::overlay::OverlayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Locked container: asks for the password, shows rewards once open.
    Chest,
    /// Floating envelope: shows the prompt.
    Envelope,
}

/// What the player must possess for the zone to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerCondition {
    CarryingBalloon,
    CarryingKey,
}

impl TriggerCondition {
    pub fn holds(self, slot: CarrySlot) -> bool {
        match self {
            TriggerCondition::CarryingBalloon => slot == CarrySlot::Balloon,
            TriggerCondition::CarryingKey => slot == CarrySlot::Key,
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct TriggerZone {
    pub kind: TriggerKind,
    pub condition: TriggerCondition,
    /// Lower fires first when several zones qualify on the same tick.
    pub priority: u8,
    /// Margin added on every side of the zone's collider.
    pub inflate: f32,
}

impl TriggerZone {
    pub fn chest(inflate: f32) -> Self {
        Self {
            kind: TriggerKind::Chest,
            condition: TriggerCondition::CarryingKey,
            priority: 0,
            inflate,
        }
    }

    pub fn envelope(inflate: f32) -> Self {
        Self {
            kind: TriggerKind::Envelope,
            condition: TriggerCondition::CarryingBalloon,
            priority: 1,
            inflate,
        }
    }

    /// Overlay this zone opens. An unlocked chest goes straight to rewards.
    pub fn overlay_mode(&self, unlocked: bool) -> OverlayMode {
        match self.kind {
            TriggerKind::Chest if unlocked => OverlayMode::Rewards,
            TriggerKind::Chest => OverlayMode::Password,
            TriggerKind::Envelope => OverlayMode::Prompt,
        }
    }
}
