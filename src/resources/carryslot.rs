//! The player's single carry slot.
//!
//! Holding the balloon and holding the key are mutually exclusive; a single
//! enum makes the "both held" state unrepresentable.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarrySlot {
    #[default]
    Empty,
    Balloon,
    Key,
}

impl CarrySlot {
    pub fn is_empty(&self) -> bool {
        *self == CarrySlot::Empty
    }

    /// Occupy the slot with `item`. Fails if anything is already held.
    pub fn take(&mut self, item: CarrySlot) -> bool {
        if !self.is_empty() || item == CarrySlot::Empty {
            return false;
        }
        *self = item;
        true
    }

    /// Free the slot if it holds `item`.
    pub fn release(&mut self, item: CarrySlot) -> bool {
        if *self != item || item == CarrySlot::Empty {
            return false;
        }
        *self = CarrySlot::Empty;
        true
    }
}
