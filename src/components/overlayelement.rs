//! Visual pieces of the modal overlay.
//!
//! Each piece is an entity with an [`OverlayElement`] naming its layer and
//! an [`Opacity`] the frontend multiplies into its colour. Opacity is only
//! ever animated through [`TweenOpacity`](super::tween::TweenOpacity).

use bevy_ecs::prelude::Component;

use crate::resources::overlay::OverlayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Dimming rectangle shared by every overlay mode.
    Backdrop,
    Prompt,
    Password,
    Rewards,
}

impl OverlayLayer {
    /// Whether this layer is drawn while `mode` is showing.
    pub fn shows_for(self, mode: OverlayMode) -> bool {
        match self {
            OverlayLayer::Backdrop => true,
            OverlayLayer::Prompt => mode == OverlayMode::Prompt,
            OverlayLayer::Password => mode == OverlayMode::Password,
            OverlayLayer::Rewards => mode == OverlayMode::Rewards,
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct OverlayElement {
    pub layer: OverlayLayer,
}

impl OverlayElement {
    pub fn new(layer: OverlayLayer) -> Self {
        Self { layer }
    }
}

/// Opacity in [0, 1].
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Opacity(pub f32);
