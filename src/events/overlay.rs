//! Overlay events and the observers that drive the pause protocol.
//!
//! - [`OpenOverlayEvent`] – running → paused(mode): pauses physics, shows the
//!   text entry for the password overlay, fades the overlay in.
//! - [`CloseOverlayEvent`] – paused(*) → closing: fades the overlay out; the
//!   backdrop's fade carries [`TweenSignal::OverlayClosed`].
//! - [`TweenFinishedEvent`] – emitted by the opacity tween system when a
//!   tween with a signal ends; `OverlayClosed` resumes the world.
//! - [`PasswordSubmittedEvent`] – validates the text entry against the
//!   configured secret.
//!
//! Observers are registered by [`crate::game::setup_world`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::overlayelement::{Opacity, OverlayElement, OverlayLayer};
use crate::components::tween::{Easing, TweenOpacity, TweenSignal};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::overlay::{OverlayMode, OverlayState};
use crate::resources::physicsworld::PhysicsWorld;
use crate::resources::textentry::TextEntry;
use crate::resources::worldtime::WorldTime;

pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password, try again";

/// Request to pause the world and show `mode`.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenOverlayEvent {
    pub mode: OverlayMode,
}

/// Request to dismiss the overlay that is showing.
#[derive(Event, Debug, Clone, Copy)]
pub struct CloseOverlayEvent {}

/// A [`TweenOpacity`] with an `on_finish` signal reached its end.
#[derive(Event, Debug, Clone, Copy)]
pub struct TweenFinishedEvent {
    pub entity: Entity,
    pub signal: TweenSignal,
}

/// The player submitted the text entry's current value.
#[derive(Event, Debug, Clone, Copy)]
pub struct PasswordSubmittedEvent {}

/// Give every element of `mode` a fade from its current opacity to full.
fn fade_in_layers(
    commands: &mut Commands,
    elements: &Query<(Entity, &OverlayElement, &Opacity)>,
    mode: OverlayMode,
    duration: f32,
    only: Option<OverlayLayer>,
) {
    for (entity, element, opacity) in elements.iter() {
        if !element.layer.shows_for(mode) {
            continue;
        }
        if only.is_some_and(|layer| layer != element.layer) {
            continue;
        }
        commands.entity(entity).insert(
            TweenOpacity::new(opacity.0, 1.0, duration).with_easing(Easing::SineOut),
        );
    }
}

/// Observer: running → paused(mode).
pub fn open_overlay_observer(
    trigger: On<OpenOverlayEvent>,
    mut commands: Commands,
    config: Res<GameConfig>,
    mut overlay: ResMut<OverlayState>,
    mut physics: ResMut<PhysicsWorld>,
    mut input: ResMut<InputState>,
    mut text_entry: ResMut<TextEntry>,
    elements: Query<(Entity, &OverlayElement, &Opacity)>,
) {
    let mode = trigger.event().mode;
    if !overlay.open(mode) {
        debug!("OpenOverlayEvent({}) ignored: already paused", mode.as_str());
        return;
    }
    physics.pause();
    if mode == OverlayMode::Password {
        text_entry.show();
        input.set_captured(true);
    }
    fade_in_layers(
        &mut commands,
        &elements,
        mode,
        config.overlay.fade_in,
        None,
    );
}

/// Observer: paused(*) → closing. Escape during a fade-out is ignored.
pub fn close_overlay_observer(
    _trigger: On<CloseOverlayEvent>,
    mut commands: Commands,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut overlay: ResMut<OverlayState>,
    mut physics: ResMut<PhysicsWorld>,
    mut input: ResMut<InputState>,
    mut text_entry: ResMut<TextEntry>,
    elements: Query<(Entity, &OverlayElement, &Opacity)>,
) {
    if !overlay.begin_close() {
        debug!("CloseOverlayEvent ignored: nothing to close");
        return;
    }
    text_entry.hide();
    input.set_captured(false);

    let mut signalled = false;
    for (entity, element, opacity) in elements.iter() {
        let mut tween = TweenOpacity::new(opacity.0, 0.0, config.overlay.fade_out)
            .with_easing(Easing::SineIn);
        if element.layer == OverlayLayer::Backdrop && !signalled {
            tween = tween.with_signal(TweenSignal::OverlayClosed);
            signalled = true;
        }
        commands.entity(entity).insert(tween);
    }

    if !signalled {
        warn!("No overlay backdrop to fade out; resuming immediately");
        resume_world(&mut overlay, &mut physics, &time, &config);
    }
}

/// Observer: completion effects of signalled tweens.
pub fn tween_finished_observer(
    trigger: On<TweenFinishedEvent>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut overlay: ResMut<OverlayState>,
    mut physics: ResMut<PhysicsWorld>,
) {
    let event = trigger.event();
    debug!("tween on {:?} finished: {:?}", event.entity, event.signal);
    match event.signal {
        TweenSignal::OverlayClosed => {
            resume_world(&mut overlay, &mut physics, &time, &config);
        }
    }
}

/// closing → running. A second call while running does nothing.
fn resume_world(
    overlay: &mut OverlayState,
    physics: &mut PhysicsWorld,
    time: &WorldTime,
    config: &GameConfig,
) {
    if overlay.finish_close(time.elapsed, config.overlay.cooldown) {
        physics.resume();
    }
}

/// Observer: paused(password) → paused(rewards) on a match, inline error
/// and reselected input on a mismatch.
pub fn password_submitted_observer(
    _trigger: On<PasswordSubmittedEvent>,
    mut commands: Commands,
    config: Res<GameConfig>,
    mut overlay: ResMut<OverlayState>,
    mut input: ResMut<InputState>,
    mut text_entry: ResMut<TextEntry>,
    elements: Query<(Entity, &OverlayElement, &Opacity)>,
) {
    if overlay.mode() != Some(OverlayMode::Password) || overlay.is_closing() {
        debug!("PasswordSubmittedEvent ignored outside the password overlay");
        return;
    }
    if text_entry.text() != config.secret {
        info!("password rejected");
        overlay.reject_password(WRONG_PASSWORD_MESSAGE);
        text_entry.select_all();
        return;
    }

    overlay.unlock();
    text_entry.hide();
    input.set_captured(false);
    for (entity, element, _) in elements.iter() {
        if element.layer == OverlayLayer::Password {
            commands
                .entity(entity)
                .remove::<TweenOpacity>()
                .insert(Opacity(0.0));
        }
    }
    fade_in_layers(
        &mut commands,
        &elements,
        OverlayMode::Rewards,
        config.overlay.fade_in,
        Some(OverlayLayer::Rewards),
    );
}
