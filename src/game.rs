//! Scene setup, the per-tick schedule and the simulation context.
//!
//! [`setup_world`] inserts every resource, registers the observers and
//! spawns the scene from a [`SceneLayout`]. [`build_schedule`] chains the
//! systems in tick order. [`Game`] owns both and exposes the in-process
//! boundary: raw key levels and focus in, one `tick(dt)` per frame, text
//! entry and password submission, and read access for a renderer.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::bob::Bob;
use crate::components::boxcollider::BoxCollider;
use crate::components::carryable::{Balloon, CarryKey};
use crate::components::mapposition::MapPosition;
use crate::components::overlayelement::{Opacity, OverlayElement, OverlayLayer};
use crate::components::player::Player;
use crate::components::rigidbody::{GRAVITY, RigidBody};
use crate::components::triggerzone::TriggerZone;
use crate::events::input::{FocusChangedEvent, focus_changed_observer};
use crate::events::overlay::{
    PasswordSubmittedEvent, close_overlay_observer, open_overlay_observer,
    password_submitted_observer, tween_finished_observer,
};
use crate::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use crate::resources::carryslot::CarrySlot;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputAction, InputState};
use crate::resources::overlay::OverlayState;
use crate::resources::physicsworld::PhysicsWorld;
use crate::resources::playarea::PlayArea;
use crate::resources::scenelayout::{PlacedBox, SceneLayout};
use crate::resources::textentry::TextEntry;
use crate::resources::worldtime::WorldTime;
use crate::systems::bob::bob_system;
use crate::systems::carry::{
    balloon_float_system, balloon_return_system, carry_interact_system, key_settle_system,
};
use crate::systems::input::latch_input;
use crate::systems::movement::movement;
use crate::systems::overlay::{
    overlay_escape_system, physics_is_running, world_is_paused, world_is_running,
};
use crate::systems::player::{player_animation_system, player_motion_system};
use crate::systems::stuckto::stuck_to_entity_system;
use crate::systems::time::update_world_time;
use crate::systems::triggerzone::trigger_zone_system;
use crate::systems::tween::tween_opacity_system;

pub const ENVELOPE_BOB_AMPLITUDE: f32 = 6.0;
/// Radians per second.
pub const ENVELOPE_BOB_SPEED: f32 = 3.0;

const PROMPT_PANEL: (f32, f32) = (200.0, 100.0);
const PASSWORD_PANEL: (f32, f32) = (200.0, 70.0);
const REWARDS_PANEL: (f32, f32) = (200.0, 100.0);

/// Handles to the scene's entities.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneEntities {
    pub player: Entity,
    pub balloon: Entity,
    pub envelope: Entity,
    pub key: Option<Entity>,
    pub chest: Option<Entity>,
}

fn spawn_overlay_element(world: &mut World, layer: OverlayLayer, center: Vec2, size: (f32, f32)) {
    world.spawn((
        OverlayElement::new(layer),
        Opacity(0.0),
        MapPosition::new(center.x, center.y),
        BoxCollider::centered(size.0, size.1),
    ));
}

/// Insert resources, register observers and spawn the scene.
pub fn setup_world(world: &mut World, config: GameConfig, layout: SceneLayout) -> SceneEntities {
    let area = PlayArea::from_config(&config);
    let gravity = Vec2::new(0.0, config.player.gravity);
    let inflate = config.overlay.trigger_inflate;

    let player = world
        .spawn((
            Player::default(),
            MapPosition::new(layout.player.x, layout.player.y),
            RigidBody::new().with_force(GRAVITY, gravity),
            BoxCollider::centered(layout.player.w, layout.player.h),
        ))
        .id();

    let balloon = world
        .spawn((
            Balloon::new(layout.balloon.center()),
            MapPosition::new(layout.balloon.x, layout.balloon.y),
            BoxCollider::centered(layout.balloon.w, layout.balloon.h),
        ))
        .id();

    let envelope = world
        .spawn((
            TriggerZone::envelope(inflate),
            Bob::new(layout.envelope.y, ENVELOPE_BOB_AMPLITUDE, ENVELOPE_BOB_SPEED),
            MapPosition::new(layout.envelope.x, layout.envelope.y),
            BoxCollider::centered(layout.envelope.w, layout.envelope.h),
        ))
        .id();

    let key = layout.key.map(|k: PlacedBox| {
        world
            .spawn((
                CarryKey::default(),
                MapPosition::new(k.x, k.y),
                RigidBody::with_physics(config.key.friction, config.key.bounce)
                    .with_force(GRAVITY, gravity),
                BoxCollider::centered(k.w, k.h),
            ))
            .id()
    });

    let chest = layout.chest.map(|c: PlacedBox| {
        world
            .spawn((
                TriggerZone::chest(inflate),
                MapPosition::new(c.x, c.y),
                BoxCollider::centered(c.w, c.h),
            ))
            .id()
    });

    let screen_center = Vec2::new(area.width * 0.5, area.height * 0.5);
    spawn_overlay_element(
        world,
        OverlayLayer::Backdrop,
        screen_center,
        (area.width, area.height),
    );
    spawn_overlay_element(world, OverlayLayer::Prompt, screen_center, PROMPT_PANEL);
    spawn_overlay_element(world, OverlayLayer::Password, screen_center, PASSWORD_PANEL);
    spawn_overlay_element(world, OverlayLayer::Rewards, screen_center, REWARDS_PANEL);

    let entities = SceneEntities {
        player,
        balloon,
        envelope,
        key,
        chest,
    };
    info!(
        "Scene ready: {}x{} play area, extended={}",
        area.width,
        area.height,
        layout.is_extended()
    );

    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(CarrySlot::default());
    world.insert_resource(PhysicsWorld::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(TextEntry::default());
    world.insert_resource(area);
    world.insert_resource(layout);
    world.insert_resource(config);
    world.insert_resource(entities);

    world.spawn(Observer::new(open_overlay_observer));
    world.spawn(Observer::new(close_overlay_observer));
    world.spawn(Observer::new(tween_finished_observer));
    world.spawn(Observer::new(password_submitted_observer));
    world.spawn(Observer::new(focus_changed_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    entities
}

/// One tick, in order. Everything between the trigger check and the
/// animation update only runs while no overlay is showing.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            latch_input,
            overlay_escape_system.run_if(world_is_paused),
            trigger_zone_system.run_if(world_is_running),
            bob_system.run_if(world_is_running),
            player_motion_system.run_if(world_is_running),
            carry_interact_system.run_if(world_is_running),
            balloon_float_system.run_if(world_is_running),
            movement
                .run_if(world_is_running)
                .run_if(physics_is_running),
            stuck_to_entity_system.run_if(world_is_running),
            balloon_return_system.run_if(world_is_running),
            key_settle_system.run_if(world_is_running),
            player_animation_system.run_if(world_is_running),
            tween_opacity_system,
        )
            .chain(),
    );
    update
}

/// The simulation context: one world, one schedule, driven by a frame clock.
pub struct Game {
    world: World,
    schedule: Schedule,
    entities: SceneEntities,
}

impl Game {
    pub fn new(config: GameConfig, layout: SceneLayout) -> Result<Self, String> {
        GameConfig::check_secret(&config.secret)?;
        let mut world = World::new();
        let entities = setup_world(&mut world, config, layout);
        let mut schedule = build_schedule();
        schedule
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;
        Ok(Self {
            world,
            schedule,
            entities,
        })
    }

    /// Build the reference scene for `config`.
    pub fn from_config(config: GameConfig) -> Result<Self, String> {
        let layout = SceneLayout::from_config(&config);
        Self::new(config, layout)
    }

    /// Advance one tick by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn set_key(&mut self, action: InputAction, down: bool) {
        self.world.resource_mut::<InputState>().set_down(action, down);
    }

    pub fn press(&mut self, action: InputAction) {
        self.set_key(action, true);
    }

    pub fn release(&mut self, action: InputAction) {
        self.set_key(action, false);
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.world.trigger(FocusChangedEvent { focused });
        self.world.flush();
    }

    pub fn type_text(&mut self, text: &str) {
        self.world.resource_mut::<TextEntry>().push_str(text);
    }

    pub fn backspace(&mut self) {
        self.world.resource_mut::<TextEntry>().backspace();
    }

    /// Validate the text entry's current value against the secret.
    pub fn submit_password(&mut self) {
        self.world.trigger(PasswordSubmittedEvent {});
        self.world.flush();
    }

    pub fn toggle_debug(&mut self) {
        self.world.trigger(SwitchDebugEvent {});
        self.world.flush();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn entities(&self) -> SceneEntities {
        self.entities
    }

    pub fn overlay(&self) -> &OverlayState {
        self.world.resource::<OverlayState>()
    }

    pub fn carry_slot(&self) -> CarrySlot {
        *self.world.resource::<CarrySlot>()
    }

    pub fn text_entry(&self) -> &TextEntry {
        self.world.resource::<TextEntry>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.world.get::<MapPosition>(entity).map(|p| p.pos)
    }

    pub fn body(&self, entity: Entity) -> Option<&RigidBody> {
        self.world.get::<RigidBody>(entity)
    }

    pub fn player(&self) -> Option<&Player> {
        self.world.get::<Player>(self.entities.player)
    }

    pub fn balloon(&self) -> Option<&Balloon> {
        self.world.get::<Balloon>(self.entities.balloon)
    }

    pub fn key(&self) -> Option<&CarryKey> {
        self.entities.key.and_then(|k| self.world.get::<CarryKey>(k))
    }

    /// Opacity of the first overlay element on `layer`.
    pub fn layer_opacity(&mut self, layer: OverlayLayer) -> f32 {
        let mut query = self.world.query::<(&OverlayElement, &Opacity)>();
        query
            .iter(&self.world)
            .find(|(element, _)| element.layer == layer)
            .map(|(_, opacity)| opacity.0)
            .unwrap_or(0.0)
    }

    /// Teleport an entity, e.g. to stage a test or a debug jump.
    pub fn set_position(&mut self, entity: Entity, pos: Vec2) {
        if let Some(mut position) = self.world.get_mut::<MapPosition>(entity) {
            position.pos = pos;
        }
    }
}
