//! Single-system tick tests: each test builds a small `World`, inserts the
//! resources a system needs and runs it through a one-system `Schedule`.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use heartfloat::components::bob::Bob;
use heartfloat::components::boxcollider::BoxCollider;
use heartfloat::components::carryable::{CarryKey, KeyState};
use heartfloat::components::mapposition::MapPosition;
use heartfloat::components::overlayelement::Opacity;
use heartfloat::components::player::{Facing, Player};
use heartfloat::components::rigidbody::{GRAVITY, RigidBody};
use heartfloat::components::stuckto::StuckTo;
use heartfloat::components::triggerzone::{TriggerCondition, TriggerZone};
use heartfloat::components::tween::{Easing, TweenOpacity, TweenSignal};
use heartfloat::events::overlay::{OpenOverlayEvent, TweenFinishedEvent};
use heartfloat::resources::carryslot::CarrySlot;
use heartfloat::resources::gameconfig::GameConfig;
use heartfloat::resources::input::{InputAction, InputState};
use heartfloat::resources::overlay::{OverlayMode, OverlayState};
use heartfloat::resources::playarea::PlayArea;
use heartfloat::resources::worldtime::WorldTime;
use heartfloat::systems::bob::bob_system;
use heartfloat::systems::carry::key_settle_system;
use heartfloat::systems::input::latch_input;
use heartfloat::systems::movement::movement;
use heartfloat::systems::stuckto::stuck_to_entity_system;
use heartfloat::systems::time::update_world_time;
use heartfloat::systems::triggerzone::trigger_zone_system;
use heartfloat::systems::tween::tween_opacity_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PlayArea {
        width: 320.0,
        height: 180.0,
        ground_top: 148.0,
    });
    world.insert_resource(GameConfig::new());
    world.insert_resource(CarrySlot::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(InputState::default());
    world
}

fn run_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn run_stuck_to(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(stuck_to_entity_system);
    schedule.run(world);
}

fn run_tween(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(tween_opacity_system);
    schedule.run(world);
}

fn run_triggers(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(trigger_zone_system);
    schedule.run(world);
}

fn run_key_settle(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(key_settle_system);
    schedule.run(world);
}

fn run_bob(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(bob_system);
    schedule.run(world);
}

fn run_latch(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(latch_input);
    schedule.run(world);
}

fn tick_movement(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    run_movement(world);
}

// ---------------------------------------------------------------- movement

#[test]
fn movement_integrates_gravity_and_velocity() {
    let mut world = make_world();
    let mut rb = RigidBody::new().with_force(GRAVITY, Vec2::new(0.0, 100.0));
    rb.velocity = Vec2::new(10.0, 0.0);
    let e = world
        .spawn((MapPosition::new(50.0, 50.0), rb, BoxCollider::centered(10.0, 10.0)))
        .id();

    tick_movement(&mut world, 0.25);

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(body.velocity.y, 25.0));
    assert!(approx_eq(pos.x, 52.5));
    assert!(approx_eq(pos.y, 56.25));
    assert!(!body.grounded);
}

#[test]
fn movement_lands_on_the_ground_line() {
    let mut world = make_world();
    let rb = RigidBody::new().with_force(GRAVITY, Vec2::new(0.0, 900.0));
    let e = world
        .spawn((MapPosition::new(50.0, 130.0), rb, BoxCollider::centered(16.0, 24.0)))
        .id();

    for _ in 0..60 {
        tick_movement(&mut world, 1.0 / 60.0);
    }

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(pos.y, 136.0));
    assert!(approx_eq(body.velocity.y, 0.0));
    assert!(body.grounded);
}

#[test]
fn movement_bounces_then_rests() {
    let mut world = make_world();
    let mut rb = RigidBody::with_physics(0.0, 0.5);
    rb.velocity = Vec2::new(0.0, 100.0);
    let e = world
        .spawn((MapPosition::new(50.0, 144.0), rb, BoxCollider::centered(8.0, 6.0)))
        .id();

    tick_movement(&mut world, 0.1);
    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(body.velocity.y, -50.0));
    assert!(!body.grounded);

    // a slow landing does not bounce
    world.get_mut::<RigidBody>(e).unwrap().velocity.y = 15.0;
    world.get_mut::<MapPosition>(e).unwrap().pos.y = 144.9;
    tick_movement(&mut world, 0.1);
    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(body.velocity.y, 0.0));
    assert!(body.grounded);
}

#[test]
fn movement_friction_only_on_the_ground() {
    let mut world = make_world();
    let mut rb = RigidBody::with_physics(5.0, 0.0);
    rb.velocity = Vec2::new(100.0, 0.0);
    let e = world
        .spawn((MapPosition::new(50.0, 50.0), rb, BoxCollider::centered(8.0, 6.0)))
        .id();

    tick_movement(&mut world, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(e).unwrap().velocity.x, 100.0));

    {
        let mut body = world.get_mut::<RigidBody>(e).unwrap();
        body.grounded = true;
    }
    world.get_mut::<MapPosition>(e).unwrap().pos.y = 145.0;
    tick_movement(&mut world, 0.1);
    assert!(approx_eq(world.get::<RigidBody>(e).unwrap().velocity.x, 50.0));
}

#[test]
fn movement_skips_frozen_bodies_and_clamps_walls() {
    let mut world = make_world();
    let mut frozen = RigidBody::new();
    frozen.velocity = Vec2::new(100.0, 0.0);
    frozen.freeze();
    let a = world
        .spawn((MapPosition::new(50.0, 50.0), frozen, BoxCollider::centered(8.0, 8.0)))
        .id();

    let mut runaway = RigidBody::new();
    runaway.velocity = Vec2::new(1000.0, 0.0);
    let b = world
        .spawn((MapPosition::new(300.0, 50.0), runaway, BoxCollider::centered(8.0, 8.0)))
        .id();

    tick_movement(&mut world, 0.1);

    assert!(approx_eq(world.get::<MapPosition>(a).unwrap().pos.x, 50.0));
    assert!(approx_eq(world.get::<MapPosition>(b).unwrap().pos.x, 316.0));
    assert!(approx_eq(world.get::<RigidBody>(b).unwrap().velocity.x, 0.0));
}

// ---------------------------------------------------------------- stuck-to

#[test]
fn stuck_to_mirrors_offset_by_player_facing() {
    let mut world = make_world();
    let player = world
        .spawn((Player::default(), MapPosition::new(100.0, 100.0)))
        .id();
    let item = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            StuckTo::new(player).with_offset(Vec2::new(7.0, -10.0)).mirrored(),
        ))
        .id();

    run_stuck_to(&mut world);
    assert_eq!(world.get::<MapPosition>(item).unwrap().pos, Vec2::new(107.0, 90.0));

    world.get_mut::<Player>(player).unwrap().facing = Facing::Left;
    run_stuck_to(&mut world);
    assert_eq!(world.get::<MapPosition>(item).unwrap().pos, Vec2::new(93.0, 90.0));
}

#[test]
fn stuck_to_missing_target_leaves_position() {
    let mut world = make_world();
    let gone = world.spawn(MapPosition::new(1.0, 1.0)).id();
    world.despawn(gone);
    let item = world
        .spawn((MapPosition::new(5.0, 5.0), StuckTo::new(gone)))
        .id();

    run_stuck_to(&mut world);
    assert_eq!(world.get::<MapPosition>(item).unwrap().pos, Vec2::new(5.0, 5.0));
}

// ---------------------------------------------------------------- tweens

#[derive(Resource, Default)]
struct Finished(Vec<TweenSignal>);

fn record_finished(trigger: On<TweenFinishedEvent>, mut finished: ResMut<Finished>) {
    finished.0.push(trigger.event().signal);
}

fn tick_tween(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    run_tween(world);
}

#[test]
fn opacity_tween_reaches_target_and_signals_once() {
    let mut world = make_world();
    world.init_resource::<Finished>();
    world.spawn(Observer::new(record_finished));
    world.flush();

    let e = world
        .spawn((
            Opacity(1.0),
            TweenOpacity::new(1.0, 0.0, 0.3)
                .with_easing(Easing::SineIn)
                .with_signal(TweenSignal::OverlayClosed),
        ))
        .id();

    tick_tween(&mut world, 0.1);
    let mid = world.get::<Opacity>(e).unwrap().0;
    assert!(mid > 0.0 && mid < 1.0);
    assert!(world.resource::<Finished>().0.is_empty());

    for _ in 0..5 {
        tick_tween(&mut world, 0.1);
    }
    assert!(approx_eq(world.get::<Opacity>(e).unwrap().0, 0.0));
    assert_eq!(world.resource::<Finished>().0, vec![TweenSignal::OverlayClosed]);
    assert!(!world.get::<TweenOpacity>(e).unwrap().playing);
}

#[test]
fn replaced_tween_never_signals() {
    let mut world = make_world();
    world.init_resource::<Finished>();
    world.spawn(Observer::new(record_finished));
    world.flush();

    let e = world
        .spawn((
            Opacity(1.0),
            TweenOpacity::new(1.0, 0.0, 0.3).with_signal(TweenSignal::OverlayClosed),
        ))
        .id();
    tick_tween(&mut world, 0.1);
    world
        .entity_mut(e)
        .insert(TweenOpacity::new(0.6, 1.0, 0.3));
    for _ in 0..5 {
        tick_tween(&mut world, 0.1);
    }
    assert!(approx_eq(world.get::<Opacity>(e).unwrap().0, 1.0));
    assert!(world.resource::<Finished>().0.is_empty());
}

#[test]
fn fade_in_uses_sine_out() {
    let mut world = make_world();
    let e = world
        .spawn((
            Opacity(0.0),
            TweenOpacity::new(0.0, 1.0, 0.4).with_easing(Easing::SineOut),
        ))
        .id();
    tick_tween(&mut world, 0.2);
    let half = world.get::<Opacity>(e).unwrap().0;
    assert!(approx_eq(half, std::f32::consts::FRAC_1_SQRT_2));
}

// ---------------------------------------------------------------- triggers

#[derive(Resource, Default)]
struct Opened(Vec<OverlayMode>);

fn record_open(trigger: On<OpenOverlayEvent>, mut opened: ResMut<Opened>) {
    opened.0.push(trigger.event().mode);
}

fn trigger_world() -> World {
    let mut world = make_world();
    world.init_resource::<Opened>();
    world.spawn(Observer::new(record_open));
    world.flush();
    world.spawn((
        Player::default(),
        MapPosition::new(100.0, 100.0),
        BoxCollider::centered(16.0, 24.0),
    ));
    world
}

#[test]
fn chest_wins_when_both_zones_qualify() {
    let mut world = trigger_world();
    *world.resource_mut::<CarrySlot>() = CarrySlot::Key;
    // an envelope-kind zone that also accepts the key, so both qualify
    world.spawn((
        TriggerZone {
            condition: TriggerCondition::CarryingKey,
            ..TriggerZone::envelope(12.0)
        },
        MapPosition::new(100.0, 100.0),
        BoxCollider::centered(20.0, 14.0),
    ));
    world.spawn((
        TriggerZone::chest(12.0),
        MapPosition::new(105.0, 100.0),
        BoxCollider::centered(20.0, 16.0),
    ));

    run_triggers(&mut world);
    assert_eq!(world.resource::<Opened>().0, vec![OverlayMode::Password]);
}

#[test]
fn zone_needs_its_precondition() {
    let mut world = trigger_world();
    world.spawn((
        TriggerZone::chest(12.0),
        MapPosition::new(100.0, 100.0),
        BoxCollider::centered(20.0, 16.0),
    ));

    run_triggers(&mut world);
    assert!(world.resource::<Opened>().0.is_empty());

    *world.resource_mut::<CarrySlot>() = CarrySlot::Key;
    run_triggers(&mut world);
    assert_eq!(world.resource::<Opened>().0, vec![OverlayMode::Password]);
}

#[test]
fn inflate_margin_extends_the_zone() {
    let mut world = trigger_world();
    *world.resource_mut::<CarrySlot>() = CarrySlot::Balloon;
    // player spans x 92..108; envelope spans 118..138 before inflating
    world.spawn((
        TriggerZone::envelope(0.0),
        MapPosition::new(128.0, 100.0),
        BoxCollider::centered(20.0, 14.0),
    ));
    run_triggers(&mut world);
    assert!(world.resource::<Opened>().0.is_empty());

    let mut zones = world.query::<&mut TriggerZone>();
    for mut zone in zones.iter_mut(&mut world) {
        zone.inflate = 12.0;
    }
    run_triggers(&mut world);
    assert_eq!(world.resource::<Opened>().0, vec![OverlayMode::Prompt]);
}

#[test]
fn zones_stay_quiet_during_cooldown() {
    let mut world = trigger_world();
    *world.resource_mut::<CarrySlot>() = CarrySlot::Balloon;
    world.spawn((
        TriggerZone::envelope(12.0),
        MapPosition::new(100.0, 100.0),
        BoxCollider::centered(20.0, 14.0),
    ));
    {
        let mut overlay = world.resource_mut::<OverlayState>();
        overlay.open(OverlayMode::Prompt);
        overlay.begin_close();
        overlay.finish_close(0.0, 5.0);
    }

    for _ in 0..16 {
        update_world_time(&mut world, 0.25);
        run_triggers(&mut world);
    }
    assert!(world.resource::<Opened>().0.is_empty());

    for _ in 0..4 {
        update_world_time(&mut world, 0.25);
    }
    run_triggers(&mut world);
    assert_eq!(world.resource::<Opened>().0, vec![OverlayMode::Prompt]);
}

// ---------------------------------------------------------------- misc

#[test]
fn dropped_key_settles_when_slow_on_the_ground() {
    let mut world = make_world();
    let mut rb = RigidBody::new();
    rb.velocity = Vec2::new(5.0, 0.0);
    rb.grounded = true;
    let key = world
        .spawn((
            CarryKey {
                state: KeyState::Dropped,
            },
            rb,
        ))
        .id();

    run_key_settle(&mut world);
    assert_eq!(world.get::<CarryKey>(key).unwrap().state, KeyState::Dropped);

    world.get_mut::<RigidBody>(key).unwrap().velocity.x = 1.5;
    run_key_settle(&mut world);
    assert_eq!(world.get::<CarryKey>(key).unwrap().state, KeyState::Resting);
    assert_eq!(world.get::<RigidBody>(key).unwrap().velocity.x, 0.0);
}

#[test]
fn bob_follows_the_sine_of_elapsed_time() {
    let mut world = make_world();
    let e = world
        .spawn((Bob::new(100.0, 6.0, 3.0), MapPosition::new(160.0, 100.0)))
        .id();
    for _ in 0..3 {
        update_world_time(&mut world, std::f32::consts::PI / 18.0);
    }
    run_bob(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.y, 106.0));
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 160.0));
}

#[test]
fn latch_exposes_each_press_for_one_tick() {
    let mut world = make_world();
    world.resource_mut::<InputState>().press(InputAction::Interact);
    world.resource_mut::<InputState>().release(InputAction::Interact);

    run_latch(&mut world);
    assert!(world.resource::<InputState>().is_just_pressed(InputAction::Interact));
    assert!(world
        .resource_mut::<InputState>()
        .consume_just_pressed(InputAction::Interact));
    assert!(!world
        .resource_mut::<InputState>()
        .consume_just_pressed(InputAction::Interact));

    run_latch(&mut world);
    assert!(!world.resource::<InputState>().is_just_pressed(InputAction::Interact));
}
