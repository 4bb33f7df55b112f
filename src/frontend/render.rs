//! Primitive rendering of the scene.
//!
//! The play area is scaled to fit the window with a [`Camera2D`]. Entities
//! are drawn as flat shapes; overlay elements are tinted by their
//! [`Opacity`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::carryable::{Balloon, CarryKey};
use crate::components::mapposition::MapPosition;
use crate::components::overlayelement::{Opacity, OverlayElement, OverlayLayer};
use crate::components::player::{Player, PlayerAnim};
use crate::components::triggerzone::{TriggerKind, TriggerZone};
use crate::resources::debugmode::DebugMode;
use crate::resources::overlay::OverlayState;
use crate::resources::playarea::PlayArea;
use crate::resources::textentry::TextEntry;

const SKY: Color = Color::new(24, 24, 40, 255);
const GROUND: Color = Color::new(70, 120, 60, 255);

/// Scale `color`'s alpha by `opacity`.
fn faded(color: Color, opacity: f32) -> Color {
    let a = (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color::new(color.r, color.g, color.b, a)
}

fn rect(aabb: Aabb) -> Rectangle {
    Rectangle::new(aabb.min.x, aabb.min.y, aabb.width(), aabb.height())
}

/// Camera that fits the play area inside a `screen_w` x `screen_h` window.
pub fn fit_camera(area: &PlayArea, screen_w: f32, screen_h: f32) -> Camera2D {
    let zoom = (screen_w / area.width).min(screen_h / area.height).max(0.01);
    Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 {
            x: (screen_w - area.width * zoom) * 0.5,
            y: (screen_h - area.height * zoom) * 0.5,
        },
        rotation: 0.0,
        zoom,
    }
}

fn layer_color(layer: OverlayLayer) -> Color {
    match layer {
        OverlayLayer::Backdrop => Color::new(0, 0, 0, 64),
        OverlayLayer::Prompt => Color::new(250, 230, 240, 255),
        OverlayLayer::Password => Color::new(235, 235, 245, 255),
        OverlayLayer::Rewards => Color::new(255, 240, 200, 255),
    }
}

fn layer_caption(layer: OverlayLayer) -> &'static str {
    match layer {
        OverlayLayer::Backdrop => "",
        OverlayLayer::Prompt => "You've got mail!",
        OverlayLayer::Password => "Password:",
        OverlayLayer::Rewards => "Unlocked!",
    }
}

/// Draw the world inside the camera.
pub fn render_scene(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let area = *world.resource::<PlayArea>();
    d2.draw_rectangle_rec(Rectangle::new(0.0, 0.0, area.width, area.height), SKY);
    d2.draw_rectangle_rec(
        Rectangle::new(0.0, area.ground_top, area.width, area.height - area.ground_top),
        GROUND,
    );

    let mut zones = world.query::<(&TriggerZone, &MapPosition, &BoxCollider)>();
    for (zone, position, collider) in zones.iter(world) {
        let color = match zone.kind {
            TriggerKind::Chest => Color::new(140, 90, 40, 255),
            TriggerKind::Envelope => Color::new(240, 240, 240, 255),
        };
        d2.draw_rectangle_rec(rect(collider.aabb(position.pos)), color);
    }

    let mut keys = world.query::<(&CarryKey, &MapPosition, &BoxCollider)>();
    for (_, position, collider) in keys.iter(world) {
        d2.draw_rectangle_rec(rect(collider.aabb(position.pos)), Color::GOLD);
    }

    let mut players = world.query::<(&Player, &MapPosition, &BoxCollider)>();
    for (player, position, collider) in players.iter(world) {
        let color = match player.anim {
            PlayerAnim::Held => Color::new(255, 200, 220, 255),
            _ => Color::WHITE,
        };
        d2.draw_rectangle_rec(rect(collider.aabb(position.pos)), color);
        // eye, so facing is visible
        let eye_x = position.pos.x + player.facing.sign() * collider.half_width() * 0.5;
        d2.draw_circle_v(
            Vector2 {
                x: eye_x,
                y: position.pos.y - collider.half_height() * 0.5,
            },
            1.5,
            Color::BLACK,
        );
    }

    let mut balloons = world.query::<(&Balloon, &MapPosition, &BoxCollider)>();
    for (_, position, collider) in balloons.iter(world) {
        d2.draw_circle_v(
            Vector2 {
                x: position.pos.x,
                y: position.pos.y,
            },
            collider.half_width(),
            Color::RED,
        );
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query_filtered::<
            (&BoxCollider, &MapPosition, Option<&TriggerZone>),
            Without<OverlayElement>,
        >();
        for (collider, position, zone) in colliders.iter(world) {
            let aabb = collider.aabb(position.pos);
            if let Some(zone) = zone {
                let inflated = aabb.inflate(zone.inflate, zone.inflate);
                d2.draw_rectangle_lines_ex(rect(inflated), 1.0, Color::ORANGE);
            }
            d2.draw_rectangle_lines_ex(rect(aabb), 1.0, Color::GREEN);
        }
    }
}

/// Draw overlay elements by their opacity, plus the password entry text.
pub fn render_overlay(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut elements = world.query::<(&OverlayElement, &Opacity, &MapPosition, &BoxCollider)>();
    let mut password_box = None;
    let mut password_opacity = 0.0;
    for (element, opacity, position, collider) in elements.iter(world) {
        if opacity.0 <= 0.0 {
            continue;
        }
        let aabb = collider.aabb(position.pos);
        d2.draw_rectangle_rec(rect(aabb), faded(layer_color(element.layer), opacity.0));
        let caption = layer_caption(element.layer);
        if !caption.is_empty() {
            d2.draw_text(
                caption,
                (aabb.min.x + 8.0) as i32,
                (aabb.min.y + 8.0) as i32,
                10,
                faded(Color::BLACK, opacity.0),
            );
        }
        if element.layer == OverlayLayer::Password {
            password_box = Some(aabb);
            password_opacity = opacity.0;
        }
    }

    let Some(aabb) = password_box else {
        return;
    };
    let entry = world.resource::<TextEntry>();
    if entry.is_visible() {
        let field = Rectangle::new(aabb.min.x + 8.0, aabb.min.y + 24.0, aabb.width() - 16.0, 14.0);
        let field_color = if entry.is_selected() {
            Color::SKYBLUE
        } else {
            Color::WHITE
        };
        d2.draw_rectangle_rec(field, faded(field_color, password_opacity));
        d2.draw_text(
            entry.text(),
            field.x as i32 + 2,
            field.y as i32 + 2,
            10,
            faded(Color::BLACK, password_opacity),
        );
    }
    if let Some(error) = world.resource::<OverlayState>().password_error() {
        d2.draw_text(
            error,
            (aabb.min.x + 8.0) as i32,
            (aabb.min.y + 46.0) as i32,
            10,
            faded(Color::MAROON, password_opacity),
        );
    }
}
