//! Tween animation systems.
//!
//! - [`tween_opacity_system`] – animates [`Opacity`](crate::components::overlayelement::Opacity)
//!   for overlay fades
//!
//! The tween specifies start/end values, duration and easing function. The
//! system reads delta time from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and keeps running while the world is paused.

use std::f32::consts::FRAC_PI_2;

use bevy_ecs::prelude::*;

use crate::components::overlayelement::Opacity;
use crate::components::tween::{Easing, TweenOpacity};
use crate::events::overlay::TweenFinishedEvent;
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
        Easing::SineOut => (t * FRAC_PI_2).sin(),
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time. Returns true on the tick the tween reaches its end.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) -> bool {
    *time += dt;
    if *time >= duration {
        *time = duration.max(0.0);
        *playing = false;
        return true;
    }
    false
}

/// Animate overlay opacity based on [`TweenOpacity`] components.
///
/// A finished tween stops playing and, if it carries a signal, triggers
/// [`TweenFinishedEvent`] once; the signal is taken so it cannot fire again.
pub fn tween_opacity_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Opacity, &mut TweenOpacity)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut opacity, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        let finished = advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;

        let progress = if duration > 0.0 { tw.time / duration } else { 1.0 };
        opacity.0 = lerp_f32(tw.from, tw.to, ease(tw.easing, progress)).clamp(0.0, 1.0);

        if finished && let Some(signal) = tw.on_finish.take() {
            commands.trigger(TweenFinishedEvent { entity, signal });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_ease_endpoints() {
        for e in [Easing::SineIn, Easing::SineOut] {
            assert!(approx_eq(ease(e, 0.0), 0.0), "{:?} at 0", e);
            assert!(approx_eq(ease(e, 1.0), 1.0), "{:?} at 1", e);
        }
    }

    #[test]
    fn test_sine_out_leads_sine_in() {
        assert!(ease(Easing::SineOut, 0.3) > 0.3);
        assert!(ease(Easing::SineIn, 0.3) < 0.3);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert!(approx_eq(ease(Easing::SineOut, -1.0), 0.0));
        assert!(approx_eq(ease(Easing::SineIn, 2.0), 1.0));
    }

    #[test]
    fn test_advance_stops_at_duration() {
        let mut time = 0.0;
        let mut playing = true;
        assert!(!advance(&mut time, 0.3, &mut playing, 0.2));
        assert!(playing);
        assert!(advance(&mut time, 0.3, &mut playing, 0.2));
        assert!(!playing);
        assert!(approx_eq(time, 0.3));
    }

    #[test]
    fn test_zero_duration_finishes_at_once() {
        let mut time = 0.0;
        let mut playing = true;
        assert!(advance(&mut time, 0.0, &mut playing, 0.0));
        assert!(!playing);
    }
}
