//! Opacity tween used for overlay fades.
//!
//! A [`TweenOpacity`] animates the entity's
//! [`Opacity`](super::overlayelement::Opacity) from `from` to `to` over
//! `duration` seconds. It plays once. If it carries an `on_finish` signal,
//! [`crate::systems::tween::tween_opacity_system`] triggers
//! [`TweenFinishedEvent`](crate::events::overlay::TweenFinishedEvent) exactly
//! once when it ends; removing or replacing the component earlier cancels
//! that completion.

use bevy_ecs::prelude::Component;

/// Easing curve mapping linear progress `t` in [0, 1] onto the fade.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Starts slow, accelerates. Used for fade-outs.
    SineIn,
    /// Starts fast, decelerates. Used for fade-ins.
    #[default]
    SineOut,
}

/// Completion effect requested when a tween finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenSignal {
    /// The overlay fade-out ended: resume the world.
    OverlayClosed,
}

#[derive(Component, Clone, Debug)]
pub struct TweenOpacity {
    pub from: f32,
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    pub on_finish: Option<TweenSignal>,
}

impl TweenOpacity {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenOpacity {
            from,
            to,
            duration,
            easing: Easing::default(),
            playing: true,
            time: 0.0,
            on_finish: None,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_signal(mut self, signal: TweenSignal) -> Self {
        self.on_finish = Some(signal);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_opacity_new() {
        let tw = TweenOpacity::new(0.0, 1.0, 0.4);
        assert_eq!(tw.easing, Easing::SineOut);
        assert!(tw.playing);
        assert_eq!(tw.time, 0.0);
        assert!(tw.on_finish.is_none());
    }

    #[test]
    fn test_tween_opacity_builder_chaining() {
        let tw = TweenOpacity::new(1.0, 0.0, 0.3)
            .with_easing(Easing::SineIn)
            .with_signal(TweenSignal::OverlayClosed);
        assert_eq!(tw.easing, Easing::SineIn);
        assert_eq!(tw.on_finish, Some(TweenSignal::OverlayClosed));
    }
}
