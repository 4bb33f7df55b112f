//! Overlay/pause coordinator state.
//!
//! The world is either running or paused with one overlay showing; the
//! paused flag is derived from the mode, so "paused without an overlay" does
//! not exist. Systems and observers drive the transitions:
//!
//! - running → paused(mode): [`OverlayState::open`], from the trigger system
//! - paused(password) → paused(rewards): [`OverlayState::unlock`]
//! - paused(*) → closing: [`OverlayState::begin_close`], on escape
//! - closing → running: [`OverlayState::finish_close`], when the fade-out ends
//!
//! `unlocked` is sticky: once the chest opens it stays open.

use bevy_ecs::prelude::Resource;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Prompt,
    Password,
    Rewards,
}

impl OverlayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayMode::Prompt => "prompt",
            OverlayMode::Password => "password",
            OverlayMode::Rewards => "rewards",
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct OverlayState {
    mode: Option<OverlayMode>,
    unlocked: bool,
    closing: bool,
    cooldown_until: f32,
    password_error: Option<String>,
}

impl OverlayState {
    pub fn mode(&self) -> Option<OverlayMode> {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode.is_some()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// A fade-out is in flight; escape is ignored until it completes.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn cooldown_until(&self) -> f32 {
        self.cooldown_until
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    /// Whether a trigger zone may fire at time `now`.
    pub fn can_trigger(&self, now: f32) -> bool {
        !self.is_paused() && now >= self.cooldown_until
    }

    /// Pause with `mode` showing. No-op (false) if already paused.
    pub fn open(&mut self, mode: OverlayMode) -> bool {
        if self.is_paused() {
            return false;
        }
        self.mode = Some(mode);
        self.closing = false;
        self.password_error = None;
        info!("overlay -> {}", mode.as_str());
        true
    }

    /// Correct password: mark the chest unlocked and swap to the rewards
    /// overlay. Only valid while the password overlay is showing.
    pub fn unlock(&mut self) -> bool {
        if self.mode != Some(OverlayMode::Password) || self.closing {
            return false;
        }
        self.unlocked = true;
        self.password_error = None;
        self.mode = Some(OverlayMode::Rewards);
        info!("chest unlocked");
        info!("overlay -> {}", OverlayMode::Rewards.as_str());
        true
    }

    /// Wrong password: stay on the password overlay with an inline error.
    pub fn reject_password(&mut self, message: impl Into<String>) {
        if self.mode == Some(OverlayMode::Password) {
            self.password_error = Some(message.into());
        }
    }

    /// Start closing. False if running or a close is already in flight.
    pub fn begin_close(&mut self) -> bool {
        if !self.is_paused() || self.closing {
            return false;
        }
        self.closing = true;
        true
    }

    /// Back to running; the same triggers stay quiet until `now + cooldown`.
    /// Calling this while already running does nothing.
    pub fn finish_close(&mut self, now: f32, cooldown: f32) -> bool {
        if !self.is_paused() {
            return false;
        }
        self.mode = None;
        self.closing = false;
        self.password_error = None;
        self.cooldown_until = now + cooldown;
        info!("overlay -> none (cooldown until {:.2}s)", self.cooldown_until);
        true
    }
}
