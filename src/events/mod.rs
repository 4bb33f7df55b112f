//! Event types and observers.
//!
//! Events decouple the systems that detect a transition from the code that
//! carries it out. Observers are registered once on the world and run as
//! soon as an event is triggered.
//!
//! Submodules:
//! - [`input`] – window focus gained/lost
//! - [`overlay`] – overlay open/close, fade completion, password submission
//! - [`switchdebug`] – toggle debug outlines on/off
pub mod input;
pub mod overlay;
pub mod switchdebug;
