//! Controller input events.
//!
//! This module defines [`ControllerEvent`] which is triggered when a
//! controller input changes state (pad touch, trigger, grip). The
//! [`ControllerAction`] enum lists the recognized transitions.
//!
//! Systems can subscribe to these events to react to discrete input without
//! polling the [`TrackedController`](crate::components::controller::TrackedController)
//! component.

use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Discrete controller transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerAction {
    PadTouched,
    PadUntouched,
    TriggerClicked,
    TriggerUnclicked,
    Gripped,
    Ungripped,
}

/// Event emitted when a controller input changes.
#[derive(Event, Debug, Clone, Copy)]
pub struct ControllerEvent {
    /// Entity carrying the [`TrackedController`](crate::components::controller::TrackedController).
    pub controller: Entity,
    pub action: ControllerAction,
    /// Touchpad position at the time of the transition.
    pub pad: Vector2,
}
