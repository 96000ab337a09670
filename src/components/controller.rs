//! Tracked motion controller state.
//!
//! [`TrackedController`] mirrors the latest sample received from the device
//! for one controller: the continuous touchpad axis plus the touch, trigger
//! and grip flags. It is updated by
//! [`poll_controller_input`](crate::systems::controller::poll_controller_input),
//! which also triggers the discrete
//! [`ControllerEvent`](crate::events::controller::ControllerEvent)s.

use bevy_ecs::prelude::Component;
use raylib::math::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct TrackedController {
    /// Device index the samples are addressed to.
    pub device: u32,
    /// Touchpad position, each axis in [-1, 1].
    pub pad_axis: Vector2,
    pub pad_touched: bool,
    pub trigger_pressed: bool,
    pub gripped: bool,
}

impl TrackedController {
    pub fn new(device: u32) -> Self {
        Self {
            device,
            pad_axis: Vector2 { x: 0.0, y: 0.0 },
            pad_touched: false,
            trigger_pressed: false,
            gripped: false,
        }
    }
}

/// Marks the collider that reports contacts for a controller.
///
/// Only pairs with one sensor entity produce
/// [`ContactEvent`](crate::events::contact::ContactEvent)s.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TouchSensor;
