//! Sensor contact events.
//!
//! The contact system emits [`ContactEvent`] when an entity's collider starts
//! or stops overlapping a [`TouchSensor`](crate::components::controller::TouchSensor).
//! Each transition is reported once.

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    Exit,
}

/// Event fired when a collider enters or leaves a sensor.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    /// The sensor entity.
    pub sensor: Entity,
    /// The entity entering or leaving.
    pub other: Entity,
    pub phase: ContactPhase,
}
