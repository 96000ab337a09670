//! Scheduled task events.
//!
//! When a [`Timer`](crate::components::timer::Timer) task is due, a
//! [`TimerEvent`] is triggered. Observers match on the owner and the
//! [`TaskSignal`] to run the continuation.
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the task component
//! - [`crate::systems::time::update_timers`] – the system that emits these events

use bevy_ecs::prelude::*;

use crate::components::timer::TaskSignal;

/// Event emitted when a task fires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// The task entity (its [`TaskHandle`](crate::components::timer::TaskHandle)).
    pub timer: Entity,
    /// Entity the task was scheduled for.
    pub owner: Entity,
    pub signal: TaskSignal,
}
