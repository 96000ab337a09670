//! Scheduled task component.
//!
//! A task is an entity holding a [`Timer`]. When the timer is due,
//! [`update_timers`](crate::systems::time::update_timers) triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying the owner and
//! the [`TaskSignal`]. One-shot tasks despawn after firing; repeating tasks
//! start counting again. Cancelling a task despawns its entity, see
//! [`cancel_task`](crate::systems::time::cancel_task).
use bevy_ecs::prelude::{Component, Entity};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerMode {
    Once,
    Repeat,
}

/// What the owner should do when the task fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaskSignal {
    /// Hide the palette unless the pad has been touched again.
    HideCheck,
    /// Inflate the placed item by one step.
    GrowPlacement,
}

#[derive(Component, Clone, Debug)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub mode: TimerMode,
    pub owner: Entity,
    pub signal: TaskSignal,
    /// Set on the first frame the task is seen. That frame's delta is not
    /// counted, so a task scheduled mid-frame never fires early.
    pub started: bool,
}

impl Timer {
    pub fn new(duration: f32, mode: TimerMode, owner: Entity, signal: TaskSignal) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            mode,
            owner,
            signal,
            started: false,
        }
    }
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Handle returned when a task is scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub Entity);

impl TaskHandle {
    pub fn entity(&self) -> Entity {
        self.0
    }
}
