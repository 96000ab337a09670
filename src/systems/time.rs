//! Time update and scheduled task systems.
//!
//! - [`update_world_time`] – advances the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame
//! - [`update_timers`] – accumulates delta time on [`Timer`] tasks and
//!   triggers a [`TimerEvent`] when one is due
//! - [`schedule_task`] / [`cancel_task`] – create and drop tasks from
//!   observers and systems
//!
//! A task fires at most once per frame. Its continuation runs in whichever
//! observer handles the [`TimerEvent`], after the commands of the frame that
//! fired it are applied.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::timer::{TaskHandle, TaskSignal, Timer, TimerMode};
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance every task and fire the ones that are due.
///
/// A task starts counting on the frame after it was scheduled. One-shot
/// tasks are despawned after firing. Repeating tasks restart from zero, so a
/// long frame never fires the same task twice.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if !timer.started {
            timer.started = true;
            continue;
        }
        timer.elapsed += world_time.delta;
        if timer.elapsed < timer.duration {
            continue;
        }
        trace!("task {:?} fired {:?} for {:?}", entity, timer.signal, timer.owner);
        commands.trigger(TimerEvent {
            timer: entity,
            owner: timer.owner,
            signal: timer.signal,
        });
        match timer.mode {
            TimerMode::Once => commands.entity(entity).try_despawn(),
            TimerMode::Repeat => timer.reset(),
        }
    }
}

/// Spawn a task that fires `signal` for `owner` after `delay` seconds.
///
/// A `Repeat` task fires every `delay` seconds until cancelled.
pub fn schedule_task(
    commands: &mut Commands,
    owner: Entity,
    delay: f32,
    mode: TimerMode,
    signal: TaskSignal,
) -> TaskHandle {
    let entity = commands
        .spawn(Timer::new(delay.max(0.0), mode, owner, signal))
        .id();
    TaskHandle(entity)
}

/// Cancel a task. Cancelling a task that already finished is a no-op.
pub fn cancel_task(commands: &mut Commands, handle: TaskHandle) {
    commands.entity(handle.entity()).try_despawn();
}
