//! Controller input polling.
//!
//! [`poll_controller_input`] drains the
//! [`ControllerBridge`](crate::resources::controllerbridge::ControllerBridge)
//! without blocking, mirrors each sample into the matching
//! [`TrackedController`] and triggers a [`ControllerEvent`] for every flag
//! that changed. The pad axis is written before any event is triggered, so
//! observers always read the position that came with the transition.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::components::controller::TrackedController;
use crate::events::controller::{ControllerAction, ControllerEvent};
use crate::resources::controllerbridge::{ControllerBridge, ControllerSample};

/// Transitions between the stored state and a new sample, in the order
/// they are reported.
pub fn transitions(
    state: &TrackedController,
    sample: &ControllerSample,
) -> SmallVec<[ControllerAction; 3]> {
    let mut actions = SmallVec::new();
    if sample.pad_touched != state.pad_touched {
        actions.push(if sample.pad_touched {
            ControllerAction::PadTouched
        } else {
            ControllerAction::PadUntouched
        });
    }
    if sample.trigger != state.trigger_pressed {
        actions.push(if sample.trigger {
            ControllerAction::TriggerClicked
        } else {
            ControllerAction::TriggerUnclicked
        });
    }
    if sample.grip != state.gripped {
        actions.push(if sample.grip {
            ControllerAction::Gripped
        } else {
            ControllerAction::Ungripped
        });
    }
    actions
}

/// Drain pending controller samples and trigger input events.
pub fn poll_controller_input(
    bridge: Res<ControllerBridge>,
    mut controllers: Query<(Entity, &mut TrackedController)>,
    mut commands: Commands,
) {
    while let Ok(sample) = bridge.rx.try_recv() {
        let Some((entity, mut state)) = controllers
            .iter_mut()
            .find(|(_, c)| c.device == sample.device)
        else {
            warn!("controller sample for unknown device {}", sample.device);
            continue;
        };

        let actions = transitions(&state, &sample);
        state.pad_axis = sample.pad_axis;
        state.pad_touched = sample.pad_touched;
        state.trigger_pressed = sample.trigger;
        state.gripped = sample.grip;

        for action in actions {
            debug!("controller {:?}: {:?}", entity, action);
            commands.trigger(ControllerEvent {
                controller: entity,
                action,
                pad: sample.pad_axis,
            });
        }
    }
}
