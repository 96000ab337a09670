//! Desktop controller emulation.
//!
//! Without a VR runtime the demo drives the controller from mouse and
//! keyboard. [`desktop_controller_input`] reads Raylib each frame, builds a
//! [`ControllerSample`] for [`DESKTOP_DEVICE`] and pushes it through the
//! [`ControllerBridge`], exactly like a device driver would.
//!
//! | Input              | Controller                           |
//! |--------------------|--------------------------------------|
//! | right mouse (hold) | touch the pad, mouse X is the pad X  |
//! | left mouse / Space | trigger                              |
//! | G / left Shift     | grip                                 |
//! | W A S D Q E        | move the controller                  |
//! | F11                | toggle [`DebugMode`]                 |
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};
use raylib::math::Vector3;

use crate::components::controller::TrackedController;
use crate::components::position::LocalPosition;
use crate::resources::controllerbridge::{ControllerBridge, ControllerSample};
use crate::resources::debugmode::DebugMode;
use crate::resources::worldtime::WorldTime;

/// Device index used by the desktop mapping.
pub const DESKTOP_DEVICE: u32 = 0;

/// Controller movement speed in units per second.
const MOVE_SPEED: f32 = 0.4;

/// Raw desktop input relevant to the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopInput {
    pub mouse_x: f32,
    pub screen_width: f32,
    pub touch: bool,
    pub trigger: bool,
    pub grip: bool,
}

/// Map desktop input onto a controller sample.
///
/// The pad X axis spans the window width: left edge -1, right edge 1.
pub fn desktop_sample(input: &DesktopInput) -> ControllerSample {
    let mut sample = ControllerSample::idle(DESKTOP_DEVICE)
        .with_trigger(input.trigger)
        .with_grip(input.grip);
    if input.touch {
        let x = if input.screen_width > 0.0 {
            (input.mouse_x / input.screen_width * 2.0 - 1.0).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        sample = sample.touching(x, 0.0);
    }
    sample
}

/// Poll Raylib and feed the desktop controller.
pub fn desktop_controller_input(
    rl: NonSend<raylib::RaylibHandle>,
    bridge: Res<ControllerBridge>,
    world_time: Res<WorldTime>,
    debug: Option<Res<DebugMode>>,
    mut controllers: Query<(&TrackedController, &mut LocalPosition)>,
    mut commands: Commands,
) {
    let input = DesktopInput {
        mouse_x: rl.get_mouse_x() as f32,
        screen_width: rl.get_screen_width() as f32,
        touch: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT),
        trigger: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT)
            || rl.is_key_down(KeyboardKey::KEY_SPACE),
        grip: rl.is_key_down(KeyboardKey::KEY_G) || rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
    };
    if bridge.tx.send(desktop_sample(&input)).is_err() {
        log::warn!("controller bridge closed");
    }

    let axis = |neg: KeyboardKey, pos: KeyboardKey| -> f32 {
        (rl.is_key_down(pos) as i32 - rl.is_key_down(neg) as i32) as f32
    };
    let step = MOVE_SPEED * world_time.delta;
    let delta = Vector3 {
        x: axis(KeyboardKey::KEY_A, KeyboardKey::KEY_D) * step,
        y: axis(KeyboardKey::KEY_Q, KeyboardKey::KEY_E) * step,
        z: axis(KeyboardKey::KEY_W, KeyboardKey::KEY_S) * step,
    };
    if delta.x != 0.0 || delta.y != 0.0 || delta.z != 0.0 {
        for (controller, mut pos) in controllers.iter_mut() {
            if controller.device == DESKTOP_DEVICE {
                pos.translate(delta);
            }
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        if debug.is_some() {
            commands.remove_resource::<DebugMode>();
        } else {
            commands.insert_resource(DebugMode {});
        }
    }
}
