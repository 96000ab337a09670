//! Channel between controller drivers and the ECS world.
//!
//! Any device driver (the desktop mapping in the demo, a VR runtime binding,
//! tests) holds a clone of [`ControllerBridge::sender`] and pushes
//! [`ControllerSample`]s. The
//! [`poll_controller_input`](crate::systems::controller::poll_controller_input)
//! system drains the receiver once per frame without blocking.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use raylib::math::Vector2;

/// Full controller state as reported by the device at one instant.
#[derive(Debug, Clone, Copy)]
pub struct ControllerSample {
    /// Device index, matched against
    /// [`TrackedController::device`](crate::components::controller::TrackedController::device).
    pub device: u32,
    pub pad_axis: Vector2,
    pub pad_touched: bool,
    pub trigger: bool,
    pub grip: bool,
}

impl ControllerSample {
    /// Sample with everything released and the pad centered.
    pub fn idle(device: u32) -> Self {
        Self {
            device,
            pad_axis: Vector2 { x: 0.0, y: 0.0 },
            pad_touched: false,
            trigger: false,
            grip: false,
        }
    }

    pub fn touching(mut self, x: f32, y: f32) -> Self {
        self.pad_touched = true;
        self.pad_axis = Vector2 { x, y };
        self
    }

    pub fn with_trigger(mut self, pressed: bool) -> Self {
        self.trigger = pressed;
        self
    }

    pub fn with_grip(mut self, pressed: bool) -> Self {
        self.grip = pressed;
        self
    }
}

/// Bridge resource holding both ends of the sample channel.
#[derive(Resource, Clone)]
pub struct ControllerBridge {
    /// Sender handed to drivers.
    pub tx: Sender<ControllerSample>,
    /// Receiver drained by the input system.
    pub rx: Receiver<ControllerSample>,
}

impl ControllerBridge {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<ControllerSample>();
        Self { tx, rx }
    }

    /// New sender for a driver.
    pub fn sender(&self) -> Sender<ControllerSample> {
        self.tx.clone()
    }
}

impl Default for ControllerBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a [`ControllerBridge`] and return a sender for the first driver.
pub fn setup_controller_bridge(world: &mut World) -> Sender<ControllerSample> {
    let bridge = ControllerBridge::new();
    let tx = bridge.sender();
    world.insert_resource(bridge);
    tx
}
