//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`] so the render system and the
//! desktop input mapping agree on the view used for the demo scene.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource that holds the active 3D camera parameters.
#[derive(Resource)]
pub struct Camera3DRes(pub Camera3D);

impl Camera3DRes {
    /// Perspective camera a little above and behind the origin, looking at
    /// the spot where the controller starts.
    pub fn desktop_default() -> Self {
        Self(Camera3D::perspective(
            Vector3::new(0.0, 0.45, 0.7),
            Vector3::new(0.0, 0.1, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            45.0,
        ))
    }
}
