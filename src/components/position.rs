use bevy_ecs::prelude::Component;
use raylib::math::Vector3;

/// Position of an entity relative to its parent (or the world, for roots).
#[derive(Component, Clone, Copy, Debug)]
pub struct LocalPosition {
    pub pos: Vector3,
}

impl LocalPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3 { x, y, z },
        }
    }

    pub fn from_vec(pos: Vector3) -> Self {
        Self { pos }
    }

    /// Move along the local axes by `delta`.
    pub fn translate(&mut self, delta: Vector3) {
        self.pos.x += delta.x;
        self.pos.y += delta.y;
        self.pos.z += delta.z;
    }
}

impl Default for LocalPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
