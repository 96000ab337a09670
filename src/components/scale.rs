use bevy_ecs::prelude::Component;
use raylib::math::Vector3;

#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub scale: Vector3,
}
impl Scale {
    pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            scale: Vector3 {
                x: sx,
                y: sy,
                z: sz,
            },
        }
    }
    pub fn uniform(s: f32) -> Self {
        Self::new(s, s, s)
    }
    /// Add the same amount to every axis.
    pub fn grow(&mut self, amount: f32) {
        self.scale.x += amount;
        self.scale.y += amount;
        self.scale.z += amount;
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
