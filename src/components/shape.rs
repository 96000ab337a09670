//! Renderable primitive shapes.
//!
//! Every palette item and placed object is drawn as one of these primitives,
//! scaled by the entity's world scale.

use bevy_ecs::prelude::Component;
use raylib::math::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Box with full edge lengths.
    Cube { size: [f32; 3] },
    Sphere { radius: f32 },
}

impl Shape {
    /// Extents of the shape's bounding box, used to size colliders.
    pub fn bounds(&self) -> Vector3 {
        match *self {
            Shape::Cube { size } => Vector3 {
                x: size[0],
                y: size[1],
                z: size[2],
            },
            Shape::Sphere { radius } => Vector3 {
                x: radius * 2.0,
                y: radius * 2.0,
                z: radius * 2.0,
            },
        }
    }
}
