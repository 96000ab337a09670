//! Computed world-space transform for entities in a hierarchy.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`LocalPosition`](super::position::LocalPosition), [`Rotation`](super::rotation::Rotation),
//! and [`Scale`](super::scale::Scale) are interpreted as local to the parent.
//! The [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system computes the resulting world-space values and stores them here.

use bevy_ecs::prelude::*;
use raylib::math::{Quaternion, Vector3};

use super::rotation::{quat_conjugate, quat_identity, quat_mul, rotate_vector};

/// Computed world-space transform for hierarchical entities.
///
/// This component is managed by the transform propagation system. For root
/// entities it mirrors the local components. For children it contains the
/// composed result of the full ancestor chain.
#[derive(Component, Clone, Copy, Debug)]
pub struct GlobalTransform3D {
    /// World-space position.
    pub position: Vector3,
    /// World-space orientation.
    pub rotation: Quaternion,
    /// World-space scale.
    pub scale: Vector3,
}

impl Default for GlobalTransform3D {
    fn default() -> Self {
        Self {
            position: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            rotation: quat_identity(),
            scale: Vector3 {
                x: 1.0,
                y: 1.0,
                z: 1.0,
            },
        }
    }
}

fn div_or_zero(a: f32, b: f32) -> f32 {
    if b == 0.0 { 0.0 } else { a / b }
}

impl GlobalTransform3D {
    /// World transform of a child with the given local values under `self`.
    ///
    /// The local offset is scaled by the parent's scale, then rotated by the
    /// parent's orientation.
    pub fn compose(&self, local_pos: Vector3, local_rot: Quaternion, local_scale: Vector3) -> Self {
        let scaled = Vector3 {
            x: local_pos.x * self.scale.x,
            y: local_pos.y * self.scale.y,
            z: local_pos.z * self.scale.z,
        };
        let offset = rotate_vector(self.rotation, scaled);
        Self {
            position: Vector3 {
                x: self.position.x + offset.x,
                y: self.position.y + offset.y,
                z: self.position.z + offset.z,
            },
            rotation: quat_mul(self.rotation, local_rot),
            scale: Vector3 {
                x: self.scale.x * local_scale.x,
                y: self.scale.y * local_scale.y,
                z: self.scale.z * local_scale.z,
            },
        }
    }

    /// Local values that keep `self` at its current world placement when
    /// parented under `parent`. Inverse of [`compose`](Self::compose).
    pub fn relative_to(&self, parent: &GlobalTransform3D) -> (Vector3, Quaternion, Vector3) {
        let inv = quat_conjugate(parent.rotation);
        let delta = Vector3 {
            x: self.position.x - parent.position.x,
            y: self.position.y - parent.position.y,
            z: self.position.z - parent.position.z,
        };
        let unrotated = rotate_vector(inv, delta);
        let local_pos = Vector3 {
            x: div_or_zero(unrotated.x, parent.scale.x),
            y: div_or_zero(unrotated.y, parent.scale.y),
            z: div_or_zero(unrotated.z, parent.scale.z),
        };
        let local_rot = quat_mul(inv, self.rotation);
        let local_scale = Vector3 {
            x: div_or_zero(self.scale.x, parent.scale.x),
            y: div_or_zero(self.scale.y, parent.scale.y),
            z: div_or_zero(self.scale.z, parent.scale.z),
        };
        (local_pos, local_rot, local_scale)
    }
}
