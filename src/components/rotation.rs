//! Orientation component and the quaternion helpers used by the transform
//! hierarchy.
//!
//! Quaternions are stored as raylib's [`Quaternion`] (`x`, `y`, `z` vector
//! part, `w` scalar part) and are expected to be unit length.

use bevy_ecs::prelude::Component;
use raylib::math::{Quaternion, Vector3};

#[derive(Component, Clone, Debug, Copy)]
pub struct Rotation {
    pub quat: Quaternion,
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            quat: quat_identity(),
        }
    }

    /// Rotation of `degrees` around the Y (up) axis.
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        let half = degrees.to_radians() * 0.5;
        let (sin, cos) = half.sin_cos();
        Self {
            quat: Quaternion {
                x: 0.0,
                y: sin,
                z: 0.0,
                w: cos,
            },
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

pub fn quat_identity() -> Quaternion {
    Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    }
}

/// Hamilton product `a * b` (apply `b` first, then `a`).
pub fn quat_mul(a: Quaternion, b: Quaternion) -> Quaternion {
    Quaternion {
        x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    }
}

/// Inverse of a unit quaternion.
pub fn quat_conjugate(q: Quaternion) -> Quaternion {
    Quaternion {
        x: -q.x,
        y: -q.y,
        z: -q.z,
        w: q.w,
    }
}

fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

/// Rotate `v` by the unit quaternion `q`.
pub fn rotate_vector(q: Quaternion, v: Vector3) -> Vector3 {
    let u = Vector3 {
        x: q.x,
        y: q.y,
        z: q.z,
    };
    let c = cross(u, v);
    let t = Vector3 {
        x: 2.0 * c.x,
        y: 2.0 * c.y,
        z: 2.0 * c.z,
    };
    let c2 = cross(u, t);
    Vector3 {
        x: v.x + q.w * t.x + c2.x,
        y: v.y + q.w * t.y + c2.y,
        z: v.z + q.w * t.z + c2.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_leaves_vector_untouched() {
        let v = Vector3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let r = rotate_vector(quat_identity(), v);
        assert!(approx_eq(r.x, 1.0));
        assert!(approx_eq(r.y, 2.0));
        assert!(approx_eq(r.z, 3.0));
    }

    #[test]
    fn test_yaw_90_maps_x_to_negative_z() {
        let q = Rotation::from_yaw_degrees(90.0).quat;
        let r = rotate_vector(
            q,
            Vector3 {
                x: 1.0,
                y: 0.0,
                z: 0.0,
            },
        );
        assert!(approx_eq(r.x, 0.0), "x = {}", r.x);
        assert!(approx_eq(r.y, 0.0));
        assert!(approx_eq(r.z, -1.0), "z = {}", r.z);
    }

    #[test]
    fn test_mul_composes_yaws() {
        let a = Rotation::from_yaw_degrees(30.0).quat;
        let b = Rotation::from_yaw_degrees(60.0).quat;
        let c = quat_mul(a, b);
        let expected = Rotation::from_yaw_degrees(90.0).quat;
        assert!(approx_eq(c.y, expected.y));
        assert!(approx_eq(c.w, expected.w));
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = Rotation::from_yaw_degrees(45.0).quat;
        let id = quat_mul(quat_conjugate(q), q);
        assert!(approx_eq(id.x, 0.0));
        assert!(approx_eq(id.y, 0.0));
        assert!(approx_eq(id.z, 0.0));
        assert!(approx_eq(id.w, 1.0));
    }
}
