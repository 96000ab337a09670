use bevy_ecs::prelude::Component;
use raylib::math::Vector3;

/// Axis-aligned box collider centered on the entity's world position.
///
/// The box is scaled by the entity's world scale and ignores its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector3,
    pub offset: Vector3,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vector3 {
                x: width,
                y: height,
                z: depth,
            },
            offset: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        }
    }

    /// Modify BoxCollider with given offset
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given world position and scale.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector3, scale: Vector3) -> (Vector3, Vector3) {
        let center = Vector3 {
            x: position.x + self.offset.x * scale.x,
            y: position.y + self.offset.y * scale.y,
            z: position.z + self.offset.z * scale.z,
        };
        let half = Vector3 {
            x: (self.size.x * scale.x * 0.5).abs(),
            y: (self.size.y * scale.y * 0.5).abs(),
            z: (self.size.z * scale.z * 0.5).abs(),
        };
        let min = Vector3 {
            x: center.x - half.x,
            y: center.y - half.y,
            z: center.z - half.z,
        };
        let max = Vector3 {
            x: center.x + half.x,
            y: center.y + half.y,
            z: center.z + half.z,
        };
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider.
    pub fn overlaps(
        &self,
        position: Vector3,
        scale: Vector3,
        other: &Self,
        other_position: Vector3,
        other_scale: Vector3,
    ) -> bool {
        let (min_a, max_a) = self.aabb(position, scale);
        let (min_b, max_b) = other.aabb(other_position, other_scale);
        min_a.x < max_b.x
            && max_a.x > min_b.x
            && min_a.y < max_b.y
            && max_a.y > min_b.y
            && min_a.z < max_b.z
            && max_a.z > min_b.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = BoxCollider::new(1.0, 1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0, 1.0);
        assert!(a.overlaps(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), &b, v(0.5, 0.5, 0.5), v(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(1.0, 1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0, 1.0);
        assert!(!a.overlaps(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), &b, v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_separated_on_z_only() {
        let a = BoxCollider::new(1.0, 1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0, 1.0);
        assert!(!a.overlaps(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), &b, v(0.0, 0.0, 3.0), v(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_scale_grows_box() {
        let a = BoxCollider::new(1.0, 1.0, 1.0);
        let b = BoxCollider::new(1.0, 1.0, 1.0);
        let far = v(1.5, 0.0, 0.0);
        assert!(!a.overlaps(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), &b, far, v(1.0, 1.0, 1.0)));
        assert!(a.overlaps(v(0.0, 0.0, 0.0), v(3.0, 3.0, 3.0), &b, far, v(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_offset_moves_box() {
        let a = BoxCollider::new(1.0, 1.0, 1.0).with_offset(v(2.0, 0.0, 0.0));
        let (min, max) = a.aabb(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        assert!((min.x - 1.5).abs() < 1e-6);
        assert!((max.x - 2.5).abs() < 1e-6);
    }
}
