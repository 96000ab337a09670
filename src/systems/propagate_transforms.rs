//! Transform propagation for parent-child entity hierarchies.
//!
//! Computes [`GlobalTransform3D`] for every positioned entity: roots (no
//! [`ChildOf`]) mirror their local components, descendants compose their
//! local values onto their parent's world transform.
//!
//! # Schedule position
//!
//! Should run **after** all systems that mutate local transforms (swiping,
//! placement growth, reparenting observers) and **before** contact detection
//! and rendering so that downstream systems see up-to-date world positions.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use raylib::math::Vector3;

use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::position::LocalPosition;
use crate::components::rotation::{Rotation, quat_identity};
use crate::components::scale::Scale;

type LocalQueryData = (
    &'static LocalPosition,
    Option<&'static Rotation>,
    Option<&'static Scale>,
    Option<&'static Children>,
);

fn unit_scale() -> Vector3 {
    Vector3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    }
}

/// Propagate transforms from root entities down through the hierarchy.
///
/// For each root entity (has [`LocalPosition`] but no [`ChildOf`]):
/// 1. Compute its [`GlobalTransform3D`] from local components.
/// 2. Recursively traverse children, composing transforms at each level.
///
/// Entities that already have a `GlobalTransform3D` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible next frame).
pub fn propagate_transforms(
    roots: Query<(Entity, LocalQueryData), Without<ChildOf>>,
    children_query: Query<LocalQueryData, With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform3D>,
    mut commands: Commands,
) {
    for (root_entity, (pos, rot, scale, children)) in roots.iter() {
        let root_gt = GlobalTransform3D {
            position: pos.pos,
            rotation: rot.map(|r| r.quat).unwrap_or_else(quat_identity),
            scale: scale.map(|s| s.scale).unwrap_or_else(unit_scale),
        };

        if let Ok(mut gt) = globals.get_mut(root_entity) {
            *gt = root_gt;
        } else {
            commands.entity(root_entity).insert(root_gt);
        }

        if let Some(children) = children {
            propagate_children(
                &root_gt,
                children,
                &children_query,
                &mut globals,
                &mut commands,
            );
        }
    }
}

fn propagate_children(
    parent_gt: &GlobalTransform3D,
    children: &Children,
    children_query: &Query<LocalQueryData, With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform3D>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok((pos, rot, scale, maybe_grandchildren)) = children_query.get(child_entity) else {
            continue;
        };

        let child_gt = parent_gt.compose(
            pos.pos,
            rot.map(|r| r.quat).unwrap_or_else(quat_identity),
            scale.map(|s| s.scale).unwrap_or_else(unit_scale),
        );

        if let Ok(mut gt) = globals.get_mut(child_entity) {
            *gt = child_gt;
        } else {
            commands.entity(child_entity).insert(child_gt);
        }

        if let Some(grandchildren) = maybe_grandchildren {
            propagate_children(&child_gt, grandchildren, children_query, globals, commands);
        }
    }
}
