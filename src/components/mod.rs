//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data such as local transforms, rendering,
//! colliders, controller state, scheduled tasks and the palette widget itself.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box collider for contact detection
//! - [`controller`] – tracked motion controller state and the touch sensor marker
//! - [`globaltransform3d`] – computed world-space transform for hierarchies
//! - [`palette`] – the palette widget, its markers and scroll arithmetic
//! - [`position`] – position relative to the parent (or the world for roots)
//! - [`renderer`] – link between a drawable entity and its material
//! - [`rotation`] – orientation quaternion and quaternion helpers
//! - [`scale`] – per-axis scale factor
//! - [`shape`] – primitive shape drawn for an entity
//! - [`timer`] – scheduled task that fires a signal for its owner
//! - [`tween`] – animated material alpha with start delay and easing

pub mod boxcollider;
pub mod controller;
pub mod globaltransform3d;
pub mod palette;
pub mod position;
pub mod renderer;
pub mod rotation;
pub mod scale;
pub mod shape;
pub mod timer;
pub mod tween;
