//! Object palette library.
//!
//! A swipeable palette of prototype objects attached to a tracked motion
//! controller, built on `bevy_ecs`. This module exposes the components,
//! resources, events and systems for the demo binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
