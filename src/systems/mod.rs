//! Palette systems.
//!
//! This module groups all ECS systems and observers that advance input,
//! the palette widget, animation and rendering.
//!
//! Submodules overview
//! - [`contact`] – sensor overlap checks and enter/exit event emission
//! - [`controller`] – drain the controller bridge and trigger input events
//! - [`input`] – desktop mouse/keyboard emulation of a controller
//! - [`palette`] – palette spawning, swiping and event observers
//! - [`propagate_transforms`] – compute world transforms down the hierarchy
//! - [`render`] – draw the scene and HUD using Raylib
//! - [`time`] – update simulation time, run and cancel scheduled tasks
//! - [`tween`] – fade material alpha over time

pub mod contact;
pub mod controller;
pub mod input;
pub mod palette;
pub mod propagate_transforms;
pub mod render;
pub mod time;
pub mod tween;
