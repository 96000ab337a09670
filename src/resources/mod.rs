//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera3d` – shared 3D camera used by the demo renderer
//! - `contacts` – sensor contacts seen during the last frame
//! - `controllerbridge` – channel from controller drivers into the world
//! - `debugmode` – presence toggles the debug overlays
//! - `materials` – material arena addressed by handles
//! - `paletteconfig` – INI-backed palette tunables and window settings
//! - `prototypes` – JSON prototype catalog
//! - `worldtime` – simulation time and delta
pub mod camera3d;
pub mod contacts;
pub mod controllerbridge;
pub mod debugmode;
pub mod materials;
pub mod paletteconfig;
pub mod prototypes;
pub mod worldtime;
