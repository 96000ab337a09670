//! Debug overlay toggle.
//!
//! While this resource exists the demo draws collider wireframes and the
//! palette state readout. The desktop input system inserts or removes it
//! when F11 is pressed.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, overlays are drawn.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
