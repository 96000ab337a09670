//! Link between a drawable entity and its material.
//!
//! Several renderers may point at the same [`MaterialHandle`]; that material
//! then behaves as a shared asset and any change to it shows on all of them.
//! See [`crate::resources::materials`].

use bevy_ecs::prelude::Component;

use crate::resources::materials::MaterialHandle;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    pub material: MaterialHandle,
}

impl Renderer {
    pub fn new(material: MaterialHandle) -> Self {
        Self { material }
    }
}
