//! Material store.
//!
//! Materials live in the [`Materials`] resource and are addressed by
//! [`MaterialHandle`]. A handle referenced by several
//! [`Renderer`](crate::components::renderer::Renderer)s is a shared asset:
//! mutating it changes every one of them. [`Materials::duplicate`] makes an
//! independent copy, which is how per-object changes are done without
//! touching the shared original.
//!
//! Freed slots go on a free list and their indices are handed out again by
//! [`Materials::add`], so a freed handle must not be used afterwards.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Index of a material inside [`Materials`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub usize);

/// Surface description used by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// Base color; its alpha drives transparency.
    pub color: Color,
    /// Whether emission is taken into account when drawing.
    pub emission_enabled: bool,
    /// Emissive color added on top of the base color.
    pub emission: Color,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            emission_enabled: false,
            emission: Color::new(0, 0, 0, 0),
        }
    }

    /// Alpha of the base color in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Base color with every channel multiplied by `factor`.
    pub fn scaled_color(&self, factor: f32) -> Color {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0).round() as u8;
        Color::new(
            scale(self.color.r),
            scale(self.color.g),
            scale(self.color.b),
            scale(self.color.a),
        )
    }

    /// Color to draw with: base color plus emission when enabled.
    pub fn display_color(&self) -> Color {
        if !self.emission_enabled {
            return self.color;
        }
        Color::new(
            self.color.r.saturating_add(self.emission.r),
            self.color.g.saturating_add(self.emission.g),
            self.color.b.saturating_add(self.emission.b),
            self.color.a,
        )
    }
}

/// Arena of every material in the scene.
#[derive(Resource, Default, Debug)]
pub struct Materials {
    slots: Vec<Option<Material>>,
    free: Vec<usize>,
}

impl Materials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, material: Material) -> MaterialHandle {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(material);
            return MaterialHandle(index);
        }
        self.slots.push(Some(material));
        MaterialHandle(self.slots.len() - 1)
    }

    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Free the slot behind `handle`. Returns the material that was stored.
    pub fn remove(&mut self, handle: MaterialHandle) -> Option<Material> {
        let material = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        Some(material)
    }

    /// Copy the material behind `handle` into a new slot.
    pub fn duplicate(&mut self, handle: MaterialHandle) -> Option<MaterialHandle> {
        let copy = *self.get(handle)?;
        Some(self.add(copy))
    }

    /// Number of live materials.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
