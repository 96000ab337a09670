//! Prototype catalog.
//!
//! Prototypes are the templates the palette instantiates: a shape and a
//! base color each. A catalog also carries the color of the placement
//! material given to objects placed from the palette.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "placement_color": [240, 240, 255, 255],
//!   "prototypes": [
//!     { "name": "red cube", "shape": { "kind": "cube", "size": [0.08, 0.08, 0.08] }, "color": [230, 41, 55, 255] },
//!     { "name": "ball", "shape": { "kind": "sphere", "radius": 0.04 }, "color": [0, 121, 241, 255] }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::components::shape::Shape;

/// A template object definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub shape: Shape,
    /// RGBA base color.
    pub color: [u8; 4],
}

impl Prototype {
    pub fn new(name: impl Into<String>, shape: Shape, color: [u8; 4]) -> Self {
        Self {
            name: name.into(),
            shape,
            color,
        }
    }

    pub fn base_color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::new(r, g, b, a)
    }
}

fn default_placement_color() -> [u8; 4] {
    [240, 240, 255, 255]
}

/// Set of prototypes offered by a palette.
#[derive(Resource, Serialize, Deserialize, Debug, Clone)]
pub struct PrototypeCatalog {
    #[serde(default = "default_placement_color")]
    pub placement_color: [u8; 4],
    pub prototypes: Vec<Prototype>,
}

impl PrototypeCatalog {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog: PrototypeCatalog = serde_json::from_str(json)?;
        if catalog.prototypes.is_empty() {
            return Err("prototype catalog has no prototypes".into());
        }
        Ok(catalog)
    }

    /// Catalog used when no file is available.
    pub fn builtin() -> Self {
        let cube = |s: f32| Shape::Cube { size: [s, s, s] };
        Self {
            placement_color: default_placement_color(),
            prototypes: vec![
                Prototype::new("red cube", cube(0.08), [230, 41, 55, 255]),
                Prototype::new("blue ball", Shape::Sphere { radius: 0.045 }, [0, 121, 241, 255]),
                Prototype::new("green slab", Shape::Cube { size: [0.1, 0.03, 0.08] }, [0, 228, 48, 255]),
                Prototype::new("gold ball", Shape::Sphere { radius: 0.035 }, [255, 203, 0, 255]),
                Prototype::new("purple pillar", Shape::Cube { size: [0.04, 0.1, 0.04] }, [200, 122, 255, 255]),
            ],
        }
    }

    pub fn placement_color(&self) -> Color {
        let [r, g, b, a] = self.placement_color;
        Color::new(r, g, b, a)
    }
}
