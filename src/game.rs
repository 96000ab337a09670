//! Scene setup and the per-frame schedule.
//!
//! [`palette_update_schedule`] chains the systems that make the palette
//! work, in the order they must run each frame. [`setup_palette_scene`]
//! builds the demo scene: resources, observers, one tracked controller
//! carrying a palette and a few props to hover and grab.
//!
//! Neither function touches raylib, so tests drive the same scene the demo
//! renders.

use bevy_ecs::prelude::*;
use log::info;
use raylib::math::Vector3;
use raylib::prelude::Color;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::{TouchSensor, TrackedController};
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::position::LocalPosition;
use crate::components::renderer::Renderer;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::resources::contacts::ActiveContacts;
use crate::resources::controllerbridge::ControllerBridge;
use crate::resources::materials::{Material, Materials};
use crate::resources::paletteconfig::PaletteConfig;
use crate::resources::prototypes::PrototypeCatalog;
use crate::resources::worldtime::WorldTime;
use crate::systems::contact::contact_detection_system;
use crate::systems::controller::poll_controller_input;
use crate::systems::palette::{
    palette_swipe_system, register_palette_observers, spawn_object_palette,
};
use crate::systems::propagate_transforms::propagate_transforms;
use crate::systems::time::update_timers;
use crate::systems::tween::tween_alpha_system;

/// Edge length of the controller's touch sensor.
const SENSOR_SIZE: f32 = 0.06;

/// Systems run every frame, in order.
///
/// The world clock must be advanced with
/// [`update_world_time`](crate::systems::time::update_world_time) before
/// each run.
pub fn palette_update_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            poll_controller_input,
            palette_swipe_system,
            update_timers,
            tween_alpha_system,
            propagate_transforms,
            contact_detection_system,
        )
            .chain(),
    );
    schedule
}

/// Insert the resources the palette systems expect, keeping any that
/// already exist.
pub fn init_palette_resources(world: &mut World) {
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default());
    }
    world.init_resource::<Materials>();
    world.init_resource::<ActiveContacts>();
    world.init_resource::<ControllerBridge>();
}

/// Spawn a tracked controller with its touch sensor at `position`.
pub fn spawn_controller(world: &mut World, device: u32, position: Vector3) -> Entity {
    world
        .spawn((
            TrackedController::new(device),
            TouchSensor,
            BoxCollider::new(SENSOR_SIZE, SENSOR_SIZE, SENSOR_SIZE),
            LocalPosition::from_vec(position),
            Rotation::identity(),
            Scale::default(),
            GlobalTransform3D {
                position,
                ..Default::default()
            },
        ))
        .id()
}

/// Spawn scene props sharing one material.
pub fn spawn_props(world: &mut World, positions: &[Vector3], color: Color) -> Vec<Entity> {
    let material = world.resource_mut::<Materials>().add(Material::new(color));
    let size = 0.08;
    positions
        .iter()
        .map(|&position| {
            world
                .spawn((
                    Shape::Cube {
                        size: [size, size, size],
                    },
                    BoxCollider::new(size, size, size),
                    Renderer::new(material),
                    LocalPosition::from_vec(position),
                    Rotation::identity(),
                    Scale::default(),
                    GlobalTransform3D {
                        position,
                        ..Default::default()
                    },
                ))
                .id()
        })
        .collect()
}

/// Build the demo scene and return the controller entity.
pub fn setup_palette_scene(
    world: &mut World,
    config: &PaletteConfig,
    catalog: &PrototypeCatalog,
    device: u32,
) -> Result<Entity, String> {
    init_palette_resources(world);
    register_palette_observers(world);

    let controller = spawn_controller(world, device, Vector3::new(0.0, 0.1, 0.0));
    spawn_object_palette(
        world,
        controller,
        &catalog.prototypes,
        Material::new(catalog.placement_color()),
        config.settings(),
    )?;

    let props = spawn_props(
        world,
        &[
            Vector3::new(-0.25, 0.04, -0.2),
            Vector3::new(0.0, 0.04, -0.25),
            Vector3::new(0.25, 0.04, -0.2),
        ],
        Color::new(130, 130, 130, 255),
    );
    world.flush();

    info!(
        "Scene ready: controller {:?}, {} props",
        controller,
        props.len()
    );
    Ok(controller)
}
