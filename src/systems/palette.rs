//! Object palette systems and observers.
//!
//! This module wires the [`ObjectPalette`] widget into the world:
//!
//! - [`spawn_object_palette`] / [`despawn_object_palette`] – build and tear
//!   down the container and its items under a controller entity
//! - [`register_palette_observers`] / [`unregister_palette_observers`] –
//!   install the event observers once per world
//! - [`palette_swipe_system`] – scrolls the container while the pad is held
//!
//! The observers react to [`ControllerEvent`], [`ContactEvent`] and
//! [`TimerEvent`] and look up the palette on the entity the event is
//! addressed to. Events for entities without a palette are ignored.
//!
//! # Visibility
//!
//! Touching the pad fades every item in, first item first. Releasing it
//! schedules a single hide check after `hide_delay`; the check fades the
//! items out (last item first) only if the pad is still untouched when it
//! fires. Touching again cancels the pending check.
//!
//! # Placement
//!
//! A trigger click hides the palette and clones the selected item under the
//! controller with its own copy of the placement material, then grows it on a
//! repeating task. Releasing the trigger leaves the clone in the scene at its
//! current world transform.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::{debug, info, trace, warn};
use raylib::math::Vector2;
use raylib::prelude::Color;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::TrackedController;
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::palette::{
    ObjectPalette, PaletteContainer, PaletteItem, PaletteSettings, PlacedItem, conceal_delay,
    damp_swipe, reveal_delay,
};
use crate::components::position::LocalPosition;
use crate::components::renderer::Renderer;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::timer::{TaskHandle, TaskSignal, TimerMode};
use crate::components::tween::TweenAlpha;
use crate::events::contact::{ContactEvent, ContactPhase};
use crate::events::controller::{ControllerAction, ControllerEvent};
use crate::events::timer::TimerEvent;
use crate::resources::materials::{Material, Materials};
use crate::resources::prototypes::Prototype;
use crate::systems::time::{cancel_task, schedule_task};

/// Observer entities installed by [`register_palette_observers`].
#[derive(Resource, Debug, Clone)]
pub struct PaletteObservers {
    pub entities: Vec<Entity>,
}

/// Build a palette under `widget`.
///
/// Spawns the container as a child of the widget and one fully transparent
/// item per prototype at local `(spacing * i, 0, depth)` inside it. Every
/// item gets its own material. `placement_material` is stored once and
/// copied for each placed object.
///
/// Fails when `prototypes` is empty, `widget` does not exist or already
/// carries a palette.
pub fn spawn_object_palette(
    world: &mut World,
    widget: Entity,
    prototypes: &[Prototype],
    placement_material: Material,
    settings: PaletteSettings,
) -> Result<(), String> {
    if prototypes.is_empty() {
        return Err("cannot build a palette without prototypes".to_string());
    }
    let Ok(widget_ref) = world.get_entity(widget) else {
        return Err(format!("palette widget {:?} does not exist", widget));
    };
    if widget_ref.contains::<ObjectPalette>() {
        return Err(format!("entity {:?} already has a palette", widget));
    }

    let settings = settings.sanitized();
    world.init_resource::<Materials>();
    let placement_material = world.resource_mut::<Materials>().add(placement_material);

    let container = world
        .spawn((
            PaletteContainer { palette: widget },
            LocalPosition::default(),
            Rotation::identity(),
            Scale::default(),
            GlobalTransform3D::default(),
            ChildOf(widget),
        ))
        .id();

    let mut items = Vec::with_capacity(prototypes.len());
    for (index, prototype) in prototypes.iter().enumerate() {
        let mut material = Material::new(prototype.base_color());
        material.set_alpha(0.0);
        let handle = world.resource_mut::<Materials>().add(material);
        let bounds = prototype.shape.bounds();
        let item = world
            .spawn((
                PaletteItem { index },
                prototype.shape,
                BoxCollider::new(bounds.x, bounds.y, bounds.z),
                Renderer::new(handle),
                LocalPosition::new(
                    settings.item_spacing * index as f32,
                    0.0,
                    settings.item_depth,
                ),
                Rotation::identity(),
                Scale::default(),
                GlobalTransform3D::default(),
                ChildOf(container),
            ))
            .id();
        items.push(item);
    }

    world.entity_mut(widget).insert(ObjectPalette {
        prototypes: prototypes.to_vec(),
        items,
        container,
        placement_material,
        settings,
        last_pad: Vector2 { x: 0.0, y: 0.0 },
        hide_task: None,
        growth_task: None,
        current_item: None,
        hovered: None,
        grabbed: None,
    });

    info!(
        "Palette on {:?} with {} prototypes",
        widget,
        prototypes.len()
    );
    Ok(())
}

/// Tear down the palette on `widget`.
///
/// Cancels its tasks and despawns the container with every item, freeing
/// the item materials and the placement material. A placed or grabbed object
/// is released into the scene where it stands.
pub fn despawn_object_palette(world: &mut World, widget: Entity) -> Result<(), String> {
    let palette = world
        .get_entity_mut(widget)
        .ok()
        .and_then(|mut entity| entity.take::<ObjectPalette>())
        .ok_or_else(|| format!("entity {:?} has no palette", widget))?;

    for task in [palette.hide_task, palette.growth_task].into_iter().flatten() {
        if let Ok(entity) = world.get_entity_mut(task.entity()) {
            entity.despawn();
        }
    }
    for loose in [palette.current_item, palette.grabbed].into_iter().flatten() {
        detach_in_world(world, loose);
    }
    let mut freed: Vec<_> = palette
        .items
        .iter()
        .filter_map(|item| world.get::<Renderer>(*item).map(|r| r.material))
        .collect();
    freed.push(palette.placement_material);
    if let Ok(container) = world.get_entity_mut(palette.container) {
        container.despawn();
    }
    if let Some(mut materials) = world.get_resource_mut::<Materials>() {
        for handle in freed {
            materials.remove(handle);
        }
    }

    info!("Palette on {:?} removed", widget);
    Ok(())
}

fn detach_in_world(world: &mut World, entity: Entity) {
    let Some(gt) = world.get::<GlobalTransform3D>(entity).copied() else {
        return;
    };
    if let Ok(mut e) = world.get_entity_mut(entity) {
        e.insert((
            LocalPosition::from_vec(gt.position),
            Rotation { quat: gt.rotation },
            Scale { scale: gt.scale },
        ));
        e.remove::<ChildOf>();
    }
}

/// Spawn the palette observers. Calling it again is a no-op.
pub fn register_palette_observers(world: &mut World) {
    if world.contains_resource::<PaletteObservers>() {
        return;
    }
    let entities = vec![
        world.spawn(Observer::new(palette_pad_observer)).id(),
        world.spawn(Observer::new(palette_trigger_observer)).id(),
        world.spawn(Observer::new(palette_grip_observer)).id(),
        world.spawn(Observer::new(palette_contact_observer)).id(),
        world.spawn(Observer::new(palette_timer_observer)).id(),
    ];
    world.insert_resource(PaletteObservers { entities });
    world.flush();
}

/// Despawn the observers installed by [`register_palette_observers`].
pub fn unregister_palette_observers(world: &mut World) {
    let Some(observers) = world.remove_resource::<PaletteObservers>() else {
        return;
    };
    for entity in observers.entities {
        if let Ok(observer) = world.get_entity_mut(entity) {
            observer.despawn();
        }
    }
}

/// Scroll every touched palette by the pad movement since the last frame.
///
/// Past either end of the item row the movement is damped, see
/// [`damp_swipe`].
pub fn palette_swipe_system(
    mut palettes: Query<(Entity, &mut ObjectPalette, &TrackedController)>,
    mut containers: Query<&mut LocalPosition, With<PaletteContainer>>,
) {
    for (entity, mut palette, controller) in palettes.iter_mut() {
        if !controller.pad_touched {
            continue;
        }
        let Ok(mut container) = containers.get_mut(palette.container) else {
            continue;
        };
        let settings = palette.settings;
        let raw = (controller.pad_axis.x - palette.last_pad.x) * settings.swipe_sensitivity;
        let dx = damp_swipe(
            raw,
            container.pos.x,
            settings.item_spacing,
            palette.item_count(),
        );
        if dx != 0.0 {
            container.pos.x += dx;
        }
        palette.last_pad = controller.pad_axis;
        trace!("palette {:?} offset {}", entity, container.pos.x);
    }
}

fn show_items(commands: &mut Commands, palette: &ObjectPalette) {
    let s = palette.settings;
    for (index, item) in palette.items.iter().enumerate() {
        commands.entity(*item).try_insert(
            TweenAlpha::new(1.0, s.fade_duration).with_delay(reveal_delay(index, s.fade_stagger)),
        );
    }
}

fn hide_items(commands: &mut Commands, palette: &ObjectPalette) {
    let s = palette.settings;
    let count = palette.item_count();
    for (index, item) in palette.items.iter().enumerate() {
        commands.entity(*item).try_insert(
            TweenAlpha::new(0.0, s.fade_duration)
                .with_delay(conceal_delay(index, count, s.fade_stagger)),
        );
    }
}

/// Parent `entity` under `parent` without moving it in the world.
fn reparent_keep_world(
    commands: &mut Commands,
    entity: Entity,
    parent: Entity,
    globals: &Query<&GlobalTransform3D>,
) -> bool {
    let (Ok(gt), Ok(parent_gt)) = (globals.get(entity), globals.get(parent)) else {
        return false;
    };
    let (pos, quat, scale) = gt.relative_to(parent_gt);
    commands.entity(entity).try_insert((
        LocalPosition::from_vec(pos),
        Rotation { quat },
        Scale { scale },
        ChildOf(parent),
    ));
    true
}

/// Remove the parent of `entity` without moving it in the world.
fn detach_keep_world(commands: &mut Commands, entity: Entity, globals: &Query<&GlobalTransform3D>) {
    let Ok(gt) = globals.get(entity) else {
        return;
    };
    commands
        .entity(entity)
        .try_insert((
            LocalPosition::from_vec(gt.position),
            Rotation { quat: gt.rotation },
            Scale { scale: gt.scale },
        ))
        .try_remove::<ChildOf>();
}

fn release_placement(
    commands: &mut Commands,
    palette: &mut ObjectPalette,
    globals: &Query<&GlobalTransform3D>,
) {
    if let Some(task) = palette.growth_task.take() {
        cancel_task(commands, task);
    }
    if let Some(item) = palette.current_item.take() {
        detach_keep_world(commands, item, globals);
        debug!("placed {:?} released", item);
    }
}

/// Show the palette on pad touch, schedule the hide check on release.
pub fn palette_pad_observer(
    trigger: On<ControllerEvent>,
    mut palettes: Query<&mut ObjectPalette>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut palette) = palettes.get_mut(event.controller) else {
        return;
    };
    match event.action {
        ControllerAction::PadTouched => {
            palette.last_pad = event.pad;
            if let Some(task) = palette.hide_task.take() {
                cancel_task(&mut commands, task);
            }
            show_items(&mut commands, &palette);
            debug!("palette {:?} shown", event.controller);
        }
        ControllerAction::PadUntouched => {
            if let Some(task) = palette.hide_task.take() {
                cancel_task(&mut commands, task);
            }
            let delay = palette.settings.hide_delay;
            palette.hide_task = Some(schedule_task(
                &mut commands,
                event.controller,
                delay,
                TimerMode::Once,
                TaskSignal::HideCheck,
            ));
            debug!("palette {:?} hide check in {}s", event.controller, delay);
        }
        _ => {}
    }
}

/// Place the selected prototype on trigger click, release it on unclick.
#[allow(clippy::too_many_arguments)]
pub fn palette_trigger_observer(
    trigger: On<ControllerEvent>,
    mut palettes: Query<&mut ObjectPalette>,
    containers: Query<&LocalPosition, With<PaletteContainer>>,
    items: Query<(&Shape, &BoxCollider), With<PaletteItem>>,
    globals: Query<&GlobalTransform3D>,
    mut materials: ResMut<Materials>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut palette) = palettes.get_mut(event.controller) else {
        return;
    };
    match event.action {
        ControllerAction::TriggerClicked => {
            hide_items(&mut commands, &palette);
            release_placement(&mut commands, &mut palette, &globals);

            let offset = containers
                .get(palette.container)
                .map(|p| p.pos.x)
                .unwrap_or(0.0);
            let index = palette.selected_index(offset);
            let Some(&item) = palette.items.get(index) else {
                return;
            };
            let (Ok((shape, collider)), Ok(item_gt), Ok(widget_gt)) = (
                items.get(item),
                globals.get(item),
                globals.get(event.controller),
            ) else {
                warn!("palette item {:?} is not placeable", item);
                return;
            };
            let Some(material) = materials.duplicate(palette.placement_material) else {
                warn!("placement material missing for {:?}", event.controller);
                return;
            };

            // Same world position and orientation as the item, but owned by
            // the controller so it follows the hand while growing.
            let (pos, quat, scale) = item_gt.relative_to(widget_gt);
            let placed = commands
                .spawn((
                    PlacedItem { prototype: index },
                    *shape,
                    *collider,
                    Renderer::new(material),
                    LocalPosition::from_vec(pos),
                    Rotation { quat },
                    Scale { scale },
                    *item_gt,
                    ChildOf(event.controller),
                ))
                .id();
            palette.current_item = Some(placed);
            palette.growth_task = Some(schedule_task(
                &mut commands,
                event.controller,
                palette.settings.growth_interval,
                TimerMode::Repeat,
                TaskSignal::GrowPlacement,
            ));
            if let Some(prototype) = palette.prototypes.get(index) {
                debug!(
                    "placing {} ({:?}) from palette {:?}",
                    prototype.name, placed, event.controller
                );
            }
        }
        ControllerAction::TriggerUnclicked => {
            release_placement(&mut commands, &mut palette, &globals);
        }
        _ => {}
    }
}

/// Grab the hovered object on grip, drop it on release.
pub fn palette_grip_observer(
    trigger: On<ControllerEvent>,
    mut palettes: Query<&mut ObjectPalette>,
    globals: Query<&GlobalTransform3D>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut palette) = palettes.get_mut(event.controller) else {
        return;
    };
    match event.action {
        ControllerAction::Gripped => {
            let Some(hovered) = palette.hovered else {
                return;
            };
            if reparent_keep_world(&mut commands, hovered, event.controller, &globals) {
                palette.grabbed = Some(hovered);
                debug!("grabbed {:?}", hovered);
            }
        }
        ControllerAction::Ungripped => {
            if let Some(grabbed) = palette.grabbed.take() {
                detach_keep_world(&mut commands, grabbed, &globals);
                debug!("dropped {:?}", grabbed);
            }
        }
        _ => {}
    }
}

/// Highlight objects touching the controller sensor.
pub fn palette_contact_observer(
    trigger: On<ContactEvent>,
    mut palettes: Query<(&mut ObjectPalette, &TrackedController)>,
    mut renderers: Query<&mut Renderer>,
    mut materials: ResMut<Materials>,
) {
    let event = trigger.event();
    let Ok((mut palette, controller)) = palettes.get_mut(event.sensor) else {
        return;
    };
    match event.phase {
        ContactPhase::Enter => {
            let Ok(renderer) = renderers.get(event.other) else {
                return;
            };
            palette.hovered = Some(event.other);
            let factor = palette.settings.highlight_factor;
            if let Some(material) = materials.get_mut(renderer.material) {
                material.emission_enabled = true;
                material.emission = material.scaled_color(factor);
            }
            debug!("hovering {:?}", event.other);
        }
        ContactPhase::Exit => {
            if palette.hovered.is_none() || controller.gripped {
                return;
            }
            // The exiting object is de-highlighted, and `hovered` is only
            // cleared when it names that object. Another object may already
            // have entered and taken over the hover.
            if let Ok(previous) = renderers.get(event.other).map(|r| r.material) {
                // Copy first: the current material may be shared with other
                // objects.
                let shared = renderers
                    .iter()
                    .filter(|r| r.material == previous)
                    .nth(1)
                    .is_some();
                if let Some(copy) = materials.duplicate(previous) {
                    if let Some(material) = materials.get_mut(copy) {
                        material.emission = Color::new(0, 0, 0, 0);
                    }
                    if let Ok(mut renderer) = renderers.get_mut(event.other) {
                        renderer.material = copy;
                    }
                    if !shared && previous != palette.placement_material {
                        materials.remove(previous);
                    }
                }
            }
            if palette.hovered == Some(event.other) {
                palette.hovered = None;
            }
            debug!("no longer hovering {:?}", event.other);
        }
    }
}

/// Run the palette's scheduled continuations.
pub fn palette_timer_observer(
    trigger: On<TimerEvent>,
    mut palettes: Query<(&mut ObjectPalette, &TrackedController)>,
    mut scales: Query<&mut Scale, With<PlacedItem>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((mut palette, controller)) = palettes.get_mut(event.owner) else {
        return;
    };
    let task = TaskHandle(event.timer);
    match event.signal {
        TaskSignal::HideCheck => {
            if palette.hide_task != Some(task) {
                return;
            }
            palette.hide_task = None;
            if controller.pad_touched {
                return;
            }
            hide_items(&mut commands, &palette);
            debug!("palette {:?} hidden", event.owner);
        }
        TaskSignal::GrowPlacement => {
            if palette.growth_task != Some(task) {
                return;
            }
            let step = palette.settings.growth_step;
            let max = palette.settings.max_placement_scale;
            let grown = palette
                .current_item
                .and_then(|item| scales.get_mut(item).ok())
                .map(|mut scale| {
                    let amount = match max {
                        Some(max) => step.min(max - scale.scale.x),
                        None => step,
                    };
                    if amount <= f32::EPSILON {
                        return false;
                    }
                    scale.grow(amount);
                    true
                })
                .unwrap_or(false);
            if !grown {
                if let Some(task) = palette.growth_task.take() {
                    cancel_task(&mut commands, task);
                }
            }
        }
    }
}
