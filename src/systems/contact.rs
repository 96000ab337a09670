//! Sensor contact detection.
//!
//! [`contact_detection_system`] tests every [`TouchSensor`] collider against
//! the scene colliders using world transforms and triggers a
//! [`ContactEvent`] for each pair that started or stopped overlapping since
//! the previous frame. Palette items are not scene objects and never report
//! contacts.
//!
//! Pairs whose entities were despawned are dropped without an exit event.

use bevy_ecs::prelude::*;
use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::TouchSensor;
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::palette::PaletteItem;
use crate::events::contact::{ContactEvent, ContactPhase};
use crate::resources::contacts::ActiveContacts;

/// Detect sensor overlaps and emit enter/exit transitions.
pub fn contact_detection_system(
    sensors: Query<(Entity, &BoxCollider, &GlobalTransform3D), With<TouchSensor>>,
    others: Query<
        (Entity, &BoxCollider, &GlobalTransform3D),
        (Without<TouchSensor>, Without<PaletteItem>),
    >,
    mut active: ResMut<ActiveContacts>,
    mut commands: Commands,
) {
    let mut current: SmallVec<[(Entity, Entity); 8]> = SmallVec::new();
    for (sensor, sensor_collider, sensor_gt) in sensors.iter() {
        for (other, collider, gt) in others.iter() {
            if sensor_collider.overlaps(
                sensor_gt.position,
                sensor_gt.scale,
                collider,
                gt.position,
                gt.scale,
            ) {
                current.push((sensor, other));
            }
        }
    }

    let current_set: FxHashSet<(Entity, Entity)> = current.iter().copied().collect();

    let ended: SmallVec<[(Entity, Entity); 4]> = active
        .pairs
        .iter()
        .filter(|pair| !current_set.contains(*pair))
        .copied()
        .collect();
    for (sensor, other) in ended {
        active.pairs.remove(&(sensor, other));
        if !sensors.contains(sensor) || !others.contains(other) {
            continue;
        }
        trace!("contact exit {:?} <- {:?}", sensor, other);
        commands.trigger(ContactEvent {
            sensor,
            other,
            phase: ContactPhase::Exit,
        });
    }

    for (sensor, other) in current {
        if active.pairs.insert((sensor, other)) {
            trace!("contact enter {:?} -> {:?}", sensor, other);
            commands.trigger(ContactEvent {
                sensor,
                other,
                phase: ContactPhase::Enter,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::Observer;
    use raylib::math::Vector3;

    #[derive(Resource, Default)]
    struct Seen(Vec<(Entity, ContactPhase)>);

    fn make_world() -> World {
        let mut world = World::new();
        world.init_resource::<ActiveContacts>();
        world.init_resource::<Seen>();
        world.spawn(Observer::new(
            |trigger: On<ContactEvent>, mut seen: ResMut<Seen>| {
                let ev = trigger.event();
                seen.0.push((ev.other, ev.phase));
            },
        ));
        world.flush();
        world
    }

    fn at(x: f32) -> GlobalTransform3D {
        GlobalTransform3D {
            position: Vector3 { x, y: 0.0, z: 0.0 },
            ..Default::default()
        }
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(contact_detection_system);
        schedule.run(world);
    }

    #[test]
    fn test_enter_and_exit_reported_once() {
        let mut world = make_world();
        world.spawn((TouchSensor, BoxCollider::new(0.1, 0.1, 0.1), at(0.0)));
        let cube = world.spawn((BoxCollider::new(0.1, 0.1, 0.1), at(0.05))).id();

        tick(&mut world);
        tick(&mut world);
        assert_eq!(world.resource::<Seen>().0, vec![(cube, ContactPhase::Enter)]);

        world.get_mut::<GlobalTransform3D>(cube).unwrap().position.x = 1.0;
        tick(&mut world);
        tick(&mut world);
        assert_eq!(
            world.resource::<Seen>().0,
            vec![(cube, ContactPhase::Enter), (cube, ContactPhase::Exit)]
        );
        assert!(world.resource::<ActiveContacts>().is_empty());
    }

    #[test]
    fn test_palette_items_are_ignored() {
        let mut world = make_world();
        world.spawn((TouchSensor, BoxCollider::new(0.1, 0.1, 0.1), at(0.0)));
        world.spawn((PaletteItem { index: 0 }, BoxCollider::new(0.1, 0.1, 0.1), at(0.0)));
        tick(&mut world);
        assert!(world.resource::<Seen>().0.is_empty());
    }

    #[test]
    fn test_despawned_partner_dropped_silently() {
        let mut world = make_world();
        world.spawn((TouchSensor, BoxCollider::new(0.1, 0.1, 0.1), at(0.0)));
        let cube = world.spawn((BoxCollider::new(0.1, 0.1, 0.1), at(0.0))).id();
        tick(&mut world);
        world.despawn(cube);
        tick(&mut world);
        assert_eq!(world.resource::<Seen>().0.len(), 1);
        assert!(world.resource::<ActiveContacts>().is_empty());
    }
}
