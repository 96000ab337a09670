//! Sensor contacts active during the last frame.
//!
//! [`contact_detection_system`](crate::systems::contact::contact_detection_system)
//! compares the current overlaps with this set to emit enter and exit
//! transitions only once per contact.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

#[derive(Resource, Default, Debug)]
pub struct ActiveContacts {
    /// (sensor, other) pairs currently overlapping.
    pub pairs: FxHashSet<(Entity, Entity)>,
}

impl ActiveContacts {
    pub fn contains(&self, sensor: Entity, other: Entity) -> bool {
        self.pairs.contains(&(sensor, other))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
