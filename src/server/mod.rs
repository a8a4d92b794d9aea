pub mod plugins;
pub mod systems;

use bevy::prelude::*;

/// Behaviour changed: the actor must re-evaluate which behaviour it runs
#[derive(Clone, Copy, Debug, Eq, Event, PartialEq)]
pub struct UpdateBehaviour {
    pub ent: Entity,
}
