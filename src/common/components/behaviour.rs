use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// High-level behaviour an actor is currently running
///
/// Hosts swap behaviour trees on `Changed<Behaviour>`.
#[derive(Clone, Component, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Behaviour {
    #[default] Unset,
    Controlled,
    Wander,
    AttackInProximity,
}

/// Marks a character driven by a connected player
/// Only these are candidates for proximity checks
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct PlayerControlled;
