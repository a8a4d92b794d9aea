use bevy::prelude::*;

/// Follow intent - the actor should move toward `target`
///
/// The record's existence is what matters to proximity checks: they fill in
/// `target` but never create the component. Removing it deletes the intent.
#[derive(Clone, Component, Copy, Debug, Default, Eq, PartialEq)]
pub struct FollowIntent {
    pub target: Option<Entity>,
}

impl FollowIntent {
    pub fn new(target: Entity) -> Self {
        Self { target: Some(target) }
    }
}
