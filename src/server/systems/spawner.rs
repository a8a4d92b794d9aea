use bevy::prelude::*;
use bevy_behave::prelude::*;

use crate::{
    common::components::{
        attack_in_proximity::AttackInProximity,
        behaviour::Behaviour,
        follow::FollowIntent,
    },
    server::systems::behaviour::check_proximity::CheckProximityAttackStop,
};

/// Components of an NPC that attacks whoever comes within `config.max_distance`
pub fn wild_animal(translation: Vec3, config: AttackInProximity) -> impl Bundle {
    (
        Name::new("wild animal"),
        Behaviour::AttackInProximity,
        config,
        FollowIntent::default(),
        Transform::from_translation(translation),
    )
}

/// Spawn a wild animal with its behaviour tree as a child
///
/// The stop check is the tree's only node: it keeps running while a player is
/// in range and restarts after each failure.
pub fn spawn_wild_animal(
    commands: &mut Commands,
    translation: Vec3,
    config: AttackInProximity,
) -> Entity {
    let tree = behave! {
        Behave::Forever => {
            Behave::spawn_named("Check proximity attack stop", CheckProximityAttackStop),
        }
    };

    commands
        .spawn(wild_animal(translation, config))
        .with_child(BehaveTree::new(tree))
        .id()
}
