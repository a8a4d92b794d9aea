use bevy::{ecs::system::SystemParam, prelude::*};
use bevy_behave::prelude::*;

use crate::{
    common::components::{
        attack_in_proximity::AttackInProximity,
        behaviour::PlayerControlled,
        follow::FollowIntent,
    },
    server::{
        systems::behaviour::proximity_gate::{self, Evaluation, NoTargetReason, NodeStatus},
        UpdateBehaviour,
    },
};

/// CheckProximityAttackStop behavior node - keeps an NPC on a nearby player
///
/// - Stays running while any player is within `AttackInProximity::max_distance`,
///   pointing the NPC's FollowIntent at the first one found
/// - Fails otherwise, after clearing the nearby entity, removing the FollowIntent
///   and sending UpdateBehaviour so the NPC can pick another behaviour
/// - Players are re-queried every tick, nothing is cached between ticks
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct CheckProximityAttackStop;

/// Everything one proximity check reads from and writes back to the world
#[derive(SystemParam)]
pub struct ProximityGateParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    writer: EventWriter<'w, UpdateBehaviour>,
    q_actor: Query<'w, 's, (
        Option<&'static GlobalTransform>,
        Option<&'static mut AttackInProximity>,
        Option<&'static mut FollowIntent>,
    )>,
    q_players: Query<'w, 's, (Entity, &'static GlobalTransform), With<PlayerControlled>>,
}

impl ProximityGateParams<'_, '_> {
    /// Run one proximity check for `actor` and apply its effects
    pub fn tick(&mut self, actor: Entity) -> NodeStatus {
        // actor despawned while its tree was still ticking
        let Ok((transform, mut config, mut follow)) = self.q_actor.get_mut(actor) else {
            return NodeStatus::Failure;
        };

        let evaluation = match config.as_deref() {
            Some(config) => proximity_gate::evaluate(
                transform.map(GlobalTransform::translation),
                self.q_players.iter().map(|(ent, transform)| (ent, transform.translation())),
                config.max_distance,
                follow.is_some(),
            ),
            None => Evaluation::NoTarget(NoTargetReason::Unconfigured),
        };

        match evaluation {
            Evaluation::TargetAcquired(target) => {
                if let Some(follow) = follow.as_mut() {
                    follow.target = Some(target);
                }
                if let Some(config) = config.as_mut() {
                    config.set_nearby(target);
                }
                trace!("{actor} following {target}");
            }
            Evaluation::NoTarget(reason) => {
                if let Some(config) = config.as_mut() {
                    config.clear_nearby();
                }
                if follow.is_some() {
                    self.commands.entity(actor).remove::<FollowIntent>();
                }
                self.writer.write(UpdateBehaviour { ent: actor });
                debug!("{actor} stopped attack in proximity: {reason:?}");
            }
        }

        evaluation.status()
    }
}

pub fn check_proximity_attack_stop(
    query: Query<(&CheckProximityAttackStop, &BehaveCtx)>,
    mut gate: ProximityGateParams,
) {
    for (_, &ctx) in &query {
        // running: no trigger, the node is ticked again next frame
        if gate.tick(ctx.target_entity()) == NodeStatus::Failure {
            gate.commands.trigger(ctx.failure());
        }
    }
}
