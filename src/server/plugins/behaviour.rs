use bevy::prelude::*;

use crate::server::{
    systems::behaviour::{check_proximity, update_behaviour},
    UpdateBehaviour,
};

/// Plugin that manages server-only behaviour systems
///
/// This plugin provides:
/// - CheckProximityAttackStop: keeps NPCs following players in range, fails when none are
/// - UpdateBehaviour handling: NPCs that lose their player fall back to wandering
///
/// Requires bevy_behave's BehavePlugin for the behaviour trees themselves.
pub struct BehaviourPlugin;

impl Plugin for BehaviourPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UpdateBehaviour>();
        app.add_systems(
            FixedUpdate,
            (
                check_proximity::check_proximity_attack_stop,
                update_behaviour::on_update_behaviour,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::components::behaviour::Behaviour;

    #[test]
    fn test_plugin_handles_update_behaviour_in_fixed_update() {
        let mut app = App::new();
        app.add_plugins(BehaviourPlugin);
        let npc = app.world_mut().spawn(Behaviour::AttackInProximity).id();

        app.world_mut().send_event(UpdateBehaviour { ent: npc });
        app.world_mut().run_schedule(FixedUpdate);

        assert_eq!(app.world().get::<Behaviour>(npc), Some(&Behaviour::Wander));
    }
}
