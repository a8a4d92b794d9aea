use bevy::prelude::*;

use crate::{
    common::components::behaviour::Behaviour,
    server::UpdateBehaviour,
};

/// Drop actors out of AttackInProximity once their proximity check gives up
///
/// Other behaviours are left alone; hosts pick the next behaviour tree from `Changed<Behaviour>`.
pub fn on_update_behaviour(
    mut reader: EventReader<UpdateBehaviour>,
    mut query: Query<&mut Behaviour>,
) {
    for &UpdateBehaviour { ent } in reader.read() {
        // actor may have been despawned since the event was sent
        let Ok(mut behaviour) = query.get_mut(ent) else { continue };

        if *behaviour == Behaviour::AttackInProximity {
            debug!("{ent} behaviour {:?} -> {:?}", *behaviour, Behaviour::Wander);
            *behaviour = Behaviour::Wander;
        }
    }
}
