use bevy::{log::LogPlugin, prelude::*, transform::TransformPlugin};
use bevy_behave::prelude::*;

use wild_animals::{
    common::components::{
        attack_in_proximity::AttackInProximity,
        behaviour::{Behaviour, PlayerControlled},
        follow::FollowIntent,
    },
    server::{plugins::behaviour::BehaviourPlugin, systems::spawner::spawn_wild_animal},
};

const MAX_DISTANCE: f32 = 8.0;
const PLAYER_START: Vec3 = Vec3::new(2.0, 0.0, 0.0);
const PLAYER_STEP: f32 = 0.25;  // per fixed tick, walking away along +x
const FIXED_TICKS: u32 = 64;

fn setup(mut commands: Commands) {
    let config = match AttackInProximity::new(MAX_DISTANCE) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid wild animal config: {err}");
            return;
        }
    };
    let npc = spawn_wild_animal(&mut commands, Vec3::ZERO, config);
    let player = commands.spawn((
        Name::new("player"),
        Behaviour::Controlled,
        PlayerControlled,
        Transform::from_translation(PLAYER_START),
    )).id();
    info!("spawned wild animal {npc} (radius {MAX_DISTANCE}) and player {player}");
}

fn walk_away(mut query: Query<&mut Transform, With<PlayerControlled>>) {
    for mut transform in &mut query {
        transform.translation.x += PLAYER_STEP;
    }
}

fn report(
    query: Query<(Entity, &Behaviour, &AttackInProximity, Option<&FollowIntent>), Changed<Behaviour>>,
) {
    for (ent, behaviour, config, follow) in &query {
        info!(
            "{ent} behaviour {behaviour:?}, nearby {:?}, following {:?}",
            config.nearby_entity,
            follow.and_then(|it| it.target),
        );
    }
}

fn stop_after(mut ticks: Local<u32>, mut exit: EventWriter<AppExit>) {
    *ticks += 1;
    if *ticks >= FIXED_TICKS {
        exit.write(AppExit::Success);
    }
}

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin {
            level: bevy::log::Level::DEBUG,
            filter: "bevy=warn,".to_owned()
                +"bevy_behave=info,"
                +"wild_animals=debug,"
                +"server=info,"
                ,
            ..default()
        },
        TransformPlugin,
        BehavePlugin::default(),
        BehaviourPlugin,
    ));

    app.add_systems(Startup, setup);
    app.add_systems(FixedUpdate, (walk_away, report, stop_after));

    app.run()
}
