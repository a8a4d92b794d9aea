pub mod behaviour;
pub mod spawner;
