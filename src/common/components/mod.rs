pub mod attack_in_proximity;
pub mod behaviour;
pub mod follow;
