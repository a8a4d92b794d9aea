pub mod check_proximity;
pub mod proximity_gate;
pub mod update_behaviour;
