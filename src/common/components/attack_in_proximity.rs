use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ProximityConfigError {
    #[error("max_distance must be finite, got {0}")]
    NotFinite(f32),
    #[error("max_distance must be greater than zero, got {0}")]
    NotPositive(f32),
}

/// Attack-in-proximity settings for an NPC
/// Radius within which a player keeps the NPC following, plus the player it last found there
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "AttackInProximityData")]
pub struct AttackInProximity {
    pub max_distance: f32,
    #[serde(skip)]
    pub nearby_entity: Option<Entity>,
}

impl AttackInProximity {
    pub fn new(max_distance: f32) -> Result<Self, ProximityConfigError> {
        let config = Self { max_distance, nearby_entity: None };
        config.validate()?;
        Ok(config)
    }

    /// Check a config whose fields were set by hand
    pub fn validate(&self) -> Result<(), ProximityConfigError> {
        if !self.max_distance.is_finite() {
            return Err(ProximityConfigError::NotFinite(self.max_distance));
        }
        if self.max_distance <= 0.0 {
            return Err(ProximityConfigError::NotPositive(self.max_distance));
        }
        Ok(())
    }

    pub fn set_nearby(&mut self, target: Entity) {
        self.nearby_entity = Some(target);
    }

    pub fn clear_nearby(&mut self) {
        self.nearby_entity = None;
    }
}

/// Authored form of AttackInProximity, validated on the way in
#[derive(Deserialize)]
pub struct AttackInProximityData {
    pub max_distance: f32,
}

impl TryFrom<AttackInProximityData> for AttackInProximity {
    type Error = ProximityConfigError;

    fn try_from(data: AttackInProximityData) -> Result<Self, Self::Error> {
        AttackInProximity::new(data.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_distance() {
        let config = AttackInProximity::new(12.5).unwrap();

        assert_eq!(config.max_distance, 12.5);
        assert_eq!(config.nearby_entity, None);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(AttackInProximity::new(0.0), Err(ProximityConfigError::NotPositive(0.0)));
    }

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(AttackInProximity::new(-3.0), Err(ProximityConfigError::NotPositive(-3.0)));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(AttackInProximity::new(f32::NAN), Err(ProximityConfigError::NotFinite(_))));
        assert_eq!(
            AttackInProximity::new(f32::INFINITY),
            Err(ProximityConfigError::NotFinite(f32::INFINITY))
        );
    }

    #[test]
    fn test_error_message_names_value() {
        let err = AttackInProximity::new(-1.0).unwrap_err();

        assert_eq!(err.to_string(), "max_distance must be greater than zero, got -1");
    }

    #[test]
    fn test_nearby_set_and_clear() {
        let mut config = AttackInProximity::new(5.0).unwrap();
        let target = Entity::from_raw(42);

        config.set_nearby(target);
        assert_eq!(config.nearby_entity, Some(target));

        config.clear_nearby();
        assert_eq!(config.nearby_entity, None);
    }

    #[test]
    fn test_deserialize_skips_nearby_entity() {
        let config: AttackInProximity = serde_json::from_str(r#"{ "max_distance": 8.0 }"#).unwrap();

        assert_eq!(config.max_distance, 8.0);
        assert_eq!(config.nearby_entity, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_rejects_negative_distance() {
        let result = serde_json::from_str::<AttackInProximity>(r#"{ "max_distance": -5.0 }"#);

        let err = result.expect_err("negative radius must not load");
        assert!(
            err.to_string().contains("max_distance must be greater than zero"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_deserialize_rejects_zero_distance() {
        assert!(serde_json::from_str::<AttackInProximity>(r#"{ "max_distance": 0.0 }"#).is_err());
    }

    #[test]
    fn test_serialize_round_trips_through_validation() {
        let mut config = AttackInProximity::new(6.0).unwrap();
        config.set_nearby(Entity::from_raw(7));

        let json = serde_json::to_string(&config).unwrap();
        let loaded: AttackInProximity = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.max_distance, 6.0);
        assert_eq!(loaded.nearby_entity, None, "nearby entity is runtime state, not authored data");
    }
}
