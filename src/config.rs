use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PodError, Result};
use crate::layers::{LayerTag, WeightInit};

/// Hyperparameters for a [`DdpgAgent`](crate::agent::DdpgAgent).
///
/// Network structures are kept as layer names so a configuration file reads
/// like `"actor_network": ["Dense", "Tanh", "Dense", "Tanh"]`. Names are
/// resolved into [`LayerTag`]s when the agent is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdpgConfig {
    pub state_dim: usize,
    pub action_dim: usize,
    pub hidden_dim: usize,
    pub actor_network: Vec<String>,
    pub critic_network: Vec<String>,
    pub actor_learning_rate: f32,
    pub critic_learning_rate: f32,
    /// Bellman discount applied to the target critic's estimate
    pub discount_factor: f32,
    /// Exploration probability for epsilon-greedy outer loops. The agent
    /// itself never reads it.
    pub epsilon: f32,
    pub buffer_size: usize,
    pub batch_size: usize,
    /// Factor applied to every critic and target-critic output before it
    /// enters the Bellman target or the loss. Empirical; 2.0 by default.
    pub critic_output_scale: f32,
    pub weight_init: WeightInit,
    pub seed: Option<u64>,
}

impl Default for DdpgConfig {
    fn default() -> Self {
        let structure = ["Dense", "Tanh", "Dense", "Tanh", "Dense", "Tanh"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        DdpgConfig {
            state_dim: 5,
            action_dim: 3,
            hidden_dim: 32,
            actor_network: structure.clone(),
            critic_network: structure,
            actor_learning_rate: 1e-3,
            critic_learning_rate: 2e-3,
            discount_factor: 0.99,
            epsilon: 0.5,
            buffer_size: 500,
            batch_size: 100,
            critic_output_scale: 2.0,
            weight_init: WeightInit::default(),
            seed: None,
        }
    }
}

impl DdpgConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DdpgConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn actor_structure(&self) -> Result<Vec<LayerTag>> {
        LayerTag::parse_structure(&self.actor_network)
    }

    pub fn critic_structure(&self) -> Result<Vec<LayerTag>> {
        LayerTag::parse_structure(&self.critic_network)
    }

    /// Width of the critic's concatenated `(state, action)` input.
    pub fn critic_input_dim(&self) -> usize {
        self.state_dim + self.action_dim
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("state_dim", self.state_dim),
            ("action_dim", self.action_dim),
            ("hidden_dim", self.hidden_dim),
            ("buffer_size", self.buffer_size),
            ("batch_size", self.batch_size),
        ] {
            if value == 0 {
                return Err(PodError::invalid_parameter(name, "must be greater than 0"));
            }
        }

        for (name, rate) in [
            ("actor_learning_rate", self.actor_learning_rate),
            ("critic_learning_rate", self.critic_learning_rate),
        ] {
            if !(rate > 0.0 && rate.is_finite()) {
                return Err(PodError::invalid_parameter(
                    name.to_string(),
                    format!("must be a positive finite number, got {}", rate),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(PodError::invalid_parameter(
                "discount_factor".to_string(),
                format!("must lie in [0, 1], got {}", self.discount_factor),
            ));
        }

        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(PodError::invalid_parameter(
                "epsilon".to_string(),
                format!("must lie in [0, 1], got {}", self.epsilon),
            ));
        }

        if !self.critic_output_scale.is_finite() {
            return Err(PodError::invalid_parameter(
                "critic_output_scale".to_string(),
                format!("must be finite, got {}", self.critic_output_scale),
            ));
        }

        if self.batch_size > self.buffer_size {
            return Err(PodError::invalid_parameter(
                "batch_size".to_string(),
                format!(
                    "{} exceeds buffer_size {}; a full buffer could never supply the batch",
                    self.batch_size, self.buffer_size
                ),
            ));
        }

        self.weight_init.validate()?;
        self.actor_structure()?;
        self.critic_structure()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DdpgConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.critic_input_dim(), 8);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = DdpgConfig::from_json_str(
            r#"{ "hidden_dim": 16, "actor_network": ["Dense", "Tanh", "Dense", "Linear"], "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.hidden_dim, 16);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.state_dim, 5);
        assert_eq!(
            config.actor_structure().unwrap(),
            vec![LayerTag::Dense, LayerTag::Tanh, LayerTag::Dense, LayerTag::Linear]
        );
    }

    #[test]
    fn test_unknown_layer_tag_rejected() {
        let result = DdpgConfig::from_json_str(r#"{ "critic_network": ["Dense", "Relu"] }"#);
        assert_eq!(result.unwrap_err(), PodError::UnknownLayer("Relu".to_string()));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = DdpgConfig::default();
        config.batch_size = config.buffer_size + 1;
        assert!(matches!(config.validate(), Err(PodError::InvalidParameter { .. })));

        let mut config = DdpgConfig::default();
        config.discount_factor = 1.5;
        assert!(config.validate().is_err());

        let mut config = DdpgConfig::default();
        config.critic_learning_rate = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            DdpgConfig::from_json_str("{ not json"),
            Err(PodError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_weight_init() {
        let mut config = DdpgConfig::default();
        config.weight_init = WeightInit::Normal { mean: 0.0, std: 0.05 };
        let json = config.to_json_string().unwrap();
        assert_eq!(DdpgConfig::from_json_str(&json).unwrap(), config);
    }
}
