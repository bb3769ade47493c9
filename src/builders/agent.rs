use crate::agent::DdpgAgent;
use crate::config::DdpgConfig;
use crate::error::Result;
use crate::layers::WeightInit;

/// Fluent builder for [`DdpgAgent`], starting from [`DdpgConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct AgentBuilder {
    config: DdpgConfig,
}

impl AgentBuilder {
    pub fn new(state_dim: usize, action_dim: usize) -> Self {
        AgentBuilder {
            config: DdpgConfig {
                state_dim,
                action_dim,
                ..DdpgConfig::default()
            },
        }
    }

    pub fn from_config(config: DdpgConfig) -> Self {
        AgentBuilder { config }
    }

    pub fn hidden_dim(mut self, hidden_dim: usize) -> Self {
        self.config.hidden_dim = hidden_dim;
        self
    }

    pub fn actor_network<S: AsRef<str>>(mut self, structure: &[S]) -> Self {
        self.config.actor_network = structure.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn critic_network<S: AsRef<str>>(mut self, structure: &[S]) -> Self {
        self.config.critic_network = structure.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn learning_rates(mut self, actor: f32, critic: f32) -> Self {
        self.config.actor_learning_rate = actor;
        self.config.critic_learning_rate = critic;
        self
    }

    pub fn discount_factor(mut self, discount_factor: f32) -> Self {
        self.config.discount_factor = discount_factor;
        self
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.buffer_size = buffer_size;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    pub fn critic_output_scale(mut self, scale: f32) -> Self {
        self.config.critic_output_scale = scale;
        self
    }

    pub fn weight_init(mut self, init: WeightInit) -> Self {
        self.config.weight_init = init;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &DdpgConfig {
        &self.config
    }

    /// Validate the configuration and construct the agent.
    pub fn build(self) -> Result<DdpgAgent> {
        DdpgAgent::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PodError;

    #[test]
    fn test_agent_builder() {
        let agent = AgentBuilder::new(4, 2)
            .hidden_dim(8)
            .actor_network(&["Dense", "Tanh", "Dense", "Tanh"])
            .critic_network(&["Dense", "Tanh", "Dense", "Linear"])
            .discount_factor(0.9)
            .buffer_size(16)
            .batch_size(4)
            .seed(11)
            .build()
            .unwrap();

        assert_eq!(agent.actor().dense_shapes(), vec![(4, 8), (8, 2)]);
        assert_eq!(agent.critic().dense_shapes(), vec![(6, 8), (8, 1)]);
        assert_eq!(agent.config().discount_factor, 0.9);
        assert_eq!(agent.memory().capacity(), 16);
    }

    #[test]
    fn test_builder_rejects_unknown_layer() {
        let result = AgentBuilder::new(4, 2).actor_network(&["Dense", "Sigmoid"]).build();
        assert!(matches!(result, Err(PodError::UnknownLayer(tag)) if tag == "Sigmoid"));
    }

    #[test]
    fn test_builder_rejects_oversized_batch() {
        let result = AgentBuilder::new(4, 2).buffer_size(8).batch_size(9).build();
        assert!(matches!(result, Err(PodError::InvalidParameter { .. })));
    }
}
