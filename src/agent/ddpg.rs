use log::{debug, info, trace, warn};
use ndarray::{s, Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::ContinuousAgent;
use crate::config::DdpgConfig;
use crate::error::{PodError, Result};
use crate::loss::{Loss, SquaredError};
use crate::metrics::{StepReport, TrainingLog};
use crate::network::Brain;
use crate::replay_buffer::ReplayBuffer;

/// Whether an agent is still filling its replay buffer or training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    /// Buffer below capacity: `learn` only stores experience.
    Warmup,
    /// Buffer full: every `learn` call performs one gradient step.
    Training,
}

/// Deep Deterministic Policy Gradient agent.
///
/// Owns an actor (`state -> action`), a critic (`(state, action) -> Q`),
/// lagged copies of both used for the Bellman targets, and a FIFO replay
/// buffer. Target networks are replaced by full copies of the live networks
/// at every training step, taken before that step's gradient update is
/// applied, so they always trail the live networks by one update.
#[derive(Clone, Debug)]
pub struct DdpgAgent {
    actor: Brain,
    critic: Brain,
    target_actor: Brain,
    target_critic: Brain,
    memory: ReplayBuffer,
    log: TrainingLog,
    config: DdpgConfig,
    loss: SquaredError,
}

impl DdpgAgent {
    /// Build an agent from a validated configuration. When `config.seed` is
    /// set, initial weights and replay sampling are fully reproducible.
    pub fn new(config: DdpgConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let actor = Brain::new_with_rng(
            config.state_dim,
            config.action_dim,
            config.hidden_dim,
            &config.actor_structure()?,
            config.actor_learning_rate,
            &config.weight_init,
            &mut rng,
        )?;
        let critic = Brain::new_with_rng(
            config.critic_input_dim(),
            1,
            config.hidden_dim,
            &config.critic_structure()?,
            config.critic_learning_rate,
            &config.weight_init,
            &mut rng,
        )?;
        let memory = ReplayBuffer::with_rng(config.buffer_size, StdRng::seed_from_u64(rng.gen()));

        Ok(DdpgAgent {
            target_actor: actor.clone(),
            target_critic: critic.clone(),
            actor,
            critic,
            memory,
            log: TrainingLog::new(),
            config,
            loss: SquaredError,
        })
    }

    /// Policy inference. Overwrites the actor's cached input, which the
    /// actor's next backward pass differentiates through.
    pub fn forward(&mut self, state: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.actor.forward(state)
    }

    /// Store one transition and, once the buffer is full, run a single
    /// training step on `batch_size` sampled experiences.
    ///
    /// The transition is stored before sampling, so the batch may contain it.
    /// `batch_size` applies to this call only and takes precedence over
    /// `config.batch_size`; [`ContinuousAgent::observe`] passes the configured
    /// value instead.
    ///
    /// Returns `None` while warming up and the step's losses otherwise. Once
    /// training, the actor must have run `forward` since construction, because
    /// its update differentiates through that cached pass. A step that fails
    /// leaves every network, target and logged loss untouched; the stored
    /// transition and its reward remain.
    pub fn learn(
        &mut self,
        state: ArrayView1<f32>,
        action: ArrayView1<f32>,
        reward: f32,
        next_state: ArrayView1<f32>,
        batch_size: usize,
    ) -> Result<Option<StepReport>> {
        if batch_size == 0 {
            return Err(PodError::invalid_parameter("batch_size", "must be at least 1"));
        }
        let was_warming_up = self.phase() == AgentPhase::Warmup;

        self.memory
            .add_experience(state.to_owned(), action.to_owned(), reward, next_state.to_owned());
        self.log.record_reward(reward);

        if self.phase() == AgentPhase::Warmup {
            return Ok(None);
        }
        if was_warming_up {
            info!(
                "replay buffer full ({} experiences), training begins",
                self.memory.capacity()
            );
        }

        self.train_step(batch_size).map(Some)
    }

    fn train_step(&mut self, batch_size: usize) -> Result<StepReport> {
        if !self.actor.has_forward_cache() {
            return Err(PodError::Training(
                "actor has no cached forward pass; call forward before learn".to_string(),
            ));
        }

        let batch = self.memory.sample_batch(batch_size)?;
        let scale = self.config.critic_output_scale;
        let discount = self.config.discount_factor;

        let mut critic_loss = 0.0;
        let mut actor_loss = 0.0;
        let mut critic_gradient = Array1::<f32>::zeros(self.critic.output_dim());

        for i in 0..batch.len() {
            let next_action = self.target_actor.forward(batch.next_states[i].view())?;
            let target_input = self.critic_input(batch.next_states[i].view(), next_action.view())?;
            let next_value = self.target_critic.forward(target_input.view())? * scale;
            let target_q = next_value * discount + batch.rewards[i];

            let critic_input = self.critic_input(batch.states[i].view(), batch.actions[i].view())?;
            let predicted_q = self.critic.forward(critic_input.view())? * scale;

            critic_gradient += &self.loss.gradient(predicted_q.view(), target_q.view());
            critic_loss += self.loss.compute(predicted_q.view(), target_q.view());
            actor_loss -= predicted_q.sum();
        }

        let n = batch_size as f32;
        critic_gradient /= n;
        let report = StepReport {
            critic_loss: critic_loss / n,
            actor_loss: actor_loss / n,
        };

        // Snapshot before updating: targets lag the live networks by one step.
        let target_actor = self.actor.clone();
        let target_critic = self.critic.clone();

        let input_gradient = self.critic.backward(critic_gradient.view())?;
        let (start, end) = self.action_range();
        self.actor.backward(input_gradient.slice(s![start..end]))?;

        self.target_actor = target_actor;
        self.target_critic = target_critic;
        self.log.record_step(report);
        trace!("target networks resynchronised at step {}", self.log.steps());

        if !(report.critic_loss.is_finite() && report.actor_loss.is_finite()) {
            warn!(
                "non-finite loss at step {}: critic {}, actor {}",
                self.log.steps(),
                report.critic_loss,
                report.actor_loss
            );
        }

        debug!(
            "step {}: critic loss {:.6}, actor loss {:.6}",
            self.log.steps(),
            report.critic_loss,
            report.actor_loss
        );
        Ok(report)
    }

    /// Concatenate a state and an action into the critic's input vector.
    fn critic_input(&self, state: ArrayView1<f32>, action: ArrayView1<f32>) -> Result<Array1<f32>> {
        let (state_dim, action_dim) = (self.config.state_dim, self.config.action_dim);
        if state.len() != state_dim || action.len() != action_dim {
            return Err(PodError::shape_mismatch(
                format!("critic input of length {} ({} + {})", state_dim + action_dim, state_dim, action_dim),
                format!("state of length {} and action of length {}", state.len(), action.len()),
            ));
        }

        let mut input = Array1::zeros(state_dim + action_dim);
        input.slice_mut(s![..state_dim]).assign(&state);
        input.slice_mut(s![state_dim..]).assign(&action);
        Ok(input)
    }

    /// Index range of the action coordinates within the critic's input.
    pub fn action_range(&self) -> (usize, usize) {
        let start = self.config.state_dim;
        (start, start + self.config.action_dim)
    }

    pub fn phase(&self) -> AgentPhase {
        if self.memory.is_full() {
            AgentPhase::Training
        } else {
            AgentPhase::Warmup
        }
    }

    pub fn actor(&self) -> &Brain {
        &self.actor
    }

    pub fn critic(&self) -> &Brain {
        &self.critic
    }

    pub fn target_actor(&self) -> &Brain {
        &self.target_actor
    }

    pub fn target_critic(&self) -> &Brain {
        &self.target_critic
    }

    pub fn memory(&self) -> &ReplayBuffer {
        &self.memory
    }

    pub fn log(&self) -> &TrainingLog {
        &self.log
    }

    pub fn config(&self) -> &DdpgConfig {
        &self.config
    }

    /// Reward accumulated across every `learn` call since the last reset.
    pub fn total_reward(&self) -> f32 {
        self.log.total_reward()
    }

    pub fn reset_reward(&mut self) {
        self.log.reset_reward();
    }
}

impl ContinuousAgent for DdpgAgent {
    fn act(&mut self, state: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.forward(state)
    }

    fn observe(
        &mut self,
        state: ArrayView1<f32>,
        action: ArrayView1<f32>,
        reward: f32,
        next_state: ArrayView1<f32>,
    ) -> Result<Option<StepReport>> {
        let batch_size = self.config.batch_size;
        self.learn(state, action, reward, next_state, batch_size)
    }

    fn action_dim(&self) -> usize {
        self.config.action_dim
    }
}
