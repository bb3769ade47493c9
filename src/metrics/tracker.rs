use serde::{Deserialize, Serialize};

use super::statistics::Statistics;

/// Losses of one completed training step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Batch-averaged squared error between target and predicted Q
    pub critic_loss: f32,
    /// Batch-averaged negated predicted Q
    pub actor_loss: f32,
}

/// Diagnostics owned by an agent: one loss entry per completed training
/// step plus the reward accumulated across every `learn` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    critic_losses: Vec<f32>,
    actor_losses: Vec<f32>,
    total_reward: f32,
}

impl TrainingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reward(&mut self, reward: f32) {
        self.total_reward += reward;
    }

    pub fn record_step(&mut self, report: StepReport) {
        self.critic_losses.push(report.critic_loss);
        self.actor_losses.push(report.actor_loss);
    }

    /// Zero the running reward, leaving loss history intact.
    pub fn reset_reward(&mut self) {
        self.total_reward = 0.0;
    }

    pub fn total_reward(&self) -> f32 {
        self.total_reward
    }

    pub fn critic_losses(&self) -> &[f32] {
        &self.critic_losses
    }

    pub fn actor_losses(&self) -> &[f32] {
        &self.actor_losses
    }

    /// Number of completed training steps.
    pub fn steps(&self) -> usize {
        self.critic_losses.len()
    }

    pub fn last(&self) -> Option<StepReport> {
        Some(StepReport {
            critic_loss: *self.critic_losses.last()?,
            actor_loss: *self.actor_losses.last()?,
        })
    }

    /// Statistics over the most recent `window` critic losses.
    pub fn recent_critic_stats(&self, window: usize) -> Statistics {
        Statistics::from_slice(tail(&self.critic_losses, window))
    }

    /// Statistics over the most recent `window` actor losses.
    pub fn recent_actor_stats(&self, window: usize) -> Statistics {
        Statistics::from_slice(tail(&self.actor_losses, window))
    }
}

fn tail(values: &[f32], window: usize) -> &[f32] {
    &values[values.len().saturating_sub(window)..]
}
