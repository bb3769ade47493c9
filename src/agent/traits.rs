use ndarray::{Array1, ArrayView1};

use crate::error::Result;
use crate::metrics::StepReport;

/// Trait for agents acting in continuous action spaces
pub trait ContinuousAgent {
    /// Select an action for `state`
    fn act(&mut self, state: ArrayView1<f32>) -> Result<Array1<f32>>;

    /// Record a transition, training when the agent is ready to, with the
    /// agent's configured batch size. Returns the losses of the training
    /// step if one ran.
    fn observe(
        &mut self,
        state: ArrayView1<f32>,
        action: ArrayView1<f32>,
        reward: f32,
        next_state: ArrayView1<f32>,
    ) -> Result<Option<StepReport>>;

    /// Length of the action vectors produced by `act`
    fn action_dim(&self) -> usize;
}
