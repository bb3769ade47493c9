use ndarray::{Array1, ArrayView1};

use crate::error::Result;

/// Trait defining the interface shared by every layer in a `Brain`
pub trait Layer: Send + Sync {
    /// Perform forward propagation for a single input vector, caching
    /// whatever the backward pass needs.
    fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>>;

    /// Propagate `output_gradient` back through the layer, applying a plain
    /// gradient descent step to any trainable parameters. Returns the
    /// gradient with respect to the layer's input.
    fn backward(&mut self, output_gradient: ArrayView1<f32>, learning_rate: f32) -> Result<Array1<f32>>;

    /// Whether a forward pass has cached what `backward` needs.
    fn has_cache(&self) -> bool {
        true
    }

    /// Number of trainable parameters
    fn parameter_count(&self) -> usize {
        0
    }
}
