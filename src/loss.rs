use ndarray::{Array1, ArrayView1};

/// Trait defining the interface for loss functions
pub trait Loss: Send + Sync {
    /// Compute the loss for a single prediction and target
    fn compute(&self, prediction: ArrayView1<f32>, target: ArrayView1<f32>) -> f32;

    /// Compute the gradient of the loss with respect to predictions
    fn gradient(&self, prediction: ArrayView1<f32>, target: ArrayView1<f32>) -> Array1<f32>;
}

/// Mean squared error without the conventional 1/2 factor, so that for a
/// single output the gradient is exactly `2 * (prediction - target)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredError;

impl Loss for SquaredError {
    fn compute(&self, prediction: ArrayView1<f32>, target: ArrayView1<f32>) -> f32 {
        let diff = &target - &prediction;
        (&diff * &diff).sum() / prediction.len().max(1) as f32
    }

    fn gradient(&self, prediction: ArrayView1<f32>, target: ArrayView1<f32>) -> Array1<f32> {
        (&prediction - &target) * 2.0 / prediction.len().max(1) as f32
    }
}
