use ndarray::{Array1, ArrayView1};

use super::traits::Layer;
use crate::error::{PodError, Result};

/// Element-wise hyperbolic tangent.
///
/// The forward output is cached so the backward pass can use
/// `1 - tanh(x)^2` without recomputing the activation.
#[derive(Clone, Debug, Default)]
pub struct TanhLayer {
    output: Option<Array1<f32>>,
}

impl TanhLayer {
    pub fn new() -> Self {
        TanhLayer { output: None }
    }
}

impl Layer for TanhLayer {
    fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        let output = input.mapv(f32::tanh);
        self.output = Some(output.clone());
        Ok(output)
    }

    fn backward(&mut self, output_gradient: ArrayView1<f32>, _learning_rate: f32) -> Result<Array1<f32>> {
        let output = self.output.as_ref().ok_or_else(|| {
            PodError::Training("tanh backward called before forward".to_string())
        })?;
        if output.len() != output_gradient.len() {
            return Err(PodError::shape_mismatch(
                format!("tanh gradient of length {}", output.len()),
                format!("length {}", output_gradient.len()),
            ));
        }
        Ok(&output_gradient * &output.mapv(|y| 1.0 - y * y))
    }

    fn has_cache(&self) -> bool {
        self.output.is_some()
    }
}

/// Identity layer. Marks a raw, un-squashed output.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearLayer;

impl LinearLayer {
    pub fn new() -> Self {
        LinearLayer
    }
}

impl Layer for LinearLayer {
    fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        Ok(input.to_owned())
    }

    fn backward(&mut self, output_gradient: ArrayView1<f32>, _learning_rate: f32) -> Result<Array1<f32>> {
        Ok(output_gradient.to_owned())
    }
}
