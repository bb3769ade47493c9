use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{PodError, Result};

/// Weight initialization strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WeightInit {
    /// Uniform distribution with custom range
    Uniform { min: f32, max: f32 },

    /// Xavier/Glorot uniform initialization
    XavierUniform,

    /// Normal distribution with custom mean and std
    Normal { mean: f32, std: f32 },

    /// All zeros
    Zeros,
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Uniform { min: -0.1, max: 0.1 }
    }
}

impl WeightInit {
    /// Reject ranges the underlying distributions cannot sample from.
    pub fn validate(&self) -> Result<()> {
        match self {
            WeightInit::Uniform { min, max } if !(min < max) => Err(PodError::invalid_parameter(
                "weight_init".to_string(),
                format!("uniform range [{}, {}) is empty", min, max),
            )),
            WeightInit::Normal { std, .. } if !(*std >= 0.0 && std.is_finite()) => {
                Err(PodError::invalid_parameter(
                    "weight_init".to_string(),
                    format!("normal std must be finite and non-negative, got {}", std),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Initialize a `(output_size, input_size)` weight matrix.
    pub fn initialize_weights<R: Rng + ?Sized>(&self, shape: (usize, usize), rng: &mut R) -> Result<Array2<f32>> {
        self.validate()?;
        let (fan_out, fan_in) = shape;

        let weights = match self {
            WeightInit::Uniform { min, max } => Array2::random_using(shape, Uniform::new(*min, *max), rng),
            WeightInit::XavierUniform => {
                let limit = (6.0 / (fan_in + fan_out).max(1) as f32).sqrt();
                Array2::random_using(shape, Uniform::new(-limit, limit), rng)
            }
            WeightInit::Normal { mean, std } => {
                let normal = Normal::new(*mean, *std)
                    .map_err(|e| PodError::invalid_parameter("weight_init".to_string(), e.to_string()))?;
                Array2::random_using(shape, normal, rng)
            }
            WeightInit::Zeros => Array2::zeros(shape),
        };
        Ok(weights)
    }

    /// Biases always start at zero.
    pub fn initialize_biases(&self, size: usize) -> Array1<f32> {
        Array1::zeros(size)
    }
}
