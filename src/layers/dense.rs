use ndarray::{Array1, Array2, ArrayView1, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::initialization::WeightInit;
use super::traits::Layer;
use crate::error::{PodError, Result};

/// A fully connected (dense) layer computing `y = W·x + b`.
///
/// `weights` has shape `(output_size, input_size)`. Every call to
/// [`Layer::backward`] applies one unconditional gradient descent step to
/// both weights and biases.
#[derive(Clone, Debug)]
pub struct DenseLayer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
    input: Option<Array1<f32>>,
}

impl DenseLayer {
    /// Create a new dense layer with weights drawn uniformly from
    /// `[-0.1, 0.1)` and zero biases.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        DenseLayer {
            weights: Array2::random((output_size, input_size), Uniform::new(-0.1, 0.1)),
            biases: Array1::zeros(output_size),
            input: None,
        }
    }

    /// Create a dense layer using the given initialization strategy and RNG.
    pub fn new_with_init<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        init: &WeightInit,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(DenseLayer {
            weights: init.initialize_weights((output_size, input_size), rng)?,
            biases: init.initialize_biases(output_size),
            input: None,
        })
    }

    pub fn with_weights(mut self, weights: Array2<f32>) -> Result<Self> {
        if weights.dim() != self.weights.dim() {
            return Err(PodError::shape_mismatch(
                format!("weights {:?}", self.weights.dim()),
                format!("weights {:?}", weights.dim()),
            ));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn with_biases(mut self, biases: Array1<f32>) -> Result<Self> {
        if biases.len() != self.biases.len() {
            return Err(PodError::shape_mismatch(
                format!("biases of length {}", self.biases.len()),
                format!("biases of length {}", biases.len()),
            ));
        }
        self.biases = biases;
        Ok(self)
    }

    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }
}

impl Layer for DenseLayer {
    fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        if input.len() != self.input_size() {
            return Err(PodError::shape_mismatch(
                format!("dense input of length {}", self.input_size()),
                format!("length {}", input.len()),
            ));
        }
        self.input = Some(input.to_owned());
        Ok(self.weights.dot(&input) + &self.biases)
    }

    fn backward(&mut self, output_gradient: ArrayView1<f32>, learning_rate: f32) -> Result<Array1<f32>> {
        if output_gradient.len() != self.output_size() {
            return Err(PodError::shape_mismatch(
                format!("dense gradient of length {}", self.output_size()),
                format!("length {}", output_gradient.len()),
            ));
        }
        let input = self.input.as_ref().ok_or_else(|| {
            PodError::Training("dense backward called before forward".to_string())
        })?;

        // Input gradient uses the weights as they were during forward.
        let input_gradient = self.weights.t().dot(&output_gradient);
        let weight_gradient = output_gradient
            .view()
            .insert_axis(Axis(1))
            .dot(&input.view().insert_axis(Axis(0)));

        self.weights.scaled_add(-learning_rate, &weight_gradient);
        self.biases.scaled_add(-learning_rate, &output_gradient);

        Ok(input_gradient)
    }

    fn has_cache(&self) -> bool {
        self.input.is_some()
    }

    fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}
