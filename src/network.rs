use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::error::{PodError, Result};
use crate::layers::{DenseLayer, Layer, LayerTag, LinearLayer, NetworkLayer, TanhLayer, WeightInit};

/// A feed-forward network ("brain") built from an ordered list of layer tags.
///
/// Dense layers are sized automatically: the Dense layer nearest the output
/// maps `hidden_dim -> output_dim`, the one nearest the input maps
/// `input_dim -> hidden_dim`, and every Dense layer in between is
/// `hidden_dim -> hidden_dim`. All Dense layers share one learning rate.
///
/// Cloning a `Brain` produces a fully independent deep copy.
#[derive(Clone, Debug)]
pub struct Brain {
    layers: Vec<NetworkLayer>,
    learning_rate: f32,
    input_dim: usize,
    output_dim: usize,
}

impl Brain {
    /// Build a network with the default weight initialization and a
    /// thread-local RNG.
    pub fn new(
        input_dim: usize,
        output_dim: usize,
        hidden_dim: usize,
        structure: &[LayerTag],
        learning_rate: f32,
    ) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::new_with_rng(
            input_dim,
            output_dim,
            hidden_dim,
            structure,
            learning_rate,
            &WeightInit::default(),
            &mut rng,
        )
    }

    /// Build a network from layer names, e.g. `["Dense", "Tanh", "Dense", "Linear"]`.
    pub fn from_names<S: AsRef<str>>(
        input_dim: usize,
        output_dim: usize,
        hidden_dim: usize,
        names: &[S],
        learning_rate: f32,
    ) -> Result<Self> {
        let structure = LayerTag::parse_structure(names)?;
        Self::new(input_dim, output_dim, hidden_dim, &structure, learning_rate)
    }

    /// Build a network drawing initial weights from `rng`, so that a seeded
    /// RNG yields reproducible parameters.
    pub fn new_with_rng<R: Rng + ?Sized>(
        input_dim: usize,
        output_dim: usize,
        hidden_dim: usize,
        structure: &[LayerTag],
        learning_rate: f32,
        init: &WeightInit,
        rng: &mut R,
    ) -> Result<Self> {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            return Err(PodError::invalid_parameter(
                "learning_rate".to_string(),
                format!("must be a positive finite number, got {}", learning_rate),
            ));
        }

        let shapes = dense_shapes(input_dim, output_dim, hidden_dim, structure);
        let mut layers = Vec::with_capacity(structure.len());
        for (tag, shape) in structure.iter().zip(shapes) {
            let layer = match tag {
                LayerTag::Dense => {
                    let (fan_in, fan_out) = shape.ok_or_else(|| {
                        PodError::Training("dense layer was not assigned a shape".to_string())
                    })?;
                    NetworkLayer::Dense(DenseLayer::new_with_init(fan_in, fan_out, init, rng)?)
                }
                LayerTag::Tanh => NetworkLayer::Tanh(TanhLayer::new()),
                LayerTag::Linear => NetworkLayer::Linear(LinearLayer::new()),
            };
            layers.push(layer);
        }

        Ok(Brain {
            layers,
            learning_rate,
            input_dim,
            output_dim,
        })
    }

    /// Feed `input` through every layer in order.
    pub fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        let mut output = input.to_owned();
        for layer in &mut self.layers {
            output = layer.forward(output.view())?;
        }
        Ok(output)
    }

    /// Feed `gradient` through every layer in reverse, updating Dense
    /// parameters in place. Returns the gradient with respect to the input
    /// of the most recent forward pass.
    pub fn backward(&mut self, gradient: ArrayView1<f32>) -> Result<Array1<f32>> {
        let mut gradient = gradient.to_owned();
        for layer in self.layers.iter_mut().rev() {
            gradient = layer.backward(gradient.view(), self.learning_rate)?;
        }
        Ok(gradient)
    }

    /// True once every layer holds the cache of a forward pass, i.e. when
    /// `backward` cannot fail for lack of one.
    pub fn has_forward_cache(&self) -> bool {
        self.layers.iter().all(|layer| layer.has_cache())
    }

    pub fn layers(&self) -> &[NetworkLayer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [NetworkLayer] {
        &mut self.layers
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// `(input_size, output_size)` of each Dense layer, in forward order.
    pub fn dense_shapes(&self) -> Vec<(usize, usize)> {
        self.layers
            .iter()
            .filter_map(NetworkLayer::as_dense)
            .map(|layer| (layer.input_size(), layer.output_size()))
            .collect()
    }

    /// Snapshot of `(weights, biases)` for each Dense layer, in forward order.
    pub fn parameters(&self) -> Vec<(Array2<f32>, Array1<f32>)> {
        self.layers
            .iter()
            .filter_map(NetworkLayer::as_dense)
            .map(|layer| (layer.weights.clone(), layer.biases.clone()))
            .collect()
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.parameter_count()).sum()
    }
}

/// Assign a shape to every Dense tag by walking the structure from the
/// output end. A lone Dense layer maps `input_dim -> output_dim`.
fn dense_shapes(
    input_dim: usize,
    output_dim: usize,
    hidden_dim: usize,
    structure: &[LayerTag],
) -> Vec<Option<(usize, usize)>> {
    let dense_count = structure.iter().filter(|tag| **tag == LayerTag::Dense).count();
    let mut shapes = vec![None; structure.len()];
    let mut seen = 0;

    for (index, tag) in structure.iter().enumerate().rev() {
        if *tag != LayerTag::Dense {
            continue;
        }
        seen += 1;
        let nearest_output = seen == 1;
        let nearest_input = seen == dense_count;
        shapes[index] = Some(match (nearest_input, nearest_output) {
            (true, true) => (input_dim, output_dim),
            (false, true) => (hidden_dim, output_dim),
            (true, false) => (input_dim, hidden_dim),
            (false, false) => (hidden_dim, hidden_dim),
        });
    }
    shapes
}
