pub mod activation;
pub mod dense;
pub mod initialization;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{PodError, Result};

pub use activation::{LinearLayer, TanhLayer};
pub use dense::DenseLayer;
pub use initialization::WeightInit;
pub use traits::Layer;

/// The layer kinds a network structure may name. Serializes as the bare
/// layer name, e.g. `"Tanh"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerTag {
    Dense,
    Tanh,
    Linear,
}

impl LayerTag {
    /// Parse an ordered structure such as `["Dense", "Tanh", "Dense"]`.
    pub fn parse_structure<S: AsRef<str>>(names: &[S]) -> Result<Vec<LayerTag>> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerTag::Dense => "Dense",
            LayerTag::Tanh => "Tanh",
            LayerTag::Linear => "Linear",
        }
    }
}

impl FromStr for LayerTag {
    type Err = PodError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Dense" => Ok(LayerTag::Dense),
            "Tanh" => Ok(LayerTag::Tanh),
            "Linear" => Ok(LayerTag::Linear),
            other => Err(PodError::UnknownLayer(other.to_string())),
        }
    }
}

impl fmt::Display for LayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer resolved from its tag at construction time.
#[derive(Clone, Debug)]
pub enum NetworkLayer {
    Dense(DenseLayer),
    Tanh(TanhLayer),
    Linear(LinearLayer),
}

impl NetworkLayer {
    pub fn tag(&self) -> LayerTag {
        match self {
            NetworkLayer::Dense(_) => LayerTag::Dense,
            NetworkLayer::Tanh(_) => LayerTag::Tanh,
            NetworkLayer::Linear(_) => LayerTag::Linear,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseLayer> {
        match self {
            NetworkLayer::Dense(layer) => Some(layer),
            _ => None,
        }
    }

    pub fn as_dense_mut(&mut self) -> Option<&mut DenseLayer> {
        match self {
            NetworkLayer::Dense(layer) => Some(layer),
            _ => None,
        }
    }
}

impl Layer for NetworkLayer {
    fn forward(&mut self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        match self {
            NetworkLayer::Dense(layer) => layer.forward(input),
            NetworkLayer::Tanh(layer) => layer.forward(input),
            NetworkLayer::Linear(layer) => layer.forward(input),
        }
    }

    fn backward(&mut self, output_gradient: ArrayView1<f32>, learning_rate: f32) -> Result<Array1<f32>> {
        match self {
            NetworkLayer::Dense(layer) => layer.backward(output_gradient, learning_rate),
            NetworkLayer::Tanh(layer) => layer.backward(output_gradient, learning_rate),
            NetworkLayer::Linear(layer) => layer.backward(output_gradient, learning_rate),
        }
    }

    fn has_cache(&self) -> bool {
        match self {
            NetworkLayer::Dense(layer) => layer.has_cache(),
            NetworkLayer::Tanh(layer) => layer.has_cache(),
            NetworkLayer::Linear(layer) => layer.has_cache(),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            NetworkLayer::Dense(layer) => layer.parameter_count(),
            NetworkLayer::Tanh(layer) => layer.parameter_count(),
            NetworkLayer::Linear(layer) => layer.parameter_count(),
        }
    }
}
