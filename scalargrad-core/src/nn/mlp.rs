use crate::error::ScalarGradError;
use crate::nn::functional::leaves;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::node::Node;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence.
///
/// Every layer uses the same activation, as in the classic micro-MLP. Use
/// [`Mlp::from_layers`] to mix activations (e.g. a linear output layer).
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `nin` inputs and one layer per entry of `nouts`.
    pub fn new(nin: usize, nouts: &[usize], activation: Activation) -> Self {
        Self::with_rng(nin, nouts, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nouts: &[usize], activation: Activation, rng: &mut R) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::with_rng(pair[0], pair[1], activation, rng))
            .collect();
        Mlp { layers }
    }

    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Runs the network on plain numbers, wrapping them as fresh input leaves.
    pub fn forward_values(&self, input: &[f64]) -> Result<Vec<Node>, ScalarGradError> {
        self.forward(&leaves(input))
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Node> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
