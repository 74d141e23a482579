use crate::error::ScalarGradError;
use crate::nn::init::{default_uniform, Init};
use crate::nn::module::Module;
use crate::node::Node;
use rand::Rng;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    Relu,
    Tanh,
    #[default]
    Sigmoid,
    /// No non-linearity (identity).
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Node) -> Node {
        match self {
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Linear => x.clone(),
        }
    }
}

/// A single neuron: `act(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Node>,
    bias: Node,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, weights and bias uniform in `[-1, 1)`,
    /// using the thread-local RNG.
    pub fn new(nin: usize, activation: Activation) -> Self {
        Self::with_rng(nin, activation, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`], drawing from the given RNG.
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        let weights = (0..nin).map(|_| default_uniform(rng)).collect();
        let bias = default_uniform(rng);
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a neuron whose parameters are drawn with `init`.
    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = (0..nin)
            .map(|_| init.sample(rng))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = init.sample(rng)?;
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron from explicit parameter nodes.
    pub fn from_parameters(weights: Vec<Node>, bias: Node, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn weights(&self) -> &[Node] {
        &self.weights
    }

    pub fn bias(&self) -> &Node {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron output for one input vector.
    pub fn activate(&self, input: &[Node]) -> Result<Node, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Node> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
