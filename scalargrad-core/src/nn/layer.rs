use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::node::Node;
use rand::Rng;

/// A fully connected layer of independent neurons sharing the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer mapping `nin` inputs to `nout` outputs.
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Self {
        Self::with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nout: usize, activation: Activation, rng: &mut R) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(nin, activation, rng))
            .collect();
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Node> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_outputs_one_value_per_neuron() {
        let mut rng = StdRng::seed_from_u64(5);
        let layer = Layer::with_rng(3, 4, Activation::Relu, &mut rng);
        assert_eq!(layer.nout(), 4);
        assert_eq!(layer.num_parameters(), 4 * (3 + 1));
        let out = layer.forward(&crate::nn::functional::leaves(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|o| o.value() >= 0.0));
    }

    #[test]
    fn test_layer_zero_grad_clears_all_parameters() {
        let layer = Layer::new(2, 2, Activation::Tanh);
        for p in layer.parameters() {
            p.set_grad(1.0);
        }
        layer.zero_grad();
        assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    }

    #[test]
    fn test_layer_wrong_input_size() {
        let layer = Layer::new(2, 3, Activation::Linear);
        assert_eq!(
            layer.forward(&[Node::new(1.0)]).unwrap_err(),
            ScalarGradError::InputSizeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
