use crate::error::ScalarGradError;
use crate::node::Node;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Modules are plain compositions of engine operations: `forward` builds new
/// graph nodes on top of the module's parameters, and `parameters` hands out
/// the leaf nodes an optimizer updates.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InputSizeMismatch` if `input` does not have the
    /// number of values the module expects.
    fn forward(&self, input: &[Node]) -> Result<Vec<Node>, ScalarGradError>;

    /// Returns handles to all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Node>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
