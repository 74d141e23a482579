//! # ScalarGrad optim
//!
//! Optimizers that update parameter nodes in place from their accumulated
//! gradients.

use scalargrad_core::ScalarGradError;

pub mod sgd;

pub use sgd::{Sgd, SgdConfig};

/// Common interface for optimization algorithms.
///
/// An optimizer owns handles to the parameters it updates. Since nodes are
/// shared handles, the update is visible through every other handle, e.g. the
/// ones held by the model.
pub trait Optimizer {
    /// Applies one update to every parameter using its current gradient.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all managed parameters. Call it before each
    /// backward pass: gradients accumulate otherwise.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Changes the learning rate, e.g. for a decay schedule.
    fn set_lr(&mut self, lr: f64);
}
