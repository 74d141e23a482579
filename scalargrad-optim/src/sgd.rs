use crate::Optimizer;
use log::{debug, warn};
use scalargrad_core::{Node, NodeId, ScalarGradError};
use std::collections::HashSet;

/// Hyperparameters of [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub lr: f64,
    /// Momentum factor in `[0, 1)`. `0` gives plain gradient descent.
    pub momentum: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.05,
            momentum: 0.0,
        }
    }
}

impl SgdConfig {
    fn validate(&self) -> Result<(), ScalarGradError> {
        if !self.lr.is_finite() || self.lr < 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "SGD learning rate must be finite and non-negative, got {}",
                self.lr
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "SGD momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

/// Stochastic gradient descent, optionally with momentum.
///
/// Plain: `p = p - lr * grad(p)`.
/// With momentum: `v = momentum * v + grad(p); p = p - lr * v`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Node>,
    config: SgdConfig,
    // One velocity per parameter, same order as `params`.
    momentum_buffers: Vec<f64>,
}

impl Sgd {
    /// Creates an optimizer over `params`. A node listed more than once is
    /// updated only once per step.
    ///
    /// # Errors
    ///
    /// `ScalarGradError::InvalidConfig` for a non-finite or negative learning
    /// rate, or a momentum outside `[0, 1)`.
    pub fn new(params: Vec<Node>, config: SgdConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(params.len());
        let params: Vec<Node> = params.into_iter().filter(|p| seen.insert(p.id())).collect();
        debug!("Sgd: {} parameters, {:?}", params.len(), config);
        let momentum_buffers = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            config,
            momentum_buffers,
        })
    }

    pub fn params(&self) -> &[Node] {
        &self.params
    }

    pub fn config(&self) -> SgdConfig {
        self.config
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let SgdConfig { lr, momentum } = self.config;
        for (param, velocity) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let grad = param.grad();
            if !grad.is_finite() {
                warn!(
                    "Sgd: non-finite gradient {} on parameter '{}' (value {})",
                    grad,
                    param.label(),
                    param.value()
                );
            }
            let update = if momentum != 0.0 {
                *velocity = momentum * *velocity + grad;
                *velocity
            } else {
                grad
            };
            param.set_value(param.value() - lr * update);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.config.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.config.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
