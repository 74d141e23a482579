// Method-style access to the operation catalog.

use crate::error::ScalarGradError;
use crate::node::Node;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::pow::powf;
use crate::ops::math_elem::{exp_op, ln_op};

impl Node {
    /// `self^exponent` for a constant real exponent.
    pub fn pow(&self, exponent: f64) -> Node {
        powf(self, exponent)
    }

    pub fn relu(&self) -> Node {
        relu_op(self)
    }

    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }

    pub fn sigmoid(&self) -> Node {
        sigmoid_op(self)
    }

    pub fn exp(&self) -> Node {
        exp_op(self)
    }

    /// Natural logarithm. Fails with `DomainError` when the value is `<= 0`.
    pub fn log(&self) -> Result<Node, ScalarGradError> {
        ln_op(self)
    }
}
