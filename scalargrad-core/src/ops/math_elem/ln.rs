// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::Node;
use crate::operand::Operand;

/// Computes the natural logarithm of a node.
///
/// Backward: `grad / x`.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the value is not strictly positive
/// (zero included). The check runs at construction time, so no node holding
/// `-inf` or NaN is ever created by this operation.
pub fn ln_op(a: impl Into<Operand>) -> Result<Node, ScalarGradError> {
    let a = a.into().into_node();
    let value = a.value();
    if value.is_nan() || value <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "ln_op".to_string(),
            value,
        });
    }
    Ok(crate::ops::apply_unary_op(&a, f64::ln, BackwardOp::Ln))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
