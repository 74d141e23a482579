// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::Node;
use crate::operand::Operand;

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is not part of the graph: it must be a plain number.
///
/// # Errors
/// Returns `ScalarGradError::UnsupportedOperandKind` if `exponent` is a node.
pub fn pow_op(
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<Node, ScalarGradError> {
    let exponent = exponent.into();
    let exponent = match exponent.as_scalar() {
        Some(value) => value,
        None => {
            return Err(ScalarGradError::UnsupportedOperandKind {
                operation: "pow_op".to_string(),
                found: exponent.kind().to_string(),
            })
        }
    };
    Ok(powf(&base.into().into_node(), exponent))
}

/// `base^exponent` with the exponent already known to be a number.
///
/// Backward: `grad * exponent * base^(exponent - 1)`.
pub(crate) fn powf(base: &Node, exponent: f64) -> Node {
    crate::ops::apply_unary_op(base, |x| x.powf(exponent), BackwardOp::Pow { exponent })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
