use crate::node::Node;
use std::fmt;

/// Descriptor of the operation that produced a non-leaf node.
///
/// Each variant stores whatever constant the derivative needs besides the operand
/// values (only `Pow` has one). The operands themselves are the node's parents.
/// [`BackwardOp::backward`] is the single dispatch routine turning a node's
/// finalized gradient into one contribution per parent.
///
/// Negation, subtraction and division have no variant of their own: they are
/// built from `Mul`, `Add` and `Pow` (see [`crate::ops::arithmetic`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    Add,
    Mul,
    /// `x^exponent` for a constant real exponent.
    Pow { exponent: f64 },
    Relu,
    Tanh,
    Sigmoid,
    /// Natural logarithm.
    Ln,
    Exp,
}

impl BackwardOp {
    /// Number of parents a node produced by this operation has.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Add | BackwardOp::Mul => 2,
            _ => 1,
        }
    }

    /// Operator symbol used as the default node label.
    pub fn symbol(&self) -> String {
        match self {
            BackwardOp::Add => "+".to_string(),
            BackwardOp::Mul => "*".to_string(),
            BackwardOp::Pow { exponent } => format!("**{}", exponent),
            BackwardOp::Relu => "relu".to_string(),
            BackwardOp::Tanh => "tanh".to_string(),
            BackwardOp::Sigmoid => "sigmoid".to_string(),
            BackwardOp::Ln => "log".to_string(),
            BackwardOp::Exp => "exp".to_string(),
        }
    }

    /// Computes the contribution to add into each parent's gradient.
    ///
    /// * `output`: forward value of the node produced by this operation.
    /// * `grad_output`: the node's own gradient, fully accumulated.
    /// * `inputs`: forward values of the parents, in operand order.
    ///
    /// The returned vector has one entry per parent, in the same order.
    pub fn backward(&self, output: f64, grad_output: f64, inputs: &[f64]) -> Vec<f64> {
        match *self {
            BackwardOp::Add => vec![grad_output, grad_output],
            BackwardOp::Mul => vec![grad_output * inputs[1], grad_output * inputs[0]],
            BackwardOp::Pow { exponent } => {
                vec![grad_output * exponent * inputs[0].powf(exponent - 1.0)]
            }
            BackwardOp::Relu => {
                let mask = if inputs[0] > 0.0 { 1.0 } else { 0.0 };
                vec![grad_output * mask]
            }
            // d tanh(x) = 1 - tanh(x)^2, read back from the output.
            BackwardOp::Tanh => vec![grad_output * (1.0 - output * output)],
            BackwardOp::Sigmoid => vec![grad_output * output * (1.0 - output)],
            BackwardOp::Ln => vec![grad_output / inputs[0]],
            // d e^x = e^x = output.
            BackwardOp::Exp => vec![grad_output * output],
        }
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// Runs the local backward rule of `node`, adding its contributions into the
/// gradients of its parents. Leaves and rule-less nodes are a no-op.
///
/// A parent listed twice receives two contributions.
pub(crate) fn propagate(node: &Node) {
    let guard = node.read_data();
    let op = match guard.op {
        Some(op) => op,
        None => return,
    };
    let inputs: Vec<f64> = guard.parents.iter().map(Node::value).collect();
    let contributions = op.backward(guard.value, guard.grad, &inputs);
    // A parent is always a different vertex than its child, so borrowing it
    // mutably while `guard` is held cannot conflict.
    for (parent, contribution) in guard.parents.iter().zip(contributions) {
        parent.write_data().grad += contribution;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arity_and_symbols() {
        assert_eq!(BackwardOp::Add.arity(), 2);
        assert_eq!(BackwardOp::Mul.arity(), 2);
        assert_eq!(BackwardOp::Exp.arity(), 1);
        assert_eq!(BackwardOp::Pow { exponent: 2.0 }.symbol(), "**2");
        assert_eq!(BackwardOp::Pow { exponent: -1.0 }.to_string(), "**-1");
        assert_eq!(BackwardOp::Ln.symbol(), "log");
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(BackwardOp::Add.backward(5.0, 2.0, &[2.0, 3.0]), vec![2.0, 2.0]);
        assert_eq!(BackwardOp::Mul.backward(6.0, 2.0, &[2.0, 3.0]), vec![6.0, 4.0]);
        assert_eq!(
            BackwardOp::Pow { exponent: 3.0 }.backward(8.0, 1.0, &[2.0]),
            vec![12.0]
        );
        assert_eq!(BackwardOp::Relu.backward(0.0, 1.0, &[-2.0]), vec![0.0]);
        assert_eq!(BackwardOp::Relu.backward(0.0, 1.0, &[0.0]), vec![0.0]);
        assert_eq!(BackwardOp::Relu.backward(2.0, 3.0, &[2.0]), vec![3.0]);
        assert_eq!(BackwardOp::Ln.backward(0.0, 1.0, &[4.0]), vec![0.25]);

        let t = 0.5_f64.tanh();
        assert_relative_eq!(BackwardOp::Tanh.backward(t, 1.0, &[0.5])[0], 1.0 - t * t);
        let s = 0.25;
        assert_relative_eq!(BackwardOp::Sigmoid.backward(s, 2.0, &[0.0])[0], 2.0 * s * 0.75);
        let e = 1.0_f64.exp();
        assert_relative_eq!(BackwardOp::Exp.backward(e, 2.0, &[1.0])[0], 2.0 * e);
    }

    #[test]
    fn test_propagate_on_leaf_is_noop() {
        let leaf = Node::new(1.0);
        leaf.set_grad(3.0);
        propagate(&leaf);
        assert_eq!(leaf.grad(), 3.0);
    }
}
