use crate::error::ScalarGradError;
use crate::node::Node;
use log::trace;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Input index {input_index} is out of range for {num_inputs} inputs")]
    InputIndexOutOfRange {
        input_index: usize,
        num_inputs: usize,
    },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Estimates `d func / d inputs[index]` with a centered finite difference:
/// `(f(x + eps) - f(x - eps)) / (2 eps)`.
///
/// `func` is evaluated on fresh leaves built from `inputs`, so the estimate
/// never touches any existing graph.
pub fn numerical_grad<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    epsilon: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    if index >= inputs.len() {
        return Err(GradCheckError::InputIndexOutOfRange {
            input_index: index,
            num_inputs: inputs.len(),
        });
    }

    let evaluate = |delta: f64| -> Result<f64, GradCheckError> {
        let leaves: Vec<Node> = inputs
            .iter()
            .enumerate()
            .map(|(i, &v)| Node::new(if i == index { v + delta } else { v }))
            .collect();
        Ok(func(&leaves)?.value())
    };

    let loss_plus = evaluate(epsilon)?;
    let loss_minus = evaluate(-epsilon)?;
    let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
    if !numerical.is_finite() {
        return Err(GradCheckError::NumericalGradNaNOrInfinite {
            input_index: index,
            loss_plus,
            loss_minus,
        });
    }
    Ok(numerical)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds one leaf per value in `inputs`, runs `func` on them, calls `backward()`
/// on the result and compares every leaf's gradient with [`numerical_grad`].
/// Two gradients match when they agree within `tolerance`, either absolutely or
/// relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    let leaves: Vec<Node> = inputs.iter().map(|&v| Node::new(v)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let numerical = numerical_grad(&func, inputs, i, epsilon)?;
        trace!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical
        );
        if !approx::relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad: numerical,
                difference: (analytical_grad - numerical).abs(),
            });
        }
    }
    Ok(())
}
