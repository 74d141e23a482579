use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_square() {
    let x = Node::new(2.0);
    let y = pow_op(&x, 2.0).unwrap();
    assert_eq!(y.value(), 4.0);
    assert_eq!(y.label(), "**2");
    y.backward();
    assert_eq!(x.grad(), 4.0);
}

#[test]
fn test_pow_fractional_and_negative_exponents() {
    let x = Node::new(4.0);
    let root = x.pow(0.5);
    assert_relative_eq!(root.value(), 2.0);
    root.backward();
    assert_relative_eq!(x.grad(), 0.25);

    let z = Node::new(2.0);
    let inv = z.pow(-1.0);
    assert_relative_eq!(inv.value(), 0.5);
    inv.backward();
    assert_relative_eq!(z.grad(), -0.25);
}

#[test]
fn test_pow_integer_exponent_operand() {
    let x = Node::new(3.0);
    let y = pow_op(&x, 3).unwrap();
    assert_eq!(y.value(), 27.0);
}

#[test]
fn test_pow_node_exponent_is_rejected() {
    let x = Node::new(2.0);
    let e = Node::new(3.0);
    let result = pow_op(&x, &e);
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::UnsupportedOperandKind {
            operation: "pow_op".to_string(),
            found: "node".to_string(),
        }
    );
}
