use super::*;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_and_backward() {
    let x = Node::new(1.0);
    let y = exp_op(&x);
    assert_relative_eq!(y.value(), std::f64::consts::E);
    assert_eq!(y.label(), "exp");
    y.backward();
    assert_relative_eq!(x.grad(), std::f64::consts::E);
}

#[test]
fn test_exp_overflow_is_not_intercepted() {
    let x = Node::new(1000.0);
    let y = x.exp();
    assert!(y.value().is_infinite());
}
