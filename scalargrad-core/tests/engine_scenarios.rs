mod common;

use approx::assert_relative_eq;
use scalargrad_core::nn::cross_entropy;
use scalargrad_core::nn::functional::{leaves, softmax};
use scalargrad_core::ops::arithmetic::pow_op;
use scalargrad_core::utils::testing::check_grads_near;
use scalargrad_core::{make_node, Node, ScalarGradError};

#[test]
fn forward_expression_value() {
    let a = make_node(2.0, Vec::new());
    let b = make_node(3.0, Vec::new());
    assert_eq!((&a * &b + &a).value(), 8.0);
}

#[test]
fn shared_subexpression_accumulates() {
    common::init_logger();
    let a = Node::new(-4.0);
    let c = &a + &a;
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn leaf_backward_only_seeds_itself() {
    let a = Node::new(3.0);
    let b = Node::new(5.0);
    let _c = &a * &b;
    a.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(a.value(), 3.0);
}

#[test]
fn square_gradient() {
    let x = Node::new(2.0);
    let y = pow_op(&x, 2.0).unwrap();
    y.backward();
    assert_eq!(x.grad(), 4.0);
}

#[test]
fn softmax_negative_log_likelihood() {
    let x = leaves(&[1.0, 2.0]);
    let sm = softmax(&x).unwrap();
    let loss = -sm[0].log().unwrap();
    loss.backward();

    let denom = 1.0_f64.exp() + 2.0_f64.exp();
    let expected = [1.0_f64.exp() / denom - 1.0, 2.0_f64.exp() / denom];
    check_grads_near(&x, &expected, 1e-9);

    // The loss helper builds the same graph.
    let y = leaves(&[1.0, 2.0]);
    let loss2 = cross_entropy(&y, 0).unwrap();
    assert_relative_eq!(loss2.value(), loss.value());
    loss2.backward();
    check_grads_near(&y, &expected, 1e-9);
}

#[test]
fn log_domain_error_is_consistent() {
    let x = Node::new(-1.0);
    for _ in 0..5 {
        assert_eq!(
            x.log().unwrap_err(),
            ScalarGradError::DomainError {
                operation: "ln_op".to_string(),
                value: -1.0
            }
        );
    }
}

#[test]
fn diamond_receives_both_paths() {
    // f(a) = tanh(a) * exp(a); f' = (1 - tanh^2) e^a + tanh e^a
    let a = Node::new(0.7);
    let f = a.tanh() * a.exp();
    f.backward();
    let t = 0.7_f64.tanh();
    let e = 0.7_f64.exp();
    assert_relative_eq!(a.grad(), (1.0 - t * t) * e + t * e, epsilon = 1e-12);
}

#[test]
fn reused_intermediate_accumulates_before_propagating() {
    // b is consumed twice; a must see d/da of (b * b + b) = (2b + 1) * 3
    let a = Node::new(2.0);
    let b = &a * 3.0;
    let out = &b * &b + &b;
    out.backward();
    assert_relative_eq!(b.grad(), 2.0 * 6.0 + 1.0);
    assert_relative_eq!(a.grad(), (2.0 * 6.0 + 1.0) * 3.0);
}

#[test]
fn plain_literal_on_the_left() {
    let a = Node::new(1.0);
    let sum = 2.0 + &a;
    let product = 2.0 * &a;
    let difference = 2.0 - &a;
    let quotient = 2.0 / &a;
    assert_eq!(sum.value(), 3.0);
    assert_eq!(product.value(), 2.0);
    assert_eq!(difference.value(), 1.0);
    assert_eq!(quotient.value(), 2.0);
    assert_eq!((3 * a.clone()).value(), 3.0);

    // Same graph shape and gradient as with the number on the right.
    let right = &a + 2.0;
    assert_eq!(sum.num_parents(), right.num_parents());
    product.backward();
    assert_eq!(a.grad(), 2.0);
}
