use super::*;

#[test]
fn test_mul_forward_and_backward() {
    let a = Node::new(2.0);
    let b = Node::new(-4.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.value(), -8.0);
    assert_eq!(c.label(), "*");
    c.backward();
    assert_eq!(a.grad(), -4.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_by_self() {
    let a = Node::new(3.0);
    let c = &a * &a;
    assert_eq!(c.value(), 9.0);
    c.backward();
    // d(a*a)/da = 2a, one `a` contribution per operand slot.
    assert_eq!(a.grad(), 6.0);
}

#[test]
fn test_mul_scalar_either_side() {
    let a = Node::new(1.5);
    let left = &a * 4.0;
    let right = 4.0 * &a;
    assert_eq!(left.value(), right.value());
    assert_eq!(left.op(), right.op());
    left.backward();
    assert_eq!(a.grad(), 4.0);
    a.zero_grad();
    right.backward();
    assert_eq!(a.grad(), 4.0);
}

#[test]
fn test_mul_integer_operand() {
    let a = Node::new(1.5);
    let c = 2 * &a;
    assert_eq!(c.value(), 3.0);
}
