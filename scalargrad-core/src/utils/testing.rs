use crate::node::Node;

/// Checks that two slices of values are approximately equal.
/// Panics if lengths differ or any pair differs by more than `tolerance`.
pub fn check_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks the gradients of `nodes` against `expected`. See [`check_near`].
pub fn check_grads_near(nodes: &[Node], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = nodes.iter().map(Node::grad).collect();
    check_near(&grads, expected, tolerance);
}
