use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_neuron(activation: Activation) -> Neuron {
    Neuron::from_parameters(
        vec![Node::new(0.5), Node::new(-1.0)],
        Node::new(0.25),
        activation,
    )
}

fn leaves(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::new(v)).collect()
}

#[test]
fn test_random_parameters_in_range() {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::with_rng(4, Activation::Relu, &mut rng);
    assert_eq!(neuron.nin(), 4);
    assert_eq!(neuron.num_parameters(), 5);
    for p in neuron.parameters() {
        assert!(p.value() >= -1.0 && p.value() < 1.0);
        assert!(p.is_leaf());
    }
}

#[test]
fn test_linear_forward_and_backward() {
    let neuron = fixed_neuron(Activation::Linear);
    let x = leaves(&[2.0, 3.0]);
    let out = neuron.activate(&x).unwrap();
    // 0.25 + 0.5 * 2 - 1 * 3
    assert_relative_eq!(out.value(), -1.75);
    out.backward();
    assert_relative_eq!(neuron.weights()[0].grad(), 2.0);
    assert_relative_eq!(neuron.weights()[1].grad(), 3.0);
    assert_relative_eq!(neuron.bias().grad(), 1.0);
    assert_relative_eq!(x[0].grad(), 0.5);
    assert_relative_eq!(x[1].grad(), -1.0);
}

#[test]
fn test_activations() {
    let x = leaves(&[2.0, 3.0]);
    assert_eq!(fixed_neuron(Activation::Relu).activate(&x).unwrap().value(), 0.0);
    assert_relative_eq!(
        fixed_neuron(Activation::Tanh).activate(&x).unwrap().value(),
        (-1.75_f64).tanh()
    );
    assert_relative_eq!(
        fixed_neuron(Activation::Sigmoid).activate(&x).unwrap().value(),
        1.0 / (1.0 + 1.75_f64.exp())
    );
    assert_eq!(Activation::default(), Activation::Sigmoid);
}

#[test]
fn test_input_size_mismatch() {
    let neuron = fixed_neuron(Activation::Linear);
    let result = neuron.forward(&leaves(&[1.0]));
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_zero_grad_resets_parameters() {
    let neuron = fixed_neuron(Activation::Linear);
    neuron.activate(&leaves(&[1.0, 1.0])).unwrap().backward();
    assert!(neuron.parameters().iter().any(|p| p.grad() != 0.0));
    neuron.zero_grad();
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_with_init() {
    let mut rng = StdRng::seed_from_u64(5);
    let neuron = Neuron::with_init(
        3,
        Activation::Tanh,
        Init::Normal { mean: 0.0, std: 0.1 },
        &mut rng,
    )
    .unwrap();
    assert_eq!(neuron.num_parameters(), 4);
    assert_eq!(neuron.activation(), Activation::Tanh);

    let bad = Neuron::with_init(3, Activation::Tanh, Init::Uniform { low: 1.0, high: 0.0 }, &mut rng);
    assert!(bad.is_err());
}

#[test]
fn test_with_rng_matches_default_init() {
    let from_rng = Neuron::with_rng(4, Activation::Relu, &mut StdRng::seed_from_u64(9));
    let from_init =
        Neuron::with_init(4, Activation::Relu, Init::default(), &mut StdRng::seed_from_u64(9)).unwrap();
    let a: Vec<f64> = from_rng.parameters().iter().map(Node::value).collect();
    let b: Vec<f64> = from_init.parameters().iter().map(Node::value).collect();
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (-1.0..1.0).contains(v)));
}
