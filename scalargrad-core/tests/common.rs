use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use scalargrad_core::Node;

// Helpers shared by the integration tests. Not every test file uses all of
// them, hence the allow(dead_code).

/// Routes `log` output through the test harness. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One construction step of a random expression graph. Indices refer to
/// previously built nodes (leaves first).
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Add(usize, usize),
    Mul(usize, usize),
    Tanh(usize),
    Sigmoid(usize),
}

/// Generates `num_steps` random steps over `num_leaves` leaves. Operands are
/// drawn from all earlier nodes, so shared subexpressions and repeated
/// operands (`x * x`) are common.
#[allow(dead_code)]
pub fn random_recipe(rng: &mut StdRng, num_leaves: usize, num_steps: usize) -> Vec<Step> {
    (0..num_steps)
        .map(|k| {
            let available = num_leaves + k;
            let i = rng.gen_range(0..available);
            let j = rng.gen_range(0..available);
            match rng.gen_range(0..4) {
                0 => Step::Add(i, j),
                1 => Step::Mul(i, j),
                2 => Step::Tanh(i),
                _ => Step::Sigmoid(i),
            }
        })
        .collect()
}

/// Builds the graph described by `recipe` on top of `leaves` and returns every
/// node, leaves included, in construction order.
#[allow(dead_code)]
pub fn build(leaves: &[Node], recipe: &[Step]) -> Vec<Node> {
    let mut nodes = leaves.to_vec();
    for step in recipe {
        let next = match *step {
            Step::Add(i, j) => &nodes[i] + &nodes[j],
            Step::Mul(i, j) => &nodes[i] * &nodes[j],
            Step::Tanh(i) => nodes[i].tanh(),
            Step::Sigmoid(i) => nodes[i].sigmoid(),
        };
        nodes.push(next);
    }
    nodes
}

/// Sums every built node so the root depends on all of them.
#[allow(dead_code)]
pub fn build_root(leaves: &[Node], recipe: &[Step]) -> Node {
    build(leaves, recipe).iter().sum()
}
