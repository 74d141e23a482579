//! Trains a small MLP to separate two interleaved half-moons.
//!
//! Run with `RUST_LOG=info cargo run -p scalargrad-optim --example train_mlp`.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::nn::functional::{argmax, leaves};
use scalargrad_core::nn::{cross_entropy, Activation, Layer, Mlp, Module};
use scalargrad_core::{Node, ScalarGradError};
use scalargrad_data::{DataLoader, Dataset, RandomSampler, SequentialSampler, VecDataset};
use scalargrad_optim::{Optimizer, Sgd, SgdConfig};
use std::f64::consts::PI;

type Sample = (Vec<f64>, usize);

const NUM_SAMPLES: usize = 200;
const EPOCHS: usize = 30;
const BATCH_SIZE: usize = 16;
const LEARNING_RATE: f64 = 0.05;

fn make_moons(rng: &mut StdRng, n: usize, noise: f64) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let label = i % 2;
            let t = rng.gen_range(0.0..PI);
            let (x, y) = if label == 0 {
                (t.cos(), t.sin())
            } else {
                (1.0 - t.cos(), 0.5 - t.sin())
            };
            let jitter = |rng: &mut StdRng| rng.gen_range(-noise..noise);
            (vec![x + jitter(&mut *rng), y + jitter(&mut *rng)], label)
        })
        .collect()
}

fn accuracy(model: &Mlp, dataset: &VecDataset<Sample>) -> Result<f64, ScalarGradError> {
    let loader = DataLoader::new(dataset.clone(), 64, SequentialSampler::new(), false)?;
    let mut correct = 0;
    for batch in loader {
        for (features, label) in batch? {
            let logits = model.forward(&leaves(&features))?;
            if argmax(&logits) == Some(label) {
                correct += 1;
            }
        }
    }
    Ok(correct as f64 / dataset.len() as f64)
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(1337);
    let (train_set, test_set) = VecDataset::new(make_moons(&mut rng, NUM_SAMPLES, 0.1))
        .split_at(NUM_SAMPLES * 4 / 5);
    info!("train: {} samples, test: {} samples", train_set.len(), test_set.len());

    let model = Mlp::from_layers(vec![
        Layer::with_rng(2, 16, Activation::Relu, &mut rng),
        Layer::with_rng(16, 16, Activation::Relu, &mut rng),
        Layer::with_rng(16, 2, Activation::Linear, &mut rng),
    ]);
    info!("model has {} parameters", model.num_parameters());

    let mut optimizer = Sgd::new(
        model.parameters(),
        SgdConfig {
            lr: LEARNING_RATE,
            momentum: 0.9,
        },
    )?;
    let sampler = RandomSampler::new(false, None).with_seed(7);
    let mut loader = DataLoader::new(train_set.clone(), BATCH_SIZE, sampler, false)?;

    for epoch in 0..EPOCHS {
        // Linear decay to 10% of the initial rate.
        optimizer.set_lr(LEARNING_RATE * (1.0 - 0.9 * epoch as f64 / EPOCHS as f64));

        let mut epoch_loss = 0.0;
        for batch in loader.by_ref() {
            let batch = batch?;
            optimizer.zero_grad();
            let losses = batch
                .iter()
                .map(|(features, label)| cross_entropy(&model.forward(&leaves(features))?, *label))
                .collect::<Result<Vec<Node>, ScalarGradError>>()?;
            let loss = losses.iter().sum::<Node>() / batch.len() as f64;
            loss.backward();
            optimizer.step()?;
            epoch_loss += loss.value();
        }
        loader.reset();

        if epoch % 5 == 0 || epoch == EPOCHS - 1 {
            info!(
                "epoch {:>2}: loss {:.4}, lr {:.4}, train acc {:.1}%",
                epoch,
                epoch_loss / loader.num_batches() as f64,
                optimizer.lr(),
                100.0 * accuracy(&model, &train_set)?
            );
        }
    }

    info!("test accuracy: {:.1}%", 100.0 * accuracy(&model, &test_set)?);
    Ok(())
}
