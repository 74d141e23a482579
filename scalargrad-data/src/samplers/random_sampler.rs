use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Randomly samples indices from a dataset.
///
/// Without a seed every epoch draws from `thread_rng`. With
/// [`with_seed`](RandomSampler::with_seed) the sequence of epochs is
/// reproducible: epoch `k` is shuffled by an RNG seeded from `seed + k`.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    epoch: AtomicU64,
}

impl RandomSampler {
    /// * `replacement`: if `true`, an index can be selected multiple times.
    /// * `num_samples`: number of indices to draw per epoch. Defaults to the
    ///   dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            epoch: AtomicU64::new(0),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    fn draw<R: Rng>(&self, rng: &mut R, dataset_len: usize) -> Vec<usize> {
        let num_samples = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            return (0..num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
        }
        if num_samples > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                num_samples, dataset_len
            );
            return Vec::new();
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(rng);
        indices.truncate(num_samples);
        indices
    }
}

impl Clone for RandomSampler {
    fn clone(&self) -> Self {
        RandomSampler {
            replacement: self.replacement,
            num_samples: self.num_samples,
            seed: self.seed,
            epoch: AtomicU64::new(self.epoch.load(Ordering::Relaxed)),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let indices = match self.seed {
            Some(seed) => {
                let epoch = self.epoch.fetch_add(1, Ordering::Relaxed);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(epoch));
                self.draw(&mut rng, dataset_len)
            }
            None => self.draw(&mut rand::thread_rng(), dataset_len),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let num_samples = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && num_samples > dataset_len) {
            0
        } else {
            num_samples
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
