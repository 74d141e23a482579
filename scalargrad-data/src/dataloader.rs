//! # DataLoader
//!
//! Batches samples from a [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! One pass over the sampler's indices is an epoch. The loader is an
//! [`Iterator`] over the batches of the current epoch; [`DataLoader::reset`]
//! starts the next one.
//!
//! ```
//! use scalargrad_data::{DataLoader, RandomSampler, VecDataset};
//!
//! let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
//! let mut loader = DataLoader::new(dataset, 4, RandomSampler::new(false, None), true).unwrap();
//! for _epoch in 0..2 {
//!     for batch in loader.by_ref() {
//!         assert_eq!(batch.unwrap().len(), 4);
//!     }
//!     loader.reset();
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use log::debug;
use scalargrad_core::ScalarGradError;

/// Generic batching loader.
///
/// - `batch_size`: number of samples per batch (at least 1).
/// - `drop_last`: when `true`, a trailing batch shorter than `batch_size` is skipped.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader positioned at the start of its first epoch.
    ///
    /// # Errors
    ///
    /// `ScalarGradError::InvalidConfig` if `batch_size` is 0.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Starts a new epoch, asking the sampler for a fresh index order.
    pub fn reset(&mut self) {
        debug!("DataLoader: new epoch over {} samples", self.dataset.len());
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches one full epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, ScalarGradError>;

    /// - `Some(Ok(batch))`: the next batch.
    /// - `Some(Err(e))`: the dataset failed to produce an item.
    /// - `None`: the epoch is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
