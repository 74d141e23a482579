use super::traits::Dataset;
use scalargrad_core::ScalarGradError;

/// A dataset backed by a `Vec`. Each element is one sample, cloned on access.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Splits the dataset in two at `at`: items `[0, at)` and `[at, len)`.
    /// `at` is clamped to the dataset length.
    pub fn split_at(mut self, at: usize) -> (VecDataset<T>, VecDataset<T>) {
        let at = at.min(self.data.len());
        let tail = self.data.split_off(at);
        (self, VecDataset::new(tail))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
