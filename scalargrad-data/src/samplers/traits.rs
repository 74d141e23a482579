use std::fmt::Debug;

/// Decides the order in which dataset indices are visited.
///
/// `DataLoader` calls [`iter`](Sampler::iter) once per epoch.
pub trait Sampler: Debug {
    /// Returns an iterator over indices in `[0, dataset_len)`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices [`iter`](Sampler::iter) yields for `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
