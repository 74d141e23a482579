use scalargrad_core::ScalarGradError;

/// Indexed access to a collection of samples.
///
/// An item is whatever one training example is for the model at hand, e.g. a
/// `(Vec<f64>, usize)` pair of features and class label.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
