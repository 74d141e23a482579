use crate::error::ScalarGradError;
use crate::node::Node;
use rand::Rng;
use rand_distr::{Distribution, Normal};

const DEFAULT_LOW: f64 = -1.0;
const DEFAULT_HIGH: f64 = 1.0;

/// Parameter initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform in `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

/// Draws a leaf from the [`Init::default`] range. Infallible: the range is
/// known to be valid.
pub(crate) fn default_uniform<R: Rng + ?Sized>(rng: &mut R) -> Node {
    Node::new(rng.gen_range(DEFAULT_LOW..DEFAULT_HIGH))
}

impl Init {
    /// Draws a new leaf parameter.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidConfig` for an empty or non-finite
    /// uniform range, or a negative or non-finite standard deviation.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Node, ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => uniform(rng, low, high),
            Init::Normal { mean, std } => normal(rng, mean, std),
        }
    }
}

/// Creates a leaf whose value is drawn uniformly from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<Node, ScalarGradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "uniform init requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    Ok(Node::new(rng.gen_range(low..high)))
}

/// Creates a leaf whose value is drawn from `N(mean, std^2)`.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> Result<Node, ScalarGradError> {
    // rand_distr accepts a negative std (it mirrors the distribution).
    if !(std >= 0.0 && std.is_finite()) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "normal init requires a finite std >= 0, got {}",
            std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        ScalarGradError::InvalidConfig(format!("normal init (mean {}, std {}): {}", mean, std, e))
    })?;
    Ok(Node::new(dist.sample(rng)))
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
