pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::cross_entropy;
pub use mse::mse;
