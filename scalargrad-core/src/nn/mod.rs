// src/nn/mod.rs
// Neural network building blocks composed from scalar nodes.

pub mod functional;
pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::Init;
pub use layer::Layer;
pub use losses::{cross_entropy, mse};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Activation, Neuron};
