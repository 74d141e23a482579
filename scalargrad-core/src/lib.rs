//! # ScalarGrad core
//!
//! A dynamic computation graph over scalar `f64` values with reverse-mode automatic
//! differentiation. Every arithmetic or activation call allocates a new [`Node`]
//! linked to its operands; calling [`Node::backward`] on any node accumulates
//! `d(node)/d(ancestor)` into the gradient of every ancestor.
//!
//! ```
//! use scalargrad_core::Node;
//!
//! let a = Node::new(2.0);
//! let b = Node::new(3.0);
//! let c = &a * &b + &a;
//! assert_eq!(c.value(), 8.0);
//!
//! c.backward();
//! assert_eq!(a.grad(), 4.0); // b + 1
//! assert_eq!(b.grad(), 2.0); // a
//! ```

pub mod autograd;
pub mod node;
pub mod node_data;
pub mod operand;
pub mod ops;

pub mod nn;
pub mod utils;

pub mod error;

pub use error::ScalarGradError;
pub use node::{make_node, Node, NodeId};
pub use operand::Operand;
