//! # Athena Activations - Named Activation Functions
//!
//! The nonlinearity layer of the Athena network library. Activations are plain
//! values built from a name such as `"relu"`, an alias such as `"norm:z"`, or a
//! `+`-joined pipeline such as `"relu+norm:z"`, and applied to `ndarray` tensors
//! of any rank.
//!
//! ## Quick Start
//!
//! ```rust
//! use athena_activations::activations::{build, Kwargs};
//! use ndarray::array;
//!
//! let act = build("truncatedrelu", Kwargs::new()).unwrap();
//! let y = act.forward(&array![-1.0, 0.0, 0.5, 1.0, 2.0]);
//! assert_eq!(y, array![0.0, 0.0, 0.5, 1.0, 1.0]);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Built-in activations, the name registry and the factory
//! - [`debug`] - Numerical checks on activation outputs
//! - [`error`] - Error types and result handling

#[macro_use]
pub mod macros;

pub mod activations;
pub mod debug;
pub mod error;

pub use activations::{build, Activation, ActivationKind, Kwargs};
pub use error::{ActivationError, Result};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

#[cfg(test)]
mod tests;
