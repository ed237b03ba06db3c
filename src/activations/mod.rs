//! # Activation Functions Module
//!
//! This module provides the activation functions applied after a layer's linear
//! transform, together with a registry that resolves them by name.
//!
//! ## Available Activations
//!
//! | Name | Aliases | Output |
//! |---|---|---|
//! | `linear` | | `x` |
//! | `tanh` | | `tanh(x)` |
//! | `logistic` | `sigmoid` | `1 / (1 + e^(-x))` |
//! | `softmax` | | normalized exponentials along the last axis |
//! | `softplus` | | `log(1 + e^x)` |
//! | `relu` | `rect:min` | `max(x, 0)` |
//! | `rectmax` | `rect:max` | `min(x, 1)` |
//! | `truncatedrelu` | `trelu`, `rect:minmax` | `clamp(x, 0, 1)` |
//! | `normmean` | `norm:mean` | `x - mean(x)` |
//! | `normmax` | `norm:max` | `x / max(abs(x))` |
//! | `normstd` | `norm:std` | `x / std(x)` |
//! | `normz` | `norm:z` | `(x - mean(x)) / std(x)` |
//!
//! The reducing activations work along the last axis and add `1e-6` to any
//! statistic they divide by. Names are case-insensitive.
//!
//! ## Composition
//!
//! Names joined with `+` are applied left to right: `"relu+norm:z"` first
//! rectifies, then z-normalizes the result.
//!
//! ## Usage Example
//!
//! ```rust
//! use athena_activations::activations::{build, Activation, Kwargs};
//! use ndarray::array;
//!
//! let relu = build("relu", Kwargs::new()).unwrap();
//! let mut data = array![1.0, -0.5, 0.0, 2.0];
//! relu.apply(&mut data);
//! assert_eq!(data, array![1.0, 0.0, 0.0, 2.0]);
//!
//! let pipeline: Activation = "relu+softmax".parse().unwrap();
//! assert_eq!(pipeline.name(), "softmax(relu)");
//! ```

pub mod activation;
pub mod config;
pub mod factory;
pub mod kind;
pub mod reduce;
pub mod registry;

pub use activation::{Activation, Kwargs};
pub use config::ActivationConfig;
pub use factory::{build, ActivationSpec};
pub use kind::{ActivationKind, EPSILON};
pub use registry::{registry, Registry};
