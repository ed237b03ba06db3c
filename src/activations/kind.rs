use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

use super::reduce;

/// Stabilizing constant added to reduced statistics before dividing by them.
pub const EPSILON: f32 = 1e-6;

/// An enumeration of the built-in activation functions.
///
/// Reducing variants (softmax and the `norm*` family) treat the last axis as
/// the feature axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    #[default]
    Linear,
    Tanh,
    Logistic,
    Softmax,
    Softplus,
    Relu,
    RectMax,
    TruncatedRelu,
    NormMean,
    NormMax,
    NormStd,
    NormZ,
}

impl ActivationKind {
    /// Every built-in variant, in registration order.
    pub const ALL: [ActivationKind; 12] = [
        ActivationKind::Linear,
        ActivationKind::Tanh,
        ActivationKind::Logistic,
        ActivationKind::Softmax,
        ActivationKind::Softplus,
        ActivationKind::Relu,
        ActivationKind::RectMax,
        ActivationKind::TruncatedRelu,
        ActivationKind::NormMean,
        ActivationKind::NormMax,
        ActivationKind::NormStd,
        ActivationKind::NormZ,
    ];

    /// The primary lookup key, the lowercased variant name.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ActivationKind::Linear => "linear",
            ActivationKind::Tanh => "tanh",
            ActivationKind::Logistic => "logistic",
            ActivationKind::Softmax => "softmax",
            ActivationKind::Softplus => "softplus",
            ActivationKind::Relu => "relu",
            ActivationKind::RectMax => "rectmax",
            ActivationKind::TruncatedRelu => "truncatedrelu",
            ActivationKind::NormMean => "normmean",
            ActivationKind::NormMax => "normmax",
            ActivationKind::NormStd => "normstd",
            ActivationKind::NormZ => "normz",
        }
    }

    /// Extra lookup keys besides the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ActivationKind::Logistic => &["sigmoid"],
            ActivationKind::Relu => &["rect:min"],
            ActivationKind::RectMax => &["rect:max"],
            ActivationKind::TruncatedRelu => &["trelu", "rect:minmax"],
            ActivationKind::NormMean => &["norm:mean"],
            ActivationKind::NormMax => &["norm:max"],
            ActivationKind::NormStd => &["norm:std"],
            ActivationKind::NormZ => &["norm:z"],
            _ => &[],
        }
    }

    /// Canonical name followed by the aliases.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_name()).chain(self.aliases().iter().copied())
    }

    /// Whether each output element depends only on the matching input element.
    pub fn is_elementwise(&self) -> bool {
        !matches!(
            self,
            ActivationKind::Softmax
                | ActivationKind::NormMean
                | ActivationKind::NormMax
                | ActivationKind::NormStd
                | ActivationKind::NormZ
        )
    }

    /// Compute the activation of `x`. The output has the shape of `x`.
    ///
    /// A rank-0 input is treated as a single feature.
    pub fn forward(&self, x: ArrayViewD<f32>) -> ArrayD<f32> {
        if x.ndim() == 0 {
            return self.forward(x.insert_axis(Axis(0))).remove_axis(Axis(0));
        }
        match self {
            ActivationKind::Linear => x.to_owned(),
            ActivationKind::Tanh => x.mapv(f32::tanh),
            ActivationKind::Logistic => x.mapv(|v| 1.0 / (1.0 + (-v).exp())),
            ActivationKind::Softmax => {
                let z = (&x - &reduce::max(&x)).mapv(f32::exp);
                &z / &reduce::sum(&z)
            }
            // log(1 + e^x) rewritten so large |x| neither overflows nor loses precision
            ActivationKind::Softplus => x.mapv(|v| v.max(0.0) + (-v.abs()).exp().ln_1p()),
            ActivationKind::Relu => x.mapv(|v| (v + v.abs()) / 2.0),
            ActivationKind::RectMax => x.mapv(|v| (1.0 + v - (v - 1.0).abs()) / 2.0),
            ActivationKind::TruncatedRelu => {
                x.mapv(|v| (1.0 + v.abs() - (v - 1.0).abs()) / 2.0)
            }
            ActivationKind::NormMean => &x - &reduce::mean(&x),
            ActivationKind::NormMax => &x / &(reduce::max_abs(&x) + EPSILON),
            ActivationKind::NormStd => &x / &(reduce::std(&x) + EPSILON),
            ActivationKind::NormZ => {
                let centered = &x - &reduce::mean(&x);
                &centered / &(reduce::std(&x) + EPSILON)
            }
        }
    }
}
