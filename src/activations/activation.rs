use std::fmt;
use std::str::FromStr;

use ndarray::{Array, Array2, ArrayD, ArrayViewD, Dimension};
use serde::{Deserialize, Serialize};

use super::config::ActivationConfig;
use super::kind::ActivationKind;
use crate::debug::numerical_check::{self, NumericalIssue};
use crate::error::{ActivationError, Result};

/// Keyword configuration captured when an activation is constructed.
pub type Kwargs = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug, PartialEq)]
enum Transform {
    Builtin(ActivationKind),
    /// Apply the first activation, then feed its output to the second.
    Composed(Box<Activation>, Box<Activation>),
}

/// A named activation function, either a built-in variant or a pipeline of
/// activations built from a `+`-joined spec.
///
/// Activations own no mutable state: applying one twice to the same input
/// gives bit-identical output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActivationConfig", into = "ActivationConfig")]
pub struct Activation {
    name: String,
    spec: String,
    kwargs: Kwargs,
    params: Vec<ArrayD<f32>>,
    transform: Transform,
}

impl Activation {
    /// Create a built-in activation displayed as `name`.
    pub fn new<S: Into<String>>(kind: ActivationKind, name: S, kwargs: Kwargs) -> Self {
        let name = name.into();
        Activation {
            spec: name.clone(),
            name,
            kwargs,
            params: Vec::new(),
            transform: Transform::Builtin(kind),
        }
    }

    /// Compose two activations so that `first` runs before `second`.
    ///
    /// The result is named `"<second>(<first>)"` and carries no kwargs or params.
    /// Its spec joins the stage specs only, so kwargs held by either stage are
    /// not written out when the composition is serialized.
    pub fn compose(first: Activation, second: Activation) -> Self {
        let name = format!("{}({})", second.name, first.name);
        let spec = format!("{}+{}", first.spec, second.spec);
        for stage in [&first, &second] {
            if !stage.kwargs.is_empty() {
                log::debug!(
                    "kwargs of stage '{}' are not part of composed spec '{}'",
                    stage.name,
                    spec
                );
            }
        }
        log::debug!("composed activation {}", name);
        Activation {
            name,
            spec,
            kwargs: Kwargs::new(),
            params: Vec::new(),
            transform: Transform::Composed(Box::new(first), Box::new(second)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The textual spec this activation was built from, e.g. `"relu+norm:z"`.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    /// Learnable parameters. Always empty for the built-in variants.
    pub fn params(&self) -> &[ArrayD<f32>] {
        &self.params
    }

    /// The built-in variant, or `None` for a composition.
    pub fn kind(&self) -> Option<ActivationKind> {
        match &self.transform {
            Transform::Builtin(kind) => Some(*kind),
            Transform::Composed(..) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.transform, Transform::Composed(..))
    }

    /// The built-in variants this activation applies, in application order.
    pub fn pipeline(&self) -> Vec<ActivationKind> {
        match &self.transform {
            Transform::Builtin(kind) => vec![*kind],
            Transform::Composed(first, second) => {
                let mut kinds = first.pipeline();
                kinds.extend(second.pipeline());
                kinds
            }
        }
    }

    /// Compute the activation of `x`.
    pub fn call(&self, x: ArrayViewD<f32>) -> ArrayD<f32> {
        match &self.transform {
            Transform::Builtin(kind) => kind.forward(x),
            Transform::Composed(first, second) => second.call(first.call(x).view()),
        }
    }

    /// Compute the activation of `x` and fail if finite input produced a
    /// non-finite output.
    pub fn call_checked(&self, x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
        let output = self.call(x.view());
        if x.iter().all(|v| v.is_finite()) {
            let issues = numerical_check::check_output(&self.name, output.view());
            if !issues.is_empty() {
                let summary: Vec<String> = issues.iter().map(NumericalIssue::to_string).collect();
                return Err(ActivationError::NumericalError(format!(
                    "activation '{}' produced {}",
                    self.name,
                    summary.join(", ")
                )));
            }
        }
        Ok(output)
    }

    /// Compute the activation of an array of any fixed dimensionality.
    pub fn forward<D: Dimension>(&self, x: &Array<f32, D>) -> Array<f32, D> {
        let mut output = x.clone();
        self.apply(&mut output);
        output
    }

    /// Apply the activation function to an input array in-place.
    pub fn apply<D: Dimension>(&self, input: &mut Array<f32, D>) {
        let output = self.call(input.view().into_dyn());
        input.view_mut().into_dyn().assign(&output);
    }

    /// Apply the activation function to a batch of inputs, one row per sample.
    #[inline]
    pub fn apply_batch(&self, inputs: &mut Array2<f32>) {
        self.apply(inputs)
    }
}

impl From<ActivationKind> for Activation {
    fn from(kind: ActivationKind) -> Self {
        Activation::new(kind, kind.canonical_name(), Kwargs::new())
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Activation {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self> {
        super::factory::build(s, Kwargs::new())
    }
}

impl TryFrom<ActivationConfig> for Activation {
    type Error = ActivationError;

    fn try_from(config: ActivationConfig) -> Result<Self> {
        config.build()
    }
}

impl From<Activation> for ActivationConfig {
    fn from(activation: Activation) -> Self {
        if activation.kwargs.is_empty() {
            ActivationConfig::Name(activation.spec)
        } else {
            ActivationConfig::Detailed {
                name: activation.spec,
                kwargs: activation.kwargs,
            }
        }
    }
}
