use super::activation::{Activation, Kwargs};
use super::registry::{registry, Registry};
use crate::error::{ActivationError, Result};

/// Separator between the stages of a composite spec.
pub const DELIMITER: char = '+';

/// Something `build` can turn into an activation.
#[derive(Clone, Debug, PartialEq)]
pub enum ActivationSpec {
    /// An already-built activation, passed through unchanged.
    Instance(Activation),
    /// A single name or a `+`-joined composite spec.
    Name(String),
}

impl From<Activation> for ActivationSpec {
    fn from(activation: Activation) -> Self {
        ActivationSpec::Instance(activation)
    }
}

impl From<&str> for ActivationSpec {
    fn from(name: &str) -> Self {
        ActivationSpec::Name(name.to_string())
    }
}

impl From<String> for ActivationSpec {
    fn from(name: String) -> Self {
        ActivationSpec::Name(name)
    }
}

/// Build an activation from the process-wide registry.
///
/// # Examples
///
/// ```
/// use athena_activations::activations::{build, Kwargs};
/// use ndarray::array;
///
/// let act = build("relu+norm:max", Kwargs::new()).unwrap();
/// assert_eq!(act.name(), "norm:max(relu)");
/// let y = act.forward(&array![-3.0f32, 0.0, 3.0]);
/// assert!((y[2] - 1.0).abs() < 1e-5);
/// ```
pub fn build<S: Into<ActivationSpec>>(spec: S, kwargs: Kwargs) -> Result<Activation> {
    registry().build(spec, kwargs)
}

impl Registry {
    /// Resolve `spec` into a single activation.
    ///
    /// `kwargs` only reach a single, non-composite name. Each stage of a
    /// composite spec is built with empty kwargs and anything passed here is
    /// dropped.
    pub fn build<S: Into<ActivationSpec>>(&self, spec: S, kwargs: Kwargs) -> Result<Activation> {
        let name = match spec.into() {
            ActivationSpec::Instance(activation) => return Ok(activation),
            ActivationSpec::Name(name) => name,
        };
        if name.is_empty() {
            return Err(ActivationError::EmptySegment { spec: name, index: 0 });
        }
        if !name.contains(DELIMITER) {
            log::debug!("building activation '{}'", name);
            return self.instantiate(&name, kwargs);
        }

        if !kwargs.is_empty() {
            log::debug!(
                "ignoring {} kwargs for composite activation '{}'",
                kwargs.len(),
                name
            );
        }
        let mut stages = Vec::new();
        for (index, segment) in name.split(DELIMITER).enumerate() {
            if segment.is_empty() {
                return Err(ActivationError::EmptySegment { spec: name.clone(), index });
            }
            stages.push(self.instantiate(segment, Kwargs::new())?);
        }
        let mut stages = stages.into_iter();
        let first = match stages.next() {
            Some(first) => first,
            None => return Err(ActivationError::EmptySegment { spec: name, index: 0 }),
        };
        Ok(stages.fold(first, Activation::compose))
    }
}
