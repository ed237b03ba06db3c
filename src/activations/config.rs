use serde::{Deserialize, Serialize};

use super::activation::{Activation, Kwargs};
use super::factory;
use crate::error::Result;

/// How an activation appears in a layer configuration file.
///
/// Either a bare spec string such as `"relu+norm:z"`, or an object with a
/// `name` and optional `kwargs`:
///
/// ```json
/// { "name": "softmax", "kwargs": { "temperature": 1.0 } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivationConfig {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
        kwargs: Kwargs,
    },
}

impl ActivationConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn name(&self) -> &str {
        match self {
            ActivationConfig::Name(name) | ActivationConfig::Detailed { name, .. } => name,
        }
    }

    /// Build the activation this configuration describes.
    pub fn build(&self) -> Result<Activation> {
        match self {
            ActivationConfig::Name(name) => factory::build(name.as_str(), Kwargs::new()),
            ActivationConfig::Detailed { name, kwargs } => {
                factory::build(name.as_str(), kwargs.clone())
            }
        }
    }
}
