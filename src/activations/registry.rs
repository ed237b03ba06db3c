use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::activation::{Activation, Kwargs};
use super::factory::DELIMITER;
use super::kind::ActivationKind;
use crate::error::{ActivationError, Result};

/// Case-insensitive mapping from activation names to built-in variants.
///
/// Keys are stored lowercased and are unique across the whole registry.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, ActivationKind>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Create a registry holding the canonical name and aliases of every
    /// built-in variant.
    pub fn builtin() -> Result<Self> {
        let mut registry = Registry::new();
        for kind in ActivationKind::ALL {
            registry.register(kind.keys(), kind)?;
        }
        Ok(registry)
    }

    /// Register `kind` under every key in `keys`.
    ///
    /// Nothing is inserted if any key is already present or repeated, or if a
    /// key is empty or contains the composition delimiter.
    pub fn register<I, S>(&mut self, keys: I, kind: ActivationKind) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pending: Vec<String> = Vec::new();
        for key in keys {
            let key = key.as_ref().to_lowercase();
            if key.is_empty() || key.contains(DELIMITER) {
                return Err(ActivationError::invalid_parameter(
                    "key".to_string(),
                    format!("'{}' cannot be resolved by name", key),
                ));
            }
            if self.entries.contains_key(&key) || pending.contains(&key) {
                return Err(ActivationError::DuplicateKey { key });
            }
            pending.push(key);
        }
        for key in pending {
            log::trace!("registering activation key '{}' as {:?}", key, kind);
            self.entries.insert(key, kind);
        }
        Ok(())
    }

    /// Look up `key`, ignoring case.
    pub fn lookup(&self, key: &str) -> Result<ActivationKind> {
        self.entries
            .get(&key.to_lowercase())
            .copied()
            .ok_or_else(|| ActivationError::unknown_activation(key))
    }

    /// Look up `name` and construct it with `kwargs`, keeping `name` as given.
    pub fn instantiate(&self, name: &str, kwargs: Kwargs) -> Result<Activation> {
        let kind = self.lookup(name)?;
        Ok(Activation::new(kind, name, kwargs))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// All registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry of built-in activations.
///
/// # Panics
///
/// Panics on first use if two built-in variants declare the same key.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| match Registry::builtin() {
        Ok(registry) => registry,
        Err(err) => panic!("built-in activation table is inconsistent: {}", err),
    })
}
